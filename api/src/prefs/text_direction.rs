use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Writing direction of the storefront locale.
///
/// Decides which edge the temporary filter drawer slides in from.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Reads `STOREFRONT_TEXT_DIRECTION` ("ltr" or "rtl", case-insensitive).
    /// Missing or unrecognized values fall back to left-to-right.
    pub fn from_env() -> Self {
        Self::parse_or_default(env::var("STOREFRONT_TEXT_DIRECTION").ok().as_deref())
    }

    fn parse_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|s| TextDirection::from_str(s.trim()).ok())
            .unwrap_or_default()
    }

    /// Value for the html `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(TextDirection::parse_or_default(Some("RTL")), TextDirection::Rtl);
        assert_eq!(TextDirection::parse_or_default(Some(" ltr ")), TextDirection::Ltr);
    }

    #[test]
    fn falls_back_to_ltr() {
        assert_eq!(TextDirection::parse_or_default(None), TextDirection::Ltr);
        assert_eq!(TextDirection::parse_or_default(Some("sideways")), TextDirection::Ltr);
    }

    #[test]
    fn html_dir_value() {
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
    }
}
