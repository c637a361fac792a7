use super::text_direction::TextDirection;
use serde::Deserialize;
use serde::Serialize;

/// Storefront-wide presentation settings, resolved on the server and handed
/// to the client before the first screen renders.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct StorefrontPrefs {
    text_direction: TextDirection,
}

impl StorefrontPrefs {
    pub fn new(text_direction: TextDirection) -> Self {
        Self { text_direction }
    }

    pub fn text_direction(&self) -> TextDirection {
        self.text_direction
    }
}

impl Default for StorefrontPrefs {
    fn default() -> Self {
        Self::new(TextDirection::from_env())
    }
}
