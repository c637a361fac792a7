//! The query string understood by `load_filter_products`.
//!
//! Grammar:
//!
//! ```text
//! category=<cat>[::gender=<id>][::apparel=<id>][::brand=<id>][::price=<id>]::page=<n>,<size>
//! ```
//!
//! With no filters this is the plain `category=all::page=0,20` form.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::filter_attributes::AttributeId;
use crate::selected_filter_attributes::SelectedFilterAttributes;

pub const ALL_CATEGORIES: &str = "all";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

const SEPARATOR: &str = "::";

/// An error that can occur when parsing a products query string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseQueryError {
    #[error("query must start with a `category=` segment")]
    MissingCategory,
    #[error("query must end with a `page=<n>,<size>` segment")]
    MissingPage,
    #[error("unknown query segment `{0}`")]
    UnknownSegment(String),
    #[error("segment `{0}` appears more than once")]
    DuplicateSegment(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("category `{0}` must be non-empty and free of `:` and `=`")]
    InvalidCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsQuery {
    pub category: String,
    pub gender: Option<AttributeId>,
    pub apparel: Option<AttributeId>,
    pub brand: Option<AttributeId>,
    pub price: Option<AttributeId>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for ProductsQuery {
    fn default() -> Self {
        Self::all()
    }
}

impl ProductsQuery {
    /// First page of every product, unfiltered.
    pub fn all() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            gender: None,
            apparel: None,
            brand: None,
            price: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// First page of `ALL_CATEGORIES` narrowed by the current selection.
    pub fn from_selection(selection: &SelectedFilterAttributes) -> Self {
        Self {
            gender: selection.gender,
            apparel: selection.apparel,
            brand: selection.brand,
            price: selection.price,
            ..Self::all()
        }
    }

    /// Replaces the category. Fails for names the query grammar cannot carry.
    pub fn with_category(mut self, category: impl Into<String>) -> Result<Self, ParseQueryError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(self)
    }

    fn filters(&self) -> [(&'static str, Option<AttributeId>); 4] {
        [
            ("gender", self.gender),
            ("apparel", self.apparel),
            ("brand", self.brand),
            ("price", self.price),
        ]
    }
}

impl fmt::Display for ProductsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category={}", self.category)?;
        for (key, id) in self.filters() {
            if let Some(id) = id {
                write!(f, "{SEPARATOR}{key}={id}")?;
            }
        }
        write!(f, "{SEPARATOR}page={},{}", self.page, self.page_size)
    }
}

fn validate_category(category: &str) -> Result<(), ParseQueryError> {
    if category.is_empty() || category.contains([':', '=']) {
        return Err(ParseQueryError::InvalidCategory(category.to_string()));
    }
    Ok(())
}

fn invalid(key: &str, value: &str) -> ParseQueryError {
    ParseQueryError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_number(key: &str, value: &str) -> Result<u32, ParseQueryError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

impl FromStr for ProductsQuery {
    type Err = ParseQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments: Vec<&str> = s.split(SEPARATOR).collect();

        let category = segments
            .first()
            .and_then(|seg| seg.strip_prefix("category="))
            .ok_or(ParseQueryError::MissingCategory)?;
        validate_category(category)?;

        let (page, page_size) = match segments.len() {
            0 | 1 => return Err(ParseQueryError::MissingPage),
            _ => {
                let last = segments.pop().unwrap_or_default();
                let value = last
                    .strip_prefix("page=")
                    .ok_or(ParseQueryError::MissingPage)?;
                let (page, size) = value.split_once(',').ok_or_else(|| invalid("page", value))?;
                (parse_number("page", page)?, parse_number("page", size)?)
            }
        };

        let mut query = ProductsQuery {
            category: category.to_string(),
            page,
            page_size,
            ..ProductsQuery::all()
        };

        for segment in &segments[1..] {
            let (key, value) = segment
                .split_once('=')
                .ok_or_else(|| ParseQueryError::UnknownSegment(segment.to_string()))?;
            let slot = match key {
                "gender" => &mut query.gender,
                "apparel" => &mut query.apparel,
                "brand" => &mut query.brand,
                "price" => &mut query.price,
                _ => return Err(ParseQueryError::UnknownSegment(segment.to_string())),
            };
            if slot.is_some() {
                return Err(ParseQueryError::DuplicateSegment(key.to_string()));
            }
            *slot = Some(AttributeId(parse_number(key, value)?));
        }

        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_query_matches_clear_all_literal() {
        assert_eq!(ProductsQuery::all().to_string(), "category=all::page=0,20");
    }

    #[test]
    fn selection_segments_follow_fixed_order() {
        let selection = SelectedFilterAttributes {
            gender: Some(AttributeId(1)),
            apparel: None,
            brand: Some(AttributeId(12)),
            price: Some(AttributeId(3)),
        };
        let query = ProductsQuery {
            page: 2,
            ..ProductsQuery::from_selection(&selection)
        };
        assert_eq!(
            query.to_string(),
            "category=all::gender=1::brand=12::price=3::page=2,20"
        );
    }

    #[test]
    fn parses_what_it_prints() {
        let text = "category=tshirts::apparel=4::page=1,40";
        let query: ProductsQuery = text.parse().unwrap();
        assert_eq!(query.category, "tshirts");
        assert_eq!(query.apparel, Some(AttributeId(4)));
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 40);
        assert_eq!(query.to_string(), text);
    }

    #[test]
    fn rejects_malformed_queries() {
        assert_eq!(
            "page=0,20".parse::<ProductsQuery>(),
            Err(ParseQueryError::MissingCategory)
        );
        assert_eq!(
            "category=all".parse::<ProductsQuery>(),
            Err(ParseQueryError::MissingPage)
        );
        assert_eq!(
            "category=all::colour=2::page=0,20".parse::<ProductsQuery>(),
            Err(ParseQueryError::UnknownSegment("colour=2".to_string()))
        );
        assert_eq!(
            "category=all::brand=1::brand=2::page=0,20".parse::<ProductsQuery>(),
            Err(ParseQueryError::DuplicateSegment("brand".to_string()))
        );
        assert!(matches!(
            "category=all::page=zero,20".parse::<ProductsQuery>(),
            Err(ParseQueryError::InvalidValue { .. })
        ));
    }

    #[test]
    fn category_that_would_break_the_grammar_is_refused() {
        for bad in ["", "men::brand=1", "a=b", "kids:"] {
            assert_eq!(
                ProductsQuery::all().with_category(bad),
                Err(ParseQueryError::InvalidCategory(bad.to_string())),
                "{:?}",
                bad
            );
        }
        let query = ProductsQuery::all().with_category("t-shirts").unwrap();
        assert_eq!(query.to_string(), "category=t-shirts::page=0,20");
    }

    #[test]
    fn parsing_applies_the_same_category_rule() {
        assert_eq!(
            "category=a=b::page=0,20".parse::<ProductsQuery>(),
            Err(ParseQueryError::InvalidCategory("a=b".to_string()))
        );
        assert_eq!(
            "category=::page=0,20".parse::<ProductsQuery>(),
            Err(ParseQueryError::InvalidCategory(String::new()))
        );
    }
}
