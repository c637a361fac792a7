//! The universe of filterable values served by the catalog service.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Identifier of a single filter value (a gender, apparel type, brand or price range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(pub u32);

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AttributeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// One selectable value in a filter group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterAttribute {
    pub id: AttributeId,
    pub value: String,
}

impl FilterAttribute {
    pub fn new(id: u32, value: impl Into<String>) -> Self {
        Self {
            id: AttributeId(id),
            value: value.into(),
        }
    }
}

/// Every value the filter navigation can offer, grouped by category.
///
/// The UI never edits a catalog; a reload replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterAttributeCatalog {
    pub genders: Vec<FilterAttribute>,
    pub apparels: Vec<FilterAttribute>,
    pub brands: Vec<FilterAttribute>,
    pub price_ranges: Vec<FilterAttribute>,
}

impl FilterAttributeCatalog {
    /// Looks up an entry by the 1-based position used by the radio and checkbox widgets.
    pub fn nth(list: &[FilterAttribute], index: usize) -> Option<&FilterAttribute> {
        index.checked_sub(1).and_then(|i| list.get(i))
    }
}
