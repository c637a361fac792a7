//! Content of the storefront home page.

use serde::Deserialize;
use serde::Serialize;

/// A shortcut icon in the strip at the top of the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryIcon {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    /// Category name passed to the products query when the icon is clicked.
    pub category: String,
}

/// A promotional banner shown in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSlide {
    pub id: u32,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTile {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandTile {
    pub id: u32,
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    #[serde(default)]
    pub menu_icons: Vec<CategoryIcon>,
    #[serde(default)]
    pub carousel: Vec<CarouselSlide>,
    #[serde(default)]
    pub categories: Vec<CategoryTile>,
    #[serde(default)]
    pub brands: Vec<BrandTile>,
}
