pub mod storefront_prefs;
pub mod text_direction;
