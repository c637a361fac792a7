//! Shared building blocks for the storefront screens.
pub mod category_link;
pub mod document_title;
pub mod empty_state;
pub mod filter_check_box_section;
pub mod home_menu_icons;
pub mod pico;
pub mod product_card;
pub mod radio_buttons_group;
pub mod title_header;
pub mod top_categories_and_brands;
pub mod vertical_slider;
