pub mod filter_nav_bar;
pub mod home;
pub mod products;
