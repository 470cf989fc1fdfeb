pub mod common;
pub mod hooks;
pub mod icon;
pub mod landing;
pub mod pages;
pub mod theme;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
