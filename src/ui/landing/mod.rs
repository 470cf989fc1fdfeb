//! Sections of the landing page, top to bottom

mod background_blob;
mod chat_mock;
mod feature_showcase;
mod features;
mod footer;
mod hero;
mod navbar;
mod pricing;
mod testimonials;

pub use feature_showcase::FeatureShowcase;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
