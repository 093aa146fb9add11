//! Page Components

mod landing;
mod placeholder;

pub use landing::LandingPage;
pub use placeholder::PlaceholderPage;
