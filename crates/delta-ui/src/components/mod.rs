//! Reusable building blocks shared by the page sections

pub mod fallback_image;
pub mod reveal;

pub use fallback_image::FallbackImg;
pub use reveal::{Reveal, use_reveal};
