//! Core logic for the Delta Studio site
//!
//! Everything here is plain Rust with no DOM dependency, so it runs and is
//! tested natively. The Leptos front end (`delta-ui`) wires these types to the
//! browser.
//!
//! ## Module Structure
//! - `models`: content records (services, products, testimonials, hours)
//! - `catalog`: the static Hebrew content
//! - `reveal`: one-shot reveal-on-scroll latch and observer seam
//! - `gallery`: product category filter
//! - `carousel`: auto-advancing testimonial rotation
//! - `contact`: `tel:` / `mailto:` link builders
//! - `image`: image-load fallback
//! - `config`: site configuration
//! - `error`, `result`: error type and combinators

#![forbid(unsafe_code)]

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod image;
pub mod models;
pub mod result;
pub mod reveal;

pub use error::Error;
pub use result::{Result, ResultExt};
