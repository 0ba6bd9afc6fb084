//! Leptos 0.7 CSR front end for the Delta Studio site
//!
//! A single right-to-left Hebrew page. Interaction state (reveal latches,
//! the category filter, the testimonial carousel) lives in `delta-core`;
//! this crate renders it and connects it to browser observers and timers.
//!
//! ## Module Structure
//! - `app`: root component and embedded site config
//! - `pages`: page layout
//! - `sections`: hero, about, services, gallery, testimonials, location, footer
//! - `components`: reveal-on-scroll wrapper and fallback image
//! - `dom`: `IntersectionObserver` adapter
//! - `logging`: `tracing` subscriber writing to the browser console
//! - `error`: UI error type

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod dom;
pub mod error;
pub mod logging;
pub mod pages;
pub mod sections;

pub use app::App;
