//! Browser API adapters

pub mod observer;

pub use observer::IntersectionWatcher;
