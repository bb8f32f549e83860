//! Platform-independent logic and the thin platform adapters it needs.

pub mod platform;
pub mod reveal;
pub mod style;
pub mod timing;
pub mod visibility;
