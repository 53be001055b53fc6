//! Core non-UI logic: page arithmetic and the question view operations.

pub mod pagination;
pub mod view;

pub use pagination::{clamp_page, page_count, page_indicators};
