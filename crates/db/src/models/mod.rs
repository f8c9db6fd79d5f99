//! Row and response types for the catalog tables.

pub mod browse;
pub mod contributor;
pub mod genre;
pub mod title;
