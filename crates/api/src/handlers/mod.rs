pub mod browse;
pub mod contributor;
pub mod title;
