//! Domain logic for the marquee catalog API.
//!
//! Nothing in here touches the network or the database: request parameter
//! normalization lives in [`browse`], flat-row grouping in [`aggregate`].

pub mod aggregate;
pub mod browse;
pub mod error;
pub mod types;
