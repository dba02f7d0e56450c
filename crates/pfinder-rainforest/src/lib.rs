//! Client for the Rainforest API product-search endpoint.

pub mod client;
pub mod error;

pub use client::RainforestClient;
pub use error::RainforestError;
