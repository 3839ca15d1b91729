//! Database models shared across the freight repository.

pub mod config;
pub mod freight;
