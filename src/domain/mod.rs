//! Domain aggregates exposed by the freight service layer.

pub mod freight;
pub mod properties;
pub mod types;
