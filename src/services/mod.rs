pub mod errors;
pub mod freight;

pub use errors::{ServiceError, ServiceResult};
