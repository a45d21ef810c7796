pub mod domain;
pub mod endpoint;
pub mod error;

pub use domain::*;
pub use endpoint::Endpoint;
pub use error::{Error, Result};
