pub mod config;
pub mod error;
pub mod models;
pub mod shape;
pub mod transport;
pub mod usage;

pub use config::*;
pub use error::{Error, Result};
pub use models::*;
pub use transport::*;
pub use usage::Usage;
