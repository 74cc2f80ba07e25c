pub mod config;
pub mod error;
pub mod types;
pub mod usage;

pub use config::Config;
pub use error::MeridianError;
pub use types::*;
pub use usage::*;
