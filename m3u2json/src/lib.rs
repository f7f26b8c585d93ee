mod config;
mod convert;
pub use config::*;
pub use convert::*;
pub mod errors;
