pub mod config;
pub mod error;
pub mod executor;
pub mod logger;
pub mod resolver;
pub mod run;
pub mod selector;
pub mod statement;
pub mod types;
pub mod warehouse;

pub use error::{Result, TidyError};
