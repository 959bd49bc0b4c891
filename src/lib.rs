pub mod cli;
pub mod config;
pub mod error;
pub mod fmt;
pub mod logging;
pub mod render;
pub mod state;

pub use error::{Result, StateToHclError};
