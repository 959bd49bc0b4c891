use thiserror::Error;

use crate::fmt::FmtError;
use crate::render::{OutputError, RenderError};
use crate::state::StateError;

#[derive(Error, Debug)]
pub enum StateToHclError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    State(#[from] StateError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Output(#[from] OutputError),

    #[error("{0}")]
    Fmt(#[from] FmtError),
}

pub type Result<T> = std::result::Result<T, StateToHclError>;
