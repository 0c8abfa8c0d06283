use core::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

/// An Error that can occur in this crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    GpioError(#[from] rppal::gpio::Error),

    #[error("{0}")]
    CtrlcError(#[from] ctrlc::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    ConfigurationError(String),

    #[error("curtain controller is gone")]
    ControllerGone,
}
