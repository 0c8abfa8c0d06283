pub mod api;
pub mod cli;
pub mod curtain;
pub mod driver;
pub mod error;
pub mod pins;
pub mod position;
pub mod routes;

pub use error::{Error, Result};
