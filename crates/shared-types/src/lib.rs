pub mod common;
pub mod config;
pub mod error;
pub mod expediente;
pub mod requests;

pub use common::*;
pub use config::*;
pub use error::*;
pub use expediente::*;
pub use requests::*;
