pub mod batch;
pub mod config;
pub mod error;
pub mod formats;
pub mod io;
pub mod logging;
pub mod report;
pub mod sniffer;
pub mod types;

pub use config::{OutputFormat, SniffConfig};
pub use error::{Rejection, Result, SniffError};
pub use sniffer::{classify, detect, Classification};
pub use types::{supported_formats, ImageFormat};
