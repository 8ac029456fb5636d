//! wfd-info library
//! Models Wi-Fi Display device capability descriptors and their encodings.

// Module declarations
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod utils;

pub use crate::core::{DeviceType, WfdInfo};
pub use crate::error::WfdError;
