//! Core functionality for wfd-info
//! This module contains the WFD capability model and its codecs.

pub mod wfd;

// Re-export commonly used types
pub use wfd::{DeviceType, WfdInfo};
