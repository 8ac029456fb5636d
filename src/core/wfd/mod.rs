//! Wi-Fi Display device information
//! This module models the WFD Device Information subelement and its
//! binary and hex encodings.

mod constants;
mod hex;
mod info;
mod types;
mod wire;

// Re-export types that should be publicly accessible
pub use constants::*; // Re-export all constants
pub use self::hex::parse_r2_device_info_hex;
pub use info::WfdInfo;
pub use types::DeviceType;
