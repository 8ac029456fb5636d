//! Defines shared data types for the WFD module.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WfdError;

/// Role a WFD peer plays in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// The device is a Wi-Fi Display source
    #[default]
    Source = 0,
    /// The device is a primary sink
    PrimarySink = 1,
    /// The device is a secondary sink
    SecondarySink = 2,
    /// The device is dual-role, either a source or a primary sink
    SourceOrPrimarySink = 3,
}

impl DeviceType {
    /// The two-bit value stored in the device info bitmap
    pub fn bits(self) -> u16 {
        self as u16
    }

    /// Decodes the low two bits of a device info bitmap
    pub fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Self::Source,
            1 => Self::PrimarySink,
            2 => Self::SecondarySink,
            _ => Self::SourceOrPrimarySink,
        }
    }
}

impl TryFrom<i32> for DeviceType {
    type Error = WfdError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0..=3 => Ok(Self::from_bits(value as u16)),
            _ => Err(WfdError::InvalidDeviceType(value)),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Source => "source",
            Self::PrimarySink => "primary sink",
            Self::SecondarySink => "secondary sink",
            Self::SourceOrPrimarySink => "source or primary sink",
        };
        f.write_str(name)
    }
}
