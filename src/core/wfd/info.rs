//! WFD device information value object
//! Holds the capabilities a peer advertises in its WFD Device Information subelement.

use std::fmt;

use crate::core::wfd::constants::{
    COUPLED_SINK_SUPPORT_AT_SINK, COUPLED_SINK_SUPPORT_AT_SOURCE, DEVICE_TYPE_MASK,
    R2_NOT_SUPPORTED, SESSION_AVAILABLE_BIT1, SESSION_AVAILABLE_BIT2, SESSION_AVAILABLE_MASK,
};
use crate::core::wfd::types::DeviceType;
use crate::error::Result;

/// Wi-Fi Display information for a device
///
/// The device info bitmap is only reachable through the accessors below, so
/// every mutation keeps the device type inside 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WfdInfo {
    enabled: bool,
    device_info: u16,
    control_port: u16,
    max_throughput: u16,
    r2_device_info: i32,
}

impl WfdInfo {
    /// Creates an enabled descriptor from a raw device info bitmap. R2 starts unsupported.
    pub fn new(device_info: u16, control_port: u16, max_throughput: u16) -> Self {
        Self {
            enabled: true,
            device_info,
            control_port,
            max_throughput,
            r2_device_info: R2_NOT_SUPPORTED,
        }
    }

    /// Creates a disabled descriptor carrying only a raw device info bitmap
    pub fn from_raw_device_info(device_info: u16) -> Self {
        Self {
            device_info,
            ..Self::default()
        }
    }

    /// Returns the raw device info bitmap
    pub fn raw_device_info(&self) -> u16 {
        self.device_info
    }

    pub(super) fn set_raw_device_info(&mut self, device_info: u16) {
        self.device_info = device_info;
    }

    /// Returns true if Wi-Fi Display is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether Wi-Fi Display should be enabled
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn device_type(&self) -> DeviceType {
        DeviceType::from_bits(self.device_info & DEVICE_TYPE_MASK)
    }

    /// Sets the device type. Returns false and leaves the bitmap untouched
    /// when `device_type` is outside 0..=3.
    pub fn set_device_type(&mut self, device_type: i32) -> bool {
        self.try_set_device_type(device_type).is_ok()
    }

    /// Same as [`WfdInfo::set_device_type`], reporting the rejected value as an error
    pub fn try_set_device_type(&mut self, device_type: i32) -> Result<()> {
        let device_type = DeviceType::try_from(device_type)?;
        self.set_typed_device_type(device_type);
        Ok(())
    }

    pub fn set_typed_device_type(&mut self, device_type: DeviceType) {
        self.device_info &= !DEVICE_TYPE_MASK;
        self.device_info |= device_type.bits();
    }

    pub fn is_coupled_sink_supported_at_source(&self) -> bool {
        self.device_info & COUPLED_SINK_SUPPORT_AT_SOURCE != 0
    }

    pub fn set_coupled_sink_support_at_source(&mut self, supported: bool) {
        self.set_flag(COUPLED_SINK_SUPPORT_AT_SOURCE, supported);
    }

    pub fn is_coupled_sink_supported_at_sink(&self) -> bool {
        self.device_info & COUPLED_SINK_SUPPORT_AT_SINK != 0
    }

    pub fn set_coupled_sink_support_at_sink(&mut self, supported: bool) {
        self.set_flag(COUPLED_SINK_SUPPORT_AT_SINK, supported);
    }

    /// Returns true if either session availability bit is set
    pub fn is_session_available(&self) -> bool {
        self.device_info & SESSION_AVAILABLE_MASK != 0
    }

    /// Writes `01` into the session availability field when enabled, `00` otherwise
    pub fn set_session_available(&mut self, available: bool) {
        if available {
            self.device_info |= SESSION_AVAILABLE_BIT1;
            self.device_info &= !SESSION_AVAILABLE_BIT2;
        } else {
            self.device_info &= !SESSION_AVAILABLE_MASK;
        }
    }

    /// Returns the TCP port at which the device listens for RTSP messages
    pub fn control_port(&self) -> u16 {
        self.control_port
    }

    pub fn set_control_port(&mut self, port: u16) {
        self.control_port = port;
    }

    /// Returns the maximum average throughput in megabits/second
    pub fn max_throughput(&self) -> u16 {
        self.max_throughput
    }

    pub fn set_max_throughput(&mut self, max_throughput: u16) {
        self.max_throughput = max_throughput;
    }

    /// Returns true if the R2 extension is supported
    pub fn is_r2_supported(&self) -> bool {
        self.r2_device_info >= 0
    }

    pub fn r2_device_info(&self) -> i32 {
        self.r2_device_info
    }

    /// Sets the R2 device info. A negative value marks R2 as unsupported.
    pub fn set_r2_device_info(&mut self, r2_device_info: i32) {
        self.r2_device_info = r2_device_info;
    }

    fn set_flag(&mut self, mask: u16, on: bool) {
        if on {
            self.device_info |= mask;
        } else {
            self.device_info &= !mask;
        }
    }
}

impl fmt::Display for WfdInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WFD enabled: {}", self.enabled)?;
        writeln!(f, " WFD DeviceInfo: {:#06x} ({})", self.device_info, self.device_type())?;
        writeln!(f, " WFD CtrlPort: {}", self.control_port)?;
        writeln!(f, " WFD MaxThroughput: {}", self.max_throughput)?;
        write!(f, " WFD R2 DeviceInfo: {}", self.r2_device_info)
    }
}
