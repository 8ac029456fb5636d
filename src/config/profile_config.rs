use serde::{Deserialize, Serialize};

use crate::core::wfd::{DEFAULT_CONTROL_PORT, DEFAULT_MAX_THROUGHPUT_MBPS};
use crate::core::{DeviceType, WfdInfo};

/// Capabilities a device advertises in its WFD Device Information subelement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WfdProfile {
    /// Whether Wi-Fi Display is enabled
    pub enabled: bool,
    /// Role of the device
    pub device_type: DeviceType,
    /// Coupled sink operation supported when acting as a source
    pub coupled_sink_at_source: bool,
    /// Coupled sink operation supported when acting as a sink
    pub coupled_sink_at_sink: bool,
    /// Whether the device accepts a new session
    pub session_available: bool,
    /// RTSP control port
    pub control_port: u16,
    /// Maximum average throughput in Mbps
    pub max_throughput_mbps: u16,
    /// R2 device info. `None` means R2 is not supported.
    pub r2_device_info: Option<i32>,
}

impl Default for WfdProfile {
    fn default() -> Self {
        WfdProfile {
            enabled: true,
            device_type: DeviceType::PrimarySink,
            coupled_sink_at_source: false,
            coupled_sink_at_sink: false,
            session_available: true,
            control_port: DEFAULT_CONTROL_PORT,
            max_throughput_mbps: DEFAULT_MAX_THROUGHPUT_MBPS,
            r2_device_info: None,
        }
    }
}

impl WfdProfile {
    /// Builds the descriptor this profile describes
    pub fn to_wfd_info(&self) -> WfdInfo {
        let mut info = WfdInfo::new(0, self.control_port, self.max_throughput_mbps);
        info.set_enabled(self.enabled);
        info.set_typed_device_type(self.device_type);
        info.set_coupled_sink_support_at_source(self.coupled_sink_at_source);
        info.set_coupled_sink_support_at_sink(self.coupled_sink_at_sink);
        info.set_session_available(self.session_available);
        if let Some(r2) = self.r2_device_info.filter(|r2| *r2 >= 0) {
            info.set_r2_device_info(r2);
        }
        info
    }

    /// Reads a profile back out of a descriptor. Bits above the session
    /// availability field have no profile counterpart and are dropped.
    pub fn from_wfd_info(info: &WfdInfo) -> Self {
        WfdProfile {
            enabled: info.is_enabled(),
            device_type: info.device_type(),
            coupled_sink_at_source: info.is_coupled_sink_supported_at_source(),
            coupled_sink_at_sink: info.is_coupled_sink_supported_at_sink(),
            session_available: info.is_session_available(),
            control_port: info.control_port(),
            max_throughput_mbps: info.max_throughput(),
            r2_device_info: info.is_r2_supported().then(|| info.r2_device_info()),
        }
    }
}
