//! Constants for the WFD Device Information subelement
//! Bit positions follow the Wi-Fi Display technical specification v1.0.0, section 5.1.2.

/// Device type, bits [1:0]
pub const DEVICE_TYPE_MASK: u16 = (1 << 1) | (1 << 0);

/// Coupled sink operation supported by a source
pub const COUPLED_SINK_SUPPORT_AT_SOURCE: u16 = 1 << 2;

/// Coupled sink operation supported by a sink
pub const COUPLED_SINK_SUPPORT_AT_SINK: u16 = 1 << 3;

/// Low bit of the session availability field
pub const SESSION_AVAILABLE_BIT1: u16 = 1 << 4;

/// High bit of the session availability field
pub const SESSION_AVAILABLE_BIT2: u16 = 1 << 5;

/// Both session availability bits
pub const SESSION_AVAILABLE_MASK: u16 = SESSION_AVAILABLE_BIT2 | SESSION_AVAILABLE_BIT1;

/// Default RTSP control port for WFD sessions
pub const DEFAULT_CONTROL_PORT: u16 = 7236;

/// Default advertised maximum throughput in Mbps
pub const DEFAULT_MAX_THROUGHPUT_MBPS: u16 = 50;

/// Sentinel stored in the R2 field when the R2 extension is not supported
pub const R2_NOT_SUPPORTED: i32 = -1;

/// Fixed tag that leads the R2 device information hex
pub const R2_SUBELEMENT_TAG: u16 = 2;

/// Number of 32-bit fields in a wire record
pub const WIRE_FIELD_COUNT: usize = 5;

/// Size of one wire field in bytes
pub const WIRE_FIELD_SIZE: usize = 4;

/// Size of a complete wire record in bytes
pub const WIRE_RECORD_SIZE: usize = WIRE_FIELD_COUNT * WIRE_FIELD_SIZE;

/// Length of the device info hex string (three 16-bit fields)
pub const DEVICE_INFO_HEX_LEN: usize = 12;

/// Length of the R2 device info hex string (tag plus one 16-bit field)
pub const R2_DEVICE_INFO_HEX_LEN: usize = 8;
