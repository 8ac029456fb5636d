//! Binary wire format for WFD device information
//! A record is five big-endian `i32` fields in a fixed order, 20 bytes, no length prefix.

use log::{debug, trace, warn};

use crate::core::wfd::constants::{WIRE_FIELD_COUNT, WIRE_FIELD_SIZE, WIRE_RECORD_SIZE};
use crate::core::wfd::info::WfdInfo;
use crate::error::{Result, WfdError};

/// One positional field of the wire record
struct WireField {
    name: &'static str,
    read: fn(&WfdInfo) -> i32,
    write: fn(&mut WfdInfo, i32),
}

/// The only description of the record layout. Encoding and decoding both walk it.
const WIRE_FIELDS: [WireField; WIRE_FIELD_COUNT] = [
    WireField {
        name: "enabled",
        read: read_enabled,
        write: write_enabled,
    },
    WireField {
        name: "device_info",
        read: read_device_info,
        write: write_device_info,
    },
    WireField {
        name: "control_port",
        read: read_control_port,
        write: write_control_port,
    },
    WireField {
        name: "max_throughput",
        read: read_max_throughput,
        write: write_max_throughput,
    },
    WireField {
        name: "r2_device_info",
        read: read_r2_device_info,
        write: write_r2_device_info,
    },
];

fn read_enabled(info: &WfdInfo) -> i32 {
    i32::from(info.is_enabled())
}

fn write_enabled(info: &mut WfdInfo, value: i32) {
    info.set_enabled(value == 1);
}

fn read_device_info(info: &WfdInfo) -> i32 {
    i32::from(info.raw_device_info())
}

fn write_device_info(info: &mut WfdInfo, value: i32) {
    info.set_raw_device_info(narrow_to_u16("device_info", value));
}

fn read_control_port(info: &WfdInfo) -> i32 {
    i32::from(info.control_port())
}

fn write_control_port(info: &mut WfdInfo, value: i32) {
    info.set_control_port(narrow_to_u16("control_port", value));
}

fn read_max_throughput(info: &WfdInfo) -> i32 {
    i32::from(info.max_throughput())
}

fn write_max_throughput(info: &mut WfdInfo, value: i32) {
    info.set_max_throughput(narrow_to_u16("max_throughput", value));
}

/// Keeps the low 16 bits of a wire field that the model stores as `u16`
fn narrow_to_u16(name: &str, value: i32) -> u16 {
    if u16::try_from(value).is_err() {
        warn!(
            "wire field {} = {:#010x} does not fit 16 bits, keeping {:#06x}",
            name,
            value,
            value as u16
        );
    }
    value as u16
}

fn read_r2_device_info(info: &WfdInfo) -> i32 {
    info.r2_device_info()
}

fn write_r2_device_info(info: &mut WfdInfo, value: i32) {
    info.set_r2_device_info(value);
}

impl WfdInfo {
    /// Encodes this descriptor into a 20-byte wire record
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(WIRE_RECORD_SIZE);
        for field in &WIRE_FIELDS {
            let value = (field.read)(self);
            trace!("wire write {} = {}", field.name, value);
            buf.extend_from_slice(&value.to_be_bytes());
        }
        buf
    }

    /// Decodes a wire record. Bytes past the first 20 are ignored.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < WIRE_RECORD_SIZE {
            debug!(
                "Rejecting WFD record of {} bytes (need {})",
                bytes.len(),
                WIRE_RECORD_SIZE
            );
            return Err(WfdError::TruncatedInput {
                expected: WIRE_RECORD_SIZE,
                actual: bytes.len(),
            });
        }

        let mut info = WfdInfo::default();
        for (field, chunk) in WIRE_FIELDS
            .iter()
            .zip(bytes[..WIRE_RECORD_SIZE].chunks_exact(WIRE_FIELD_SIZE))
        {
            let value = i32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            trace!("wire read {} = {}", field.name, value);
            (field.write)(&mut info, value);
        }
        Ok(info)
    }
}
