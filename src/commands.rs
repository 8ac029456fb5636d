//! Commands exposed by the wfd-info CLI
//! Each command converts between a profile and one of the WFD encodings.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::config::profile_config::WfdProfile;
use crate::core::WfdInfo;
use crate::core::wfd::parse_r2_device_info_hex;

/// Every encoding of a single descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedInfo {
    /// 12-digit device info subelement
    pub device_info_hex: String,
    /// 8-digit R2 subelement, present only when R2 is supported
    pub r2_device_info_hex: Option<String>,
    /// The 20-byte wire record, hex encoded
    pub wire_hex: String,
}

/// Encodes a profile into its subelement hex and wire forms
pub fn encode_profile(profile: &WfdProfile) -> EncodedInfo {
    let wfd_info = profile.to_wfd_info();
    debug!("Encoding WFD info:\n{}", wfd_info);

    EncodedInfo {
        device_info_hex: wfd_info.to_device_info_hex(),
        r2_device_info_hex: wfd_info
            .is_r2_supported()
            .then(|| wfd_info.to_r2_device_info_hex()),
        wire_hex: hex::encode(wfd_info.serialize()),
    }
}

/// A decoded descriptor together with its profile view
///
/// `wfd_info` is the value exactly as decoded. The profile only covers the
/// fields a profile can express.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedInfo {
    #[serde(skip)]
    pub wfd_info: WfdInfo,
    /// The device info bitmap as received
    pub raw_device_info: u16,
    pub profile: WfdProfile,
}

impl From<WfdInfo> for DecodedInfo {
    fn from(wfd_info: WfdInfo) -> Self {
        Self {
            wfd_info,
            raw_device_info: wfd_info.raw_device_info(),
            profile: WfdProfile::from_wfd_info(&wfd_info),
        }
    }
}

/// Decodes a hex encoded wire record
pub fn decode_wire(wire_hex: &str) -> Result<DecodedInfo> {
    let bytes = hex::decode(wire_hex.trim()).context("Wire record is not valid hex")?;
    let wfd_info = WfdInfo::deserialize(&bytes)?;
    info!("Decoded {} byte wire record", bytes.len());
    Ok(DecodedInfo::from(wfd_info))
}

/// Decodes the device info subelement, plus the R2 subelement when given
pub fn decode_device_info_hex(device_info_hex: &str, r2_hex: Option<&str>) -> Result<DecodedInfo> {
    let mut wfd_info = WfdInfo::from_device_info_hex(device_info_hex.trim())?;
    if let Some(r2_hex) = r2_hex {
        let r2_device_info = parse_r2_device_info_hex(r2_hex.trim())?;
        wfd_info.set_r2_device_info(r2_device_info);
    }
    debug!("Decoded WFD info:\n{}", wfd_info);
    Ok(DecodedInfo::from(wfd_info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeviceType;
    use crate::error::WfdError;

    #[test]
    fn encode_default_profile() {
        let encoded = encode_profile(&WfdProfile::default());
        assert_eq!(encoded.device_info_hex, "00111c440032");
        assert_eq!(encoded.r2_device_info_hex, None);
        assert_eq!(
            encoded.wire_hex,
            "000000010000001100001c4400000032ffffffff"
        );
    }

    #[test]
    fn encode_with_r2() {
        let profile = WfdProfile {
            r2_device_info: Some(0x0011),
            ..WfdProfile::default()
        };
        let encoded = encode_profile(&profile);
        assert_eq!(encoded.r2_device_info_hex.as_deref(), Some("00020011"));
    }

    #[test]
    fn wire_round_trip_through_commands() {
        let profile = WfdProfile {
            device_type: DeviceType::Source,
            coupled_sink_at_sink: true,
            r2_device_info: Some(3),
            ..WfdProfile::default()
        };
        let encoded = encode_profile(&profile);
        assert_eq!(decode_wire(&encoded.wire_hex).unwrap().profile, profile);
    }

    #[test]
    fn short_wire_record_is_rejected() {
        let err = decode_wire("00000001").unwrap_err();
        assert_eq!(
            err.downcast_ref::<WfdError>(),
            Some(&WfdError::TruncatedInput {
                expected: 20,
                actual: 4,
            })
        );
    }

    #[test]
    fn decode_hex_with_r2() {
        let profile = decode_device_info_hex("00111c440032", Some("00020001"))
            .unwrap()
            .profile;
        assert_eq!(profile.device_type, DeviceType::PrimarySink);
        assert!(profile.session_available);
        assert_eq!(profile.control_port, 7236);
        assert_eq!(profile.max_throughput_mbps, 50);
        assert_eq!(profile.r2_device_info, Some(1));
    }

    #[test]
    fn decode_hex_keeps_non_canonical_bitmap() {
        let decoded = decode_device_info_hex("00211c440032", None).unwrap();
        assert_eq!(decoded.raw_device_info, 0x0021);
        assert_eq!(decoded.wfd_info.raw_device_info(), 0x0021);
        assert!(decoded.wfd_info.is_session_available());
        assert_eq!(decoded.wfd_info.to_device_info_hex(), "00211c440032");

        let decoded = decode_device_info_hex("ffe11c440032", None).unwrap();
        assert_eq!(decoded.wfd_info.raw_device_info(), 0xffe1);
        assert!(decoded.wfd_info.to_string().contains("0xffe1"));
    }

    #[test]
    fn decode_wire_keeps_high_device_info_bits() {
        let decoded = decode_wire("00000001000030310000022a00000064ffffffff").unwrap();
        assert_eq!(decoded.wfd_info.raw_device_info(), 0x3031);
        assert_eq!(
            hex::encode(decoded.wfd_info.serialize()),
            "00000001000030310000022a00000064ffffffff"
        );
    }
}
