use wfd_info_lib::{
    commands::{decode_device_info_hex, encode_profile},
    config::profile_config::WfdProfile,
    core::wfd::{WIRE_RECORD_SIZE, parse_r2_device_info_hex},
    DeviceType, WfdError, WfdInfo,
};

fn miracast_sink() -> WfdInfo {
    let mut info = WfdInfo::new(0, 7236, 50);
    assert!(info.set_device_type(DeviceType::PrimarySink.bits() as i32));
    info.set_session_available(true);
    info
}

#[test]
fn primary_sink_subelements() {
    let info = miracast_sink();
    assert_eq!(info.to_device_info_hex(), "00111c440032");
    assert_eq!(info.to_r2_device_info_hex(), "0002ffff");
    assert!(!info.is_r2_supported());
}

#[test]
fn wire_record_round_trip_with_r2_sentinel() {
    let info = miracast_sink();
    let bytes = info.serialize();
    assert_eq!(bytes.len(), WIRE_RECORD_SIZE);
    assert_eq!(WfdInfo::deserialize(&bytes), Ok(info));
}

#[test]
fn nineteen_bytes_is_truncated() {
    let bytes = miracast_sink().serialize();
    assert_eq!(
        WfdInfo::deserialize(&bytes[..19]),
        Err(WfdError::TruncatedInput {
            expected: 20,
            actual: 19,
        })
    );
}

#[test]
fn invalid_device_type_leaves_info_untouched() {
    let mut info = miracast_sink();
    info.set_coupled_sink_support_at_source(true);
    let before = info;
    assert!(!info.set_device_type(4));
    assert_eq!(info, before);
    assert_eq!(info.device_type(), DeviceType::PrimarySink);
}

#[test]
fn hex_subelements_parse_back() {
    let mut info = miracast_sink();
    info.set_r2_device_info(0x0011);

    let mut parsed = WfdInfo::from_device_info_hex(&info.to_device_info_hex()).unwrap();
    parsed.set_r2_device_info(parse_r2_device_info_hex(&info.to_r2_device_info_hex()).unwrap());
    assert_eq!(parsed, info);
}

#[test]
fn profile_encode_then_decode_hex() {
    let profile = WfdProfile {
        device_type: DeviceType::SourceOrPrimarySink,
        coupled_sink_at_sink: true,
        r2_device_info: Some(1),
        ..WfdProfile::default()
    };
    let encoded = encode_profile(&profile);
    assert_eq!(encoded.device_info_hex, "001b1c440032");

    let decoded =
        decode_device_info_hex(&encoded.device_info_hex, encoded.r2_device_info_hex.as_deref())
            .unwrap();
    assert_eq!(decoded.profile, profile);
    assert_eq!(decoded.raw_device_info, 0x001b);
}
