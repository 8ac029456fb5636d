//! Hex text forms of the WFD subelements
//! These are the strings handed to the supplicant in `wfd_subelem_set` commands.

use crate::core::wfd::constants::{DEVICE_INFO_HEX_LEN, R2_DEVICE_INFO_HEX_LEN, R2_SUBELEMENT_TAG};
use crate::core::wfd::info::WfdInfo;
use crate::error::{Result, WfdError};

impl WfdInfo {
    /// Device info, control port and max throughput as 12 lowercase hex digits
    pub fn to_device_info_hex(&self) -> String {
        format!(
            "{:04x}{:04x}{:04x}",
            self.raw_device_info(),
            self.control_port(),
            self.max_throughput()
        )
    }

    /// The fixed R2 tag followed by the low 16 bits of the R2 device info
    pub fn to_r2_device_info_hex(&self) -> String {
        format!(
            "{:04x}{:04x}",
            R2_SUBELEMENT_TAG,
            self.r2_device_info() as u16
        )
    }

    /// Parses the 12-digit device info hex into an enabled descriptor without R2 support
    pub fn from_device_info_hex(text: &str) -> Result<Self> {
        let words = parse_words::<3>("device info", text, DEVICE_INFO_HEX_LEN)?;
        Ok(WfdInfo::new(words[0], words[1], words[2]))
    }
}

/// Parses the 8-digit R2 device info hex and returns the R2 device info value
pub fn parse_r2_device_info_hex(text: &str) -> Result<i32> {
    let [tag, value] = parse_words::<2>("r2 device info", text, R2_DEVICE_INFO_HEX_LEN)?;
    if tag != R2_SUBELEMENT_TAG {
        return Err(WfdError::UnexpectedSubelementTag {
            expected: R2_SUBELEMENT_TAG,
            found: tag,
        });
    }
    Ok(i32::from(value))
}

fn parse_words<const N: usize>(field: &'static str, text: &str, len: usize) -> Result<[u16; N]> {
    if text.len() != len {
        return Err(WfdError::InvalidHex {
            field,
            reason: format!("expected {} hex digits, got {}", len, text.len()),
        });
    }
    if let Some(bad) = text.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(WfdError::InvalidHex {
            field,
            reason: format!("unexpected character {:?}", bad),
        });
    }

    let mut words = [0u16; N];
    for (word, start) in words.iter_mut().zip((0..len).step_by(4)) {
        *word = u16::from_str_radix(&text[start..start + 4], 16).map_err(|e| {
            WfdError::InvalidHex {
                field,
                reason: e.to_string(),
            }
        })?;
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary_sink() -> WfdInfo {
        let mut info = WfdInfo::new(0, 7236, 50);
        assert!(info.set_device_type(1));
        info.set_session_available(true);
        info
    }

    #[test]
    fn device_info_hex_matches_known_value() {
        assert_eq!(primary_sink().to_device_info_hex(), "00111c440032");
    }

    #[test]
    fn device_info_hex_is_zero_padded() {
        assert_eq!(WfdInfo::default().to_device_info_hex(), "000000000000");
        assert_eq!(WfdInfo::new(0xabcd, 0xffff, 1).to_device_info_hex(), "abcdffff0001");
    }

    #[test]
    fn r2_hex_truncates_sentinel() {
        assert_eq!(primary_sink().to_r2_device_info_hex(), "0002ffff");

        let mut info = primary_sink();
        info.set_r2_device_info(0x11);
        assert_eq!(info.to_r2_device_info_hex(), "00020011");
    }

    #[test]
    fn device_info_hex_parses_back() {
        let parsed = WfdInfo::from_device_info_hex("00111C440032").unwrap();
        assert_eq!(parsed, primary_sink());
    }

    #[test]
    fn device_info_hex_rejects_bad_input() {
        assert!(matches!(
            WfdInfo::from_device_info_hex("0011"),
            Err(WfdError::InvalidHex { field: "device info", .. })
        ));
        assert!(matches!(
            WfdInfo::from_device_info_hex("0011+c440032"),
            Err(WfdError::InvalidHex { .. })
        ));
        assert!(matches!(
            WfdInfo::from_device_info_hex("00111c44003é"),
            Err(WfdError::InvalidHex { .. })
        ));
    }

    #[test]
    fn r2_hex_checks_tag() {
        assert_eq!(parse_r2_device_info_hex("0002ffff"), Ok(0xffff));
        assert_eq!(
            parse_r2_device_info_hex("0003ffff"),
            Err(WfdError::UnexpectedSubelementTag {
                expected: 2,
                found: 3,
            })
        );
    }
}
