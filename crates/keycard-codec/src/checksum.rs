//! XOR checksum over the record payload.
//!
//! The checksum is the XOR fold of octets 0-10 and is stored at octet 11. It
//! detects any single corrupted octet. It offers no protection against
//! deliberate tampering.

use keycard_core::constants::{CHECKSUM_INDEX, KEY_LENGTH, PAYLOAD_LENGTH};

/// XOR all octets together.
///
/// # Example
/// ```
/// use keycard_codec::checksum::xor_fold;
///
/// assert_eq!(xor_fold(&[0x54, 0x07]), 0x53);
/// assert_eq!(xor_fold(&[]), 0);
/// ```
#[inline]
#[must_use]
pub fn xor_fold(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Checksum a record should carry, computed from its payload octets.
#[inline]
#[must_use]
pub fn calculate(key: &[u8; KEY_LENGTH]) -> u8 {
    xor_fold(&key[..PAYLOAD_LENGTH])
}

/// Returns `true` if the stored checksum octet matches the payload.
#[inline]
#[must_use]
pub fn verify(key: &[u8; KEY_LENGTH]) -> bool {
    calculate(key) == key[CHECKSUM_INDEX]
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: [u8; KEY_LENGTH] = [
        0x54, 0x07, 0x10, 0x30, 0x92, 0x5D, 0x88, 0x60, 0x00, 0x21, 0x20, 0x55, 0x00, 0x00, 0x00,
        0x00,
    ];

    #[test]
    fn test_calculate_reference() {
        assert_eq!(calculate(&REFERENCE), 0x55);
        assert!(verify(&REFERENCE));
    }

    #[test]
    fn test_reserved_octets_not_covered() {
        let mut key = REFERENCE;
        key[12] = 0xFF;
        key[15] = 0x01;
        assert!(verify(&key));
    }

    #[test]
    fn test_any_single_octet_flip_detected() {
        for index in 0..=CHECKSUM_INDEX {
            for bit in 0..8 {
                let mut key = REFERENCE;
                key[index] ^= 1 << bit;
                assert!(!verify(&key), "flip of bit {bit} in octet {index} went unnoticed");
            }
        }
    }

    #[test]
    fn test_all_zero_key_verifies() {
        assert!(verify(&[0u8; KEY_LENGTH]));
    }
}
