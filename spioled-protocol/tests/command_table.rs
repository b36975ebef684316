//! Property tests for the console byte table

use proptest::prelude::*;
use spioled_protocol::Command;

proptest! {
    #[test]
    fn digits_always_in_hex_range(byte in any::<u8>()) {
        if let Some(Command::Digit(d)) = Command::from_byte(byte) {
            prop_assert!(d < 16);
            prop_assert!(byte.is_ascii_hexdigit());
        }
    }

    #[test]
    fn slots_always_in_range(byte in any::<u8>()) {
        if let Some(Command::SelectSlot(s)) = Command::from_byte(byte) {
            prop_assert!(s < 6);
        }
    }

    #[test]
    fn non_ascii_is_ignored(byte in 0x80u8..=0xFF) {
        prop_assert_eq!(Command::from_byte(byte), None);
    }
}
