use std::str::FromStr;

use crate::{error::FromStrError, Address, Binary, Hash};

const ADDRESS_HEX: &str = "0x0011223344556677889900112233445566778899";
const HASH_HEX: &str = "0x683009eedc8a75813844475de22b78dbfca30dee855c0cc6f8b80cb1dc359e97";

#[test]
fn parse_and_render_canonical() {
    let binary = Binary::from_str(ADDRESS_HEX).unwrap();
    assert_eq!(binary.len(), 20);
    assert_eq!(binary.to_string(), ADDRESS_HEX);
}

#[test]
fn parse_without_prefix() {
    let bare = &ADDRESS_HEX[2..];
    let binary = Binary::from_str(bare).unwrap();
    assert_eq!(binary.to_string(), ADDRESS_HEX);
}

#[test]
fn parse_strips_repeated_prefixes() {
    let doubled = format!("0x{}", ADDRESS_HEX);
    let binary = Binary::from_str(&doubled).unwrap();
    assert_eq!(binary.to_string(), ADDRESS_HEX);

    let mixed = format!("0X{}", ADDRESS_HEX);
    let binary = Binary::from_str(&mixed).unwrap();
    assert_eq!(binary.to_string(), ADDRESS_HEX);
}

#[test]
fn parse_lowercases_output() {
    let upper = HASH_HEX.to_uppercase();
    let binary = Binary::from_str(&upper).unwrap();
    assert_eq!(binary.to_string(), HASH_HEX);
}

#[test]
fn bare_prefix_is_empty() {
    let binary = Binary::from_str("0x").unwrap();
    assert!(binary.is_empty());
    assert_eq!(binary.to_string(), "0x");
}

#[test]
fn empty_string_does_not_parse() {
    assert_eq!(Binary::from_str(""), Err(FromStrError::InvalidLength(0)));
}

#[test]
fn odd_digit_count_does_not_parse() {
    assert_eq!(
        Binary::from_str("0x123"),
        Err(FromStrError::InvalidLength(3))
    );
    assert_eq!(Binary::from_str("1"), Err(FromStrError::InvalidLength(1)));
}

#[test]
fn invalid_character_reports_position() {
    assert_eq!(
        Binary::from_str("xyzq"),
        Err(FromStrError::InvalidCharacter { chr: b'x', idx: 0 })
    );
    // Position counts the stripped prefix too.
    assert_eq!(
        Binary::from_str("0x12g4"),
        Err(FromStrError::InvalidCharacter { chr: b'g', idx: 4 })
    );
}

#[test]
fn fixed_types_enforce_length() {
    let address = Address::from_str(ADDRESS_HEX).unwrap();
    assert_eq!(address.len(), 20);
    assert_eq!(address.to_string(), ADDRESS_HEX);

    let hash = Hash::from_str(HASH_HEX).unwrap();
    assert_eq!(hash.len(), 32);
    assert_eq!(hash.to_string(), HASH_HEX);

    assert_eq!(
        Address::from_str(HASH_HEX),
        Err(FromStrError::InvalidLength(64))
    );
    assert_eq!(
        Hash::from_str(ADDRESS_HEX),
        Err(FromStrError::InvalidLength(40))
    );
}
