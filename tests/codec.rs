use bignum::codec;
use bignum::limb::LimbVector;
use bignum::BigIntError;

#[test]
fn zero_canonical_forms_per_base() {
    let z = LimbVector::zero();
    assert_eq!(codec::render(&z, false, 2).unwrap(), "0b0");
    assert_eq!(codec::render(&z, false, 8).unwrap(), "00");
    assert_eq!(codec::render(&z, false, 10).unwrap(), "0");
    assert_eq!(codec::render(&z, false, 16).unwrap(), "0x0");
}

#[test]
fn explicit_base_strips_matching_prefix_only() {
    let (_, mag) = codec::parse("0xFF", Some(16)).unwrap();
    assert_eq!(codec::render(&mag, false, 16).unwrap(), "0xFF");

    // Explicit base 8 with a bare "0" is the explicit-zero case.
    let (neg, mag) = codec::parse("0", Some(8)).unwrap();
    assert!(!neg);
    assert!(mag.is_zero());
}

#[test]
fn base_out_of_range_is_rejected() {
    assert_eq!(codec::parse("10", Some(36)), Err(BigIntError::OutOfRange));
    let mag = LimbVector::from_limbs(vec![1]);
    assert_eq!(codec::render(&mag, false, 36), Err(BigIntError::OutOfRange));
}

#[test]
fn hex_padding_rule_pads_all_but_the_top_limb() {
    let (_, mag) = codec::parse("0x1FFFFFFFF", None).unwrap();
    // value spans two 32-bit limbs; the low limb is zero-padded to 8 chars.
    assert_eq!(codec::render(&mag, false, 16).unwrap(), "0x1FFFFFFFF");
}

#[test]
fn octal_and_binary_prefixes_round_trip() {
    let (_, mag) = codec::parse("0b11010110", None).unwrap();
    assert_eq!(codec::render(&mag, false, 2).unwrap(), "0b11010110");

    let (_, mag) = codec::parse("0755", None).unwrap();
    assert_eq!(codec::render(&mag, false, 8).unwrap(), "0755");
}

#[test]
fn lenient_separator_skipping_applies_only_to_base_leq_10() {
    let (_, mag) = codec::parse("1 000 000", Some(10)).unwrap();
    assert_eq!(codec::render(&mag, false, 10).unwrap(), "1000000");

    assert_eq!(
        codec::parse("12 34", Some(16)),
        Err(BigIntError::InvalidDigit)
    );
}

#[test]
fn digit_value_exceeding_base_is_rejected() {
    assert_eq!(codec::parse("19", Some(8)), Err(BigIntError::InvalidDigit));
    assert_eq!(codec::parse("2", Some(2)), Err(BigIntError::InvalidDigit));
}
