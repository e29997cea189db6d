use bignum::bitops;

#[test]
fn popcount_of_alternating_bits() {
    assert_eq!(bitops::popcount(0xAAAAAAAAu32), 16);
}

#[test]
fn reverse_bits_on_16_bit_word() {
    assert_eq!(bitops::reverse_bits(0x1234u16), 0x2C48u16);
}

#[test]
fn clz_ctz_agree_across_widths() {
    assert_eq!(bitops::clz(0x0001_0000u32), 15);
    assert_eq!(bitops::ctz(0x0001_0000u32), 16);
    assert_eq!(bitops::clz(0u64), 64);
    assert_eq!(bitops::ctz(0u8), 8);
}

#[test]
fn isolate_and_clear_lowest_one_are_total() {
    assert_eq!(bitops::isolate_lowest_one(0u32), 0);
    assert_eq!(bitops::clear_lowest_one(0u32), 0);
    assert_eq!(bitops::isolate_lowest_one(12u32), 4);
    assert_eq!(bitops::clear_lowest_one(12u32), 8);
}
