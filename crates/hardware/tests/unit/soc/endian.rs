//! Big-endian sub-word helpers on 8-byte backing words.

use mipsim_core::soc::memory::*;
use rstest::rstest;

const WORD: u64 = 0x0011_2233_4455_6677;

#[rstest]
#[case(0, 0x00)]
#[case(1, 0x11)]
#[case(5, 0x55)]
#[case(7, 0x77)]
fn byte_zero_is_most_significant(#[case] offset: u32, #[case] expected: u32) {
    assert_eq!(get_byte(0x1000 + offset, WORD), expected);
}

#[rstest]
#[case(0, 0x0011)]
#[case(3, 0x2233)]
#[case(6, 0x6677)]
fn half_words_ignore_the_low_bit(#[case] offset: u32, #[case] expected: u32) {
    assert_eq!(get_half_word(0x1000 + offset, WORD), expected);
}

#[test]
fn words_select_a_half_of_the_backing_word() {
    assert_eq!(get_word(0x1000, WORD), 0x0011_2233);
    assert_eq!(get_word(0x1004, WORD), 0x4455_6677);
    assert_eq!(get_word(0x1006, WORD), 0x4455_6677);
}

#[test]
fn setters_touch_only_their_lanes() {
    assert_eq!(set_byte(0x1002, WORD, 0xaabb), 0x0011_bb33_4455_6677);
    assert_eq!(set_half_word(0x1004, WORD, 0xdead_beef), 0x0011_2233_beef_6677);
    assert_eq!(set_word(0x1000, WORD, 0xcafe_f00d), 0xcafe_f00d_4455_6677);
    assert_eq!(set_word(0x1004, 0, 0x1234_5678), 0x0000_0000_1234_5678);
}
