//! Big-endian sub-word access on 8-byte backing words.
//!
//! Byte 0 of an aligned 8-byte word is its most significant byte. Half-word and
//! word helpers ignore the low address bits below their natural alignment.

#[inline(always)]
const fn byte_shift(addr: u32) -> u32 {
    (7 - (addr & 7)) * 8
}

#[inline(always)]
const fn half_shift(addr: u32) -> u32 {
    (6 - (addr & 6)) * 8
}

#[inline(always)]
const fn word_shift(addr: u32) -> u32 {
    (4 - (addr & 4)) * 8
}

/// Extracts the byte at `addr` from its enclosing 8-byte word.
#[inline]
pub const fn get_byte(addr: u32, word: u64) -> u32 {
    ((word >> byte_shift(addr)) & 0xff) as u32
}

/// Extracts the half-word at `addr & !1` from its enclosing 8-byte word.
#[inline]
pub const fn get_half_word(addr: u32, word: u64) -> u32 {
    ((word >> half_shift(addr)) & 0xffff) as u32
}

/// Extracts the word at `addr & !3` from its enclosing 8-byte word.
#[inline]
pub const fn get_word(addr: u32, word: u64) -> u32 {
    ((word >> word_shift(addr)) & 0xffff_ffff) as u32
}

/// Returns `word` with the byte at `addr` replaced by the low 8 bits of `val`.
#[inline]
pub const fn set_byte(addr: u32, word: u64, val: u32) -> u64 {
    let shift = byte_shift(addr);
    (word & !(0xff << shift)) | (((val & 0xff) as u64) << shift)
}

/// Returns `word` with the half-word at `addr & !1` replaced by the low 16 bits of `val`.
#[inline]
pub const fn set_half_word(addr: u32, word: u64, val: u32) -> u64 {
    let shift = half_shift(addr);
    (word & !(0xffff << shift)) | (((val & 0xffff) as u64) << shift)
}

/// Returns `word` with the word at `addr & !3` replaced by `val`.
#[inline]
pub const fn set_word(addr: u32, word: u64, val: u32) -> u64 {
    let shift = word_shift(addr);
    (word & !(0xffff_ffff << shift)) | ((val as u64) << shift)
}
