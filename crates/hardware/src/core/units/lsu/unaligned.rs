//! Partial-word merge rules for `lwl`, `lwr`, `swl` and `swr`.
//!
//! The low two address bits select a byte shift `s`. Left forms use
//! `s = (addr & 3) * 8`; right forms use `s = (!addr & 3) * 8`. A load keeps the
//! bytes of the old register value that the shifted memory word does not cover; a
//! store keeps the bytes of the memory word that the shifted register does not cover.
//! An `swl`/`swr` pair at `a` and `a + 3` stores a full word at any alignment, and
//! `lwl`/`lwr` at the same pair of addresses reassembles it.

#[inline(always)]
const fn left_shift(addr: u32) -> u32 {
    (addr & 3) << 3
}

#[inline(always)]
const fn right_shift(addr: u32) -> u32 {
    (!addr & 3) << 3
}

/// `lwl`: `(mem << s) | (old & !(!0 << s))`.
pub const fn merge_left(addr: u32, mem_word: u32, old: u32) -> u32 {
    let s = left_shift(addr);
    (mem_word << s) | (old & !(u32::MAX << s))
}

/// `lwr`: `(mem >> s) | (old & !(!0 >> s))`.
pub const fn merge_right(addr: u32, mem_word: u32, old: u32) -> u32 {
    let s = right_shift(addr);
    (mem_word >> s) | (old & !(u32::MAX >> s))
}

/// `swl`: `(reg >> s) | (mem & !(!0 >> s))`.
pub const fn store_left(addr: u32, mem_word: u32, reg: u32) -> u32 {
    let s = left_shift(addr);
    (reg >> s) | (mem_word & !(u32::MAX >> s))
}

/// `swr`: `(reg << s) | (mem & !(!0 << s))`.
pub const fn store_right(addr: u32, mem_word: u32, reg: u32) -> u32 {
    let s = right_shift(addr);
    (reg << s) | (mem_word & !(u32::MAX << s))
}
