//! ALU arithmetic operations.
//!
//! Implements wrapping addition and subtraction and the multiply/divide unit.
//!
//! Multiplication is built from four 16x16 partial products on the operand
//! magnitudes, then the sign is restored by negating the 64-bit pair. Division by
//! zero saturates both Hi and Lo to `0x7fffffff` instead of trapping.

use crate::common::constants::DIV_BY_ZERO_RESULT;
use crate::core::pipeline::signals::AluOp;

const HALF_MASK: u32 = 0xffff;

/// Executes `add`/`sub`; other opcodes return `0`.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}

/// Unsigned 32x32 -> 64 multiply from 16-bit partial products.
///
/// # Returns
///
/// `(hi, lo)` of the product.
pub const fn multu(a: u32, b: u32) -> (u32, u32) {
    let (a_lo, a_hi) = (a & HALF_MASK, a >> 16);
    let (b_lo, b_hi) = (b & HALF_MASK, b >> 16);

    let low = a_lo * b_lo;
    // Each cross term plus a carried half-word stays below 2^32.
    let cross1 = a_lo * b_hi + (low >> 16);
    let cross2 = a_hi * b_lo + (cross1 & HALF_MASK);

    let lo = (cross2 << 16) | (low & HALF_MASK);
    let hi = (a_hi * b_hi)
        .wrapping_add(cross1 >> 16)
        .wrapping_add(cross2 >> 16);
    (hi, lo)
}

/// Signed 32x32 -> 64 multiply.
///
/// Multiplies magnitudes with [`multu`], then negates the pair when the operand
/// signs differ: invert both halves, increment Lo, carry into Hi when Lo wraps.
pub const fn mult(a: u32, b: u32) -> (u32, u32) {
    let negative = ((a ^ b) >> 31) != 0;
    let (hi, lo) = multu((a as i32).unsigned_abs(), (b as i32).unsigned_abs());
    if !negative {
        return (hi, lo);
    }
    let lo = (!lo).wrapping_add(1);
    let hi = if lo == 0 { (!hi).wrapping_add(1) } else { !hi };
    (hi, lo)
}

/// Signed divide. `i32::MIN / -1` wraps.
///
/// # Returns
///
/// `(remainder, quotient)`, or `(0x7fffffff, 0x7fffffff)` when `b == 0`.
pub const fn div(a: u32, b: u32) -> (u32, u32) {
    if b == 0 {
        return (DIV_BY_ZERO_RESULT, DIV_BY_ZERO_RESULT);
    }
    let (a, b) = (a as i32, b as i32);
    (a.wrapping_rem(b) as u32, a.wrapping_div(b) as u32)
}

/// Unsigned divide.
///
/// # Returns
///
/// `(remainder, quotient)`, or `(0x7fffffff, 0x7fffffff)` when `b == 0`.
pub const fn divu(a: u32, b: u32) -> (u32, u32) {
    if b == 0 {
        return (DIV_BY_ZERO_RESULT, DIV_BY_ZERO_RESULT);
    }
    (a % b, a / b)
}
