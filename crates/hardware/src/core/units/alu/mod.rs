//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! All operands and results are 32-bit register values; signed operations
//! reinterpret them as two's complement.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, and the Hi/Lo multiply/divide unit
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sltu, Lui
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::pipeline::signals::{AluOp, MulDivOp};

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a single-result integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand; the shifted value for shifts
    /// * `b`  - Second operand; the shift amount for shifts
    ///
    /// # Returns
    ///
    /// The 32-bit result. Overflow wraps; no operation traps.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Add, 0xffff_ffff, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 4), 0xf800_0000);
    /// assert_eq!(Alu::execute(AluOp::Sll, 1, 33), 2); // amount masked to 5 bits
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And
            | AluOp::Or
            | AluOp::Xor
            | AluOp::Nor
            | AluOp::Slt
            | AluOp::Sltu
            | AluOp::Lui => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }

    /// Executes a multiply or divide.
    ///
    /// # Returns
    ///
    /// `(hi, lo)`. For multiplies this is the 64-bit product split in halves; for
    /// divides `lo` is the quotient and `hi` the remainder.
    pub fn mul_div(op: MulDivOp, a: u32, b: u32) -> (u32, u32) {
        match op {
            MulDivOp::Mult => arithmetic::mult(a, b),
            MulDivOp::Multu => arithmetic::multu(a, b),
            MulDivOp::Div => arithmetic::div(a, b),
            MulDivOp::Divu => arithmetic::divu(a, b),
        }
    }
}
