//! Pipeline operation selectors.
//!
//! This module defines the closed set of operations a control record can carry. It performs:
//! 1. **Operation Classification:** ALU, shift, multiply/divide, Hi/Lo, branch, jump, and trap groups.
//! 2. **Memory Control:** Load and store forms with their widths and extension rules.
//! 3. **Instruction Mix:** Helpers the statistics and hazard logic use to classify a record.
//!
//! Decode selects exactly one `Op` (and at most one `MemOp`); Execute and Memory
//! dispatch on them without re-inspecting the instruction word.

/// Integer ALU operations producing a single 32-bit result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AluOp {
    /// Wrapping addition (`add`, `addu`, `addi`, `addiu`).
    #[default]
    Add,
    /// Wrapping subtraction (`sub`, `subu`).
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Set on signed less-than.
    Slt,
    /// Set on unsigned less-than.
    Sltu,
    /// Shift left logical; amount masked to 5 bits.
    Sll,
    /// Shift right logical; amount masked to 5 bits.
    Srl,
    /// Shift right arithmetic; amount masked to 5 bits.
    Sra,
    /// Load upper immediate: `b << 16`.
    Lui,
}

/// Where a shift takes its amount from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftAmount {
    /// The instruction's `shamt` field.
    Immediate,
    /// The low 5 bits of `rs`.
    Variable,
}

/// Operations writing the Hi/Lo pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MulDivOp {
    /// Signed 32x32 multiply.
    Mult,
    /// Unsigned 32x32 multiply.
    Multu,
    /// Signed divide; Lo = quotient, Hi = remainder.
    Div,
    /// Unsigned divide; Lo = quotient, Hi = remainder.
    Divu,
}

/// Conditional branch predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `rs == rt`.
    Eq,
    /// `rs != rt`.
    Ne,
    /// `rs <= 0` (signed).
    Lez,
    /// `rs > 0` (signed).
    Gtz,
    /// `rs < 0` (signed).
    Ltz,
    /// `rs >= 0` (signed).
    Gez,
}

/// Operation bound to a control record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Op {
    /// Bubble or architectural no-op; nothing is computed.
    #[default]
    Nop,
    /// Register-register or register-immediate ALU operation on `src1`, `src2`.
    Alu(AluOp),
    /// Shift of `src2`.
    Shift(AluOp, ShiftAmount),
    /// Multiply or divide into Hi/Lo.
    MulDiv(MulDivOp),
    /// `mfhi`.
    MoveFromHi,
    /// `mflo`.
    MoveFromLo,
    /// `mthi`.
    MoveToHi,
    /// `mtlo`.
    MoveToLo,
    /// PC-relative conditional branch, optionally linking into `$ra`.
    Branch {
        /// Taken predicate.
        cond: BranchCond,
        /// Writes the return address.
        link: bool,
    },
    /// Absolute jump (`j`, `jal`).
    Jump {
        /// Writes the return address.
        link: bool,
    },
    /// Register jump (`jr`, `jalr`).
    JumpReg {
        /// Writes the return address into `rd`.
        link: bool,
    },
    /// Effective-address computation for a load or store.
    MemAddr,
    /// `mfc1`: float register to GPR.
    MoveFromCop1,
    /// `mtc1`: GPR to float register.
    MoveToCop1,
    /// `syscall`; serviced in Writeback.
    Syscall,
    /// `break`; executes as a no-op.
    Break,
}

impl Op {
    /// Returns `true` for operations that read Hi or Lo in Execute.
    pub const fn reads_hilo(self) -> bool {
        matches!(self, Self::MoveFromHi | Self::MoveFromLo)
    }

    /// Returns `true` for `jal`, `jalr`, `bltzal` and `bgezal`.
    pub const fn is_link(self) -> bool {
        matches!(
            self,
            Self::Branch { link: true, .. } | Self::Jump { link: true } | Self::JumpReg { link: true }
        )
    }
}

/// Memory operation bound to a control record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemOp {
    /// Load byte, sign-extended.
    Lb,
    /// Load byte, zero-extended.
    Lbu,
    /// Load half-word, sign-extended.
    Lh,
    /// Load half-word, zero-extended.
    Lhu,
    /// Load word.
    Lw,
    /// Load word left (merge high-order bytes).
    Lwl,
    /// Load word right (merge low-order bytes).
    Lwr,
    /// Load word into a float register.
    Lwc1,
    /// Store byte.
    Sb,
    /// Store half-word.
    Sh,
    /// Store word.
    Sw,
    /// Store word left (high-order bytes).
    Swl,
    /// Store word right (low-order bytes).
    Swr,
    /// Store a float register.
    Swc1,
}

impl MemOp {
    /// Returns `true` for the eight load forms.
    pub const fn is_load(self) -> bool {
        matches!(
            self,
            Self::Lb | Self::Lbu | Self::Lh | Self::Lhu | Self::Lw | Self::Lwl | Self::Lwr | Self::Lwc1
        )
    }

    /// Returns `true` for the store forms.
    pub const fn is_store(self) -> bool {
        !self.is_load()
    }

    /// Returns `true` for loads that merge with the old destination value.
    pub const fn merges_subreg(self) -> bool {
        matches!(self, Self::Lwl | Self::Lwr)
    }
}
