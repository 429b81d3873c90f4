//! MIPS32 instruction encoders.
//!
//! Register arguments are plain indices; immediates are signed where the
//! instruction sign-extends them. Branch offsets are in instructions relative
//! to the delay slot, jump targets are byte addresses.

#![allow(dead_code)]

use mipsim_core::isa::mips32::{cop1, funct, opcodes};

/// Encodes an R-format (SPECIAL) instruction.
pub fn r_type(rs: usize, rt: usize, rd: usize, shamt: u32, func: u32) -> u32 {
    ((rs as u32 & 0x1f) << 21)
        | ((rt as u32 & 0x1f) << 16)
        | ((rd as u32 & 0x1f) << 11)
        | ((shamt & 0x1f) << 6)
        | (func & 0x3f)
}

/// Encodes an I-format instruction.
pub fn i_type(opcode: u32, rs: usize, rt: usize, imm: i32) -> u32 {
    (opcode << 26) | ((rs as u32 & 0x1f) << 21) | ((rt as u32 & 0x1f) << 16) | (imm as u32 & 0xffff)
}

/// Encodes a J-format instruction from a byte address.
pub fn j_type(opcode: u32, addr: u32) -> u32 {
    (opcode << 26) | ((addr >> 2) & 0x03ff_ffff)
}

// ──────────────────────────────────────────────────────────
// SPECIAL group
// ──────────────────────────────────────────────────────────

pub fn nop() -> u32 {
    0
}

pub fn add(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::ADD)
}

pub fn addu(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::ADDU)
}

pub fn sub(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::SUB)
}

pub fn or(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::OR)
}

pub fn slt(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::SLT)
}

pub fn sll(rd: usize, rt: usize, shamt: u32) -> u32 {
    r_type(0, rt, rd, shamt, funct::SLL)
}

pub fn sra(rd: usize, rt: usize, shamt: u32) -> u32 {
    r_type(0, rt, rd, shamt, funct::SRA)
}

pub fn sllv(rd: usize, rt: usize, rs: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::SLLV)
}

pub fn jr(rs: usize) -> u32 {
    r_type(rs, 0, 0, 0, funct::JR)
}

pub fn jalr(rd: usize, rs: usize) -> u32 {
    r_type(rs, 0, rd, 0, funct::JALR)
}

pub fn syscall() -> u32 {
    r_type(0, 0, 0, 0, funct::SYSCALL)
}

pub fn brk() -> u32 {
    r_type(0, 0, 0, 0, funct::BREAK)
}

pub fn mult(rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, 0, 0, funct::MULT)
}

pub fn multu(rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, 0, 0, funct::MULTU)
}

pub fn div(rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, 0, 0, funct::DIV)
}

pub fn mfhi(rd: usize) -> u32 {
    r_type(0, 0, rd, 0, funct::MFHI)
}

pub fn mflo(rd: usize) -> u32 {
    r_type(0, 0, rd, 0, funct::MFLO)
}

pub fn mthi(rs: usize) -> u32 {
    r_type(rs, 0, 0, 0, funct::MTHI)
}

pub fn mtlo(rs: usize) -> u32 {
    r_type(rs, 0, 0, 0, funct::MTLO)
}

// ──────────────────────────────────────────────────────────
// Immediate group
// ──────────────────────────────────────────────────────────

pub fn addi(rt: usize, rs: usize, imm: i32) -> u32 {
    i_type(opcodes::OP_ADDI, rs, rt, imm)
}

pub fn addiu(rt: usize, rs: usize, imm: i32) -> u32 {
    i_type(opcodes::OP_ADDIU, rs, rt, imm)
}

pub fn ori(rt: usize, rs: usize, imm: u16) -> u32 {
    i_type(opcodes::OP_ORI, rs, rt, i32::from(imm))
}

pub fn andi(rt: usize, rs: usize, imm: u16) -> u32 {
    i_type(opcodes::OP_ANDI, rs, rt, i32::from(imm))
}

pub fn lui(rt: usize, imm: u16) -> u32 {
    i_type(opcodes::OP_LUI, 0, rt, i32::from(imm))
}

// ──────────────────────────────────────────────────────────
// Branches and jumps
// ──────────────────────────────────────────────────────────

pub fn beq(rs: usize, rt: usize, offset: i32) -> u32 {
    i_type(opcodes::OP_BEQ, rs, rt, offset)
}

pub fn bne(rs: usize, rt: usize, offset: i32) -> u32 {
    i_type(opcodes::OP_BNE, rs, rt, offset)
}

pub fn blez(rs: usize, offset: i32) -> u32 {
    i_type(opcodes::OP_BLEZ, rs, 0, offset)
}

pub fn bgezal(rs: usize, offset: i32) -> u32 {
    i_type(opcodes::OP_REGIMM, rs, 0x11, offset)
}

pub fn j(addr: u32) -> u32 {
    j_type(opcodes::OP_J, addr)
}

pub fn jal(addr: u32) -> u32 {
    j_type(opcodes::OP_JAL, addr)
}

// ──────────────────────────────────────────────────────────
// Loads and stores
// ──────────────────────────────────────────────────────────

pub fn lb(rt: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_LB, base, rt, offset)
}

pub fn lbu(rt: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_LBU, base, rt, offset)
}

pub fn lw(rt: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_LW, base, rt, offset)
}

pub fn lwl(rt: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_LWL, base, rt, offset)
}

pub fn lwr(rt: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_LWR, base, rt, offset)
}

pub fn sb(rt: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_SB, base, rt, offset)
}

pub fn sw(rt: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_SW, base, rt, offset)
}

pub fn swl(rt: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_SWL, base, rt, offset)
}

pub fn swr(rt: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_SWR, base, rt, offset)
}

pub fn lwc1(ft: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_LWC1, base, ft, offset)
}

pub fn swc1(ft: usize, offset: i32, base: usize) -> u32 {
    i_type(opcodes::OP_SWC1, base, ft, offset)
}

// ──────────────────────────────────────────────────────────
// Coprocessor 1 moves
// ──────────────────────────────────────────────────────────

pub fn mfc1(rt: usize, fs: usize) -> u32 {
    (opcodes::OP_COP1 << 26) | (cop1::FMT_MFC1 << 21) | ((rt as u32) << 16) | ((fs as u32) << 11)
}

pub fn mtc1(rt: usize, fs: usize) -> u32 {
    (opcodes::OP_COP1 << 26) | (cop1::FMT_MTC1 << 21) | ((rt as u32) << 16) | ((fs as u32) << 11)
}
