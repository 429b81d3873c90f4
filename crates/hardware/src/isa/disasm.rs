//! Instruction Disassembler for MIPS32.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for trace events, the fatal register dump, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x2001_0005); // addi $at, $zero, 5
//! assert_eq!(text, "addi at, zero, 5");
//! ```

use crate::isa::abi::REG_NAMES;
use crate::isa::instruction::InstructionBits;
use crate::isa::mips32::{cop1, funct, opcodes as op, regimm};

/// Returns the ABI name for an integer register index.
#[inline]
fn reg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}

/// Disassembles a 32-bit MIPS instruction into a human-readable string.
///
/// Returns a mnemonic like `"add v0, a0, a1"` or `"unknown"` for
/// unrecognised encodings. Branch offsets are printed in bytes relative
/// to the delay slot.
pub fn disassemble(inst: u32) -> String {
    let (rs, rt) = (reg(inst.rs()), reg(inst.rt()));
    let simm = inst.simm() as i32;
    let imm = inst.imm();

    match inst.opcode() {
        op::OP_SPECIAL => disassemble_special(inst),
        op::OP_REGIMM => {
            let name = match inst.rt() {
                regimm::BLTZ => "bltz",
                regimm::BGEZ => "bgez",
                regimm::BLTZAL => "bltzal",
                regimm::BGEZAL => "bgezal",
                _ => return "unknown".to_string(),
            };
            format!("{name} {rs}, {}", simm << 2)
        }
        op::OP_J => format!("j {:#x}", inst.target() << 2),
        op::OP_JAL => format!("jal {:#x}", inst.target() << 2),
        op::OP_BEQ => format!("beq {rs}, {rt}, {}", simm << 2),
        op::OP_BNE => format!("bne {rs}, {rt}, {}", simm << 2),
        op::OP_BLEZ => format!("blez {rs}, {}", simm << 2),
        op::OP_BGTZ => format!("bgtz {rs}, {}", simm << 2),
        op::OP_ADDI => format!("addi {rt}, {rs}, {simm}"),
        op::OP_ADDIU => format!("addiu {rt}, {rs}, {simm}"),
        op::OP_SLTI => format!("slti {rt}, {rs}, {simm}"),
        op::OP_SLTIU => format!("sltiu {rt}, {rs}, {simm}"),
        op::OP_ANDI => format!("andi {rt}, {rs}, {imm:#x}"),
        op::OP_ORI => format!("ori {rt}, {rs}, {imm:#x}"),
        op::OP_XORI => format!("xori {rt}, {rs}, {imm:#x}"),
        op::OP_LUI => format!("lui {rt}, {imm:#x}"),
        op::OP_COP1 => match inst.fmt() {
            cop1::FMT_MFC1 => format!("mfc1 {rt}, f{}", inst.fs()),
            cop1::FMT_MTC1 => format!("mtc1 {rt}, f{}", inst.fs()),
            _ => "unknown".to_string(),
        },
        op::OP_LWC1 => format!("lwc1 f{}, {simm}({rs})", inst.rt()),
        op::OP_SWC1 => format!("swc1 f{}, {simm}({rs})", inst.rt()),
        opcode => {
            let name = match opcode {
                op::OP_LB => "lb",
                op::OP_LH => "lh",
                op::OP_LWL => "lwl",
                op::OP_LW => "lw",
                op::OP_LBU => "lbu",
                op::OP_LHU => "lhu",
                op::OP_LWR => "lwr",
                op::OP_SB => "sb",
                op::OP_SH => "sh",
                op::OP_SWL => "swl",
                op::OP_SW => "sw",
                op::OP_SWR => "swr",
                _ => return "unknown".to_string(),
            };
            format!("{name} {rt}, {simm}({rs})")
        }
    }
}

fn disassemble_special(inst: u32) -> String {
    let (rs, rt, rd) = (reg(inst.rs()), reg(inst.rt()), reg(inst.rd()));
    let shamt = inst.shamt();

    if inst == 0 {
        return "nop".to_string();
    }

    match inst.funct() {
        funct::SLL => format!("sll {rd}, {rt}, {shamt}"),
        funct::SRL => format!("srl {rd}, {rt}, {shamt}"),
        funct::SRA => format!("sra {rd}, {rt}, {shamt}"),
        funct::SLLV => format!("sllv {rd}, {rt}, {rs}"),
        funct::SRLV => format!("srlv {rd}, {rt}, {rs}"),
        funct::SRAV => format!("srav {rd}, {rt}, {rs}"),
        funct::JR => format!("jr {rs}"),
        funct::JALR => format!("jalr {rd}, {rs}"),
        funct::SYSCALL => "syscall".to_string(),
        funct::BREAK => "break".to_string(),
        funct::MFHI => format!("mfhi {rd}"),
        funct::MTHI => format!("mthi {rs}"),
        funct::MFLO => format!("mflo {rd}"),
        funct::MTLO => format!("mtlo {rs}"),
        funct::MULT => format!("mult {rs}, {rt}"),
        funct::MULTU => format!("multu {rs}, {rt}"),
        funct::DIV => format!("div {rs}, {rt}"),
        funct::DIVU => format!("divu {rs}, {rt}"),
        f => {
            let name = match f {
                funct::ADD => "add",
                funct::ADDU => "addu",
                funct::SUB => "sub",
                funct::SUBU => "subu",
                funct::AND => "and",
                funct::OR => "or",
                funct::XOR => "xor",
                funct::NOR => "nor",
                funct::SLT => "slt",
                funct::SLTU => "sltu",
                _ => return "unknown".to_string(),
            };
            format!("{name} {rd}, {rs}, {rt}")
        }
    }
}
