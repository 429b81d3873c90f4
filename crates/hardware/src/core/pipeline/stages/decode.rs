//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Field Extraction:** Splits the word into its R/I/J views and selects one `Op`
//!    (and at most one `MemOp`), so no later stage inspects the encoding again.
//! 2. **Operand Read:** Reads source values from the bypass copy and records which
//!    registers Execute must re-read.
//! 3. **Hazard Control:** Sets `decoder_stall` from the hazard rules, `branch_stall`
//!    for control transfers and `syscall_stall` for traps.
//! 4. **Bubble Injection:** Passes a bubble to Execute while a stall is counting down
//!    and in every cycle that follows a pending syscall.
//!
//! A stalled instruction is held here and decoded again when the counter reaches 1,
//! so it picks up the operand values forwarded in the meantime.

use tracing::{debug, trace};

use crate::common::{RegisterFile, Result};
use crate::core::Cpu;
use crate::core::pipeline::hazards::{self, HazardKind, InFlight};
use crate::core::pipeline::latches::{ControlRecord, IfIdEntry};
use crate::core::pipeline::signals::{AluOp, BranchCond, MemOp, MulDivOp, Op, ShiftAmount};
use crate::core::pipeline::traits::PipelineStage;
use crate::core::units::bru::Bru;
use crate::isa::abi;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::InstructionBits;
use crate::isa::mips32::{cop1, funct, opcodes, regimm};

/// Decode stage state carried between the rising and falling steps.
#[derive(Clone, Debug, Default)]
pub struct DecodeStage {
    held: IfIdEntry,
    syscall_pending: bool,
    branch_pending: bool,
}

impl DecodeStage {
    /// Creates an idle decode stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instruction currently held for decoding.
    pub const fn held(&self) -> &IfIdEntry {
        &self.held
    }
}

impl PipelineStage for DecodeStage {
    fn rising(&mut self, cpu: &mut Cpu) -> Result<()> {
        self.syscall_pending = cpu.hazards.syscall_stall != 0;
        self.branch_pending = cpu.hazards.branch_stall != 0;
        if cpu.hazards.decoder_stall == 0 {
            self.held = cpu.if_id;
        }
        Ok(())
    }

    fn falling(&mut self, cpu: &mut Cpu) -> Result<()> {
        if self.syscall_pending || cpu.hazards.syscall_stall != 0 {
            self.held = IfIdEntry::default();
        }
        if self.branch_pending {
            cpu.hazards.branch_stall = 0;
        }

        if cpu.hazards.decoder_stall <= 1 {
            let rec = decode_fields(&self.held, &cpu.regs);
            apply_hazards(cpu, &rec);
            if cpu.trace && rec.valid {
                trace!(
                    target: "mipsim::pipeline",
                    "ID  {:#010x} {}",
                    rec.pc,
                    disassemble(rec.inst)
                );
            }
            cpu.id = rec;
        }

        if cpu.hazards.decoder_stall > 0 {
            cpu.hazards.decoder_stall -= 1;
        }

        if cpu.hazards.decoder_stall > 0 {
            cpu.id_ex = ControlRecord::bubble();
            cpu.stats.bubbles += 1;
        } else {
            cpu.id_ex.clone_from(&cpu.id);
        }
        Ok(())
    }
}

/// Applies the stall rules for a freshly decoded record.
fn apply_hazards(cpu: &mut Cpu, rec: &ControlRecord) {
    let inflight = InFlight {
        execute: &cpu.ex,
        memory: &cpu.mem,
        writeback: &cpu.wb,
    };
    if let Some(stall) = hazards::decode_stall(rec, &inflight, &cpu.policy) {
        debug!(
            target: "mipsim::pipeline",
            "ID  {:#010x} stall {} ({:?})",
            rec.pc,
            stall.cycles,
            stall.cause
        );
        cpu.hazards.decoder_stall = stall.cycles;
        match stall.cause {
            HazardKind::LoadUse => cpu.stats.load_use_stalls += 1,
            HazardKind::HiLo => cpu.stats.hilo_stalls += 1,
            HazardKind::Operand => cpu.stats.operand_stalls += 1,
        }
    }

    if rec.bdslot {
        cpu.hazards.branch_stall = 1;
    }
    if rec.is_syscall {
        cpu.hazards.syscall_stall = 1;
    }
}

/// Builds the control record for a fetched instruction.
///
/// Pure with respect to the pipeline: reads operand values from the bypass copy
/// and never touches the stall counters. A bubble entry yields a bubble record;
/// an unrecognized encoding yields a record with `is_illegal` set and every
/// write-enable cleared.
///
/// # Arguments
///
/// * `entry` - The IF/ID entry to decode.
/// * `regs`  - Register file supplying the bypass values.
pub fn decode_fields(entry: &IfIdEntry, regs: &RegisterFile) -> ControlRecord {
    if !entry.valid {
        return ControlRecord::bubble();
    }

    let inst = entry.inst;
    let mut rec = ControlRecord::from_fetch(entry);
    let (rs, rt) = (inst.rs(), inst.rt());

    let known = match inst.opcode() {
        opcodes::OP_SPECIAL => decode_special(&mut rec, inst),
        opcodes::OP_REGIMM => {
            let (cond, link) = match rt {
                regimm::BLTZ => (BranchCond::Ltz, false),
                regimm::BGEZ => (BranchCond::Gez, false),
                regimm::BLTZAL => (BranchCond::Ltz, true),
                regimm::BGEZAL => (BranchCond::Gez, true),
                _ => return illegal(rec),
            };
            branch(&mut rec, cond, link, Some(rs), None);
            true
        }
        opcodes::OP_J | opcodes::OP_JAL => {
            let link = inst.opcode() == opcodes::OP_JAL;
            rec.op = Op::Jump { link };
            rec.btgt = Bru::jump_target(entry.pc, inst.target());
            rec.bdslot = true;
            if link {
                write_int(&mut rec, abi::REG_RA);
            }
            true
        }
        opcodes::OP_BEQ | opcodes::OP_BNE | opcodes::OP_BLEZ | opcodes::OP_BGTZ => {
            let (cond, src2) = match inst.opcode() {
                opcodes::OP_BEQ => (BranchCond::Eq, Some(rt)),
                opcodes::OP_BNE => (BranchCond::Ne, Some(rt)),
                opcodes::OP_BLEZ => (BranchCond::Lez, None),
                _ => (BranchCond::Gtz, None),
            };
            branch(&mut rec, cond, false, Some(rs), src2);
            true
        }
        opcode @ (opcodes::OP_ADDI
        | opcodes::OP_ADDIU
        | opcodes::OP_SLTI
        | opcodes::OP_SLTIU
        | opcodes::OP_ANDI
        | opcodes::OP_ORI
        | opcodes::OP_XORI) => {
            let (op, imm) = match opcode {
                opcodes::OP_ADDI | opcodes::OP_ADDIU => (AluOp::Add, inst.simm()),
                opcodes::OP_SLTI => (AluOp::Slt, inst.simm()),
                opcodes::OP_SLTIU => (AluOp::Sltu, inst.simm()),
                opcodes::OP_ANDI => (AluOp::And, inst.imm()),
                opcodes::OP_ORI => (AluOp::Or, inst.imm()),
                _ => (AluOp::Xor, inst.imm()),
            };
            alu_imm(&mut rec, op, imm);
            true
        }
        opcodes::OP_LUI => {
            rec.op = Op::Alu(AluOp::Lui);
            rec.src2 = inst.imm();
            write_int(&mut rec, rt);
            true
        }
        opcodes::OP_COP1 => match inst.fmt() {
            cop1::FMT_MFC1 => {
                rec.op = Op::MoveFromCop1;
                rec.fsrc_reg = Some(inst.fs());
                write_int(&mut rec, rt);
                true
            }
            cop1::FMT_MTC1 => {
                rec.op = Op::MoveToCop1;
                rec.src1_reg = Some(rt);
                rec.dst = inst.fs();
                rec.write_freg = true;
                true
            }
            _ => false,
        },
        opcode => match memory_op(opcode) {
            Some(mem_op) => {
                memory(&mut rec, mem_op);
                true
            }
            None => false,
        },
    };

    if !known {
        return illegal(rec);
    }

    read_operands(&mut rec, regs);
    rec
}

/// Decodes the SPECIAL (opcode 0) group.
fn decode_special(rec: &mut ControlRecord, inst: u32) -> bool {
    let (rs, rt, rd) = (inst.rs(), inst.rt(), inst.rd());
    let two_regs = |rec: &mut ControlRecord| {
        rec.src1_reg = Some(rs);
        rec.src2_reg = Some(rt);
    };

    match inst.funct() {
        funct::SLL | funct::SRL | funct::SRA => {
            rec.op = Op::Shift(shift_kind(inst.funct()), ShiftAmount::Immediate);
            rec.src2_reg = Some(rt);
            rec.shift_amt = inst.shamt();
            write_int(rec, rd);
        }
        funct::SLLV | funct::SRLV | funct::SRAV => {
            rec.op = Op::Shift(shift_kind(inst.funct()), ShiftAmount::Variable);
            two_regs(rec);
            write_int(rec, rd);
        }
        funct::JR | funct::JALR => {
            let link = inst.funct() == funct::JALR;
            rec.op = Op::JumpReg { link };
            rec.src1_reg = Some(rs);
            rec.bdslot = true;
            if link {
                write_int(rec, rd);
            }
        }
        funct::SYSCALL => {
            rec.op = Op::Syscall;
            rec.is_syscall = true;
        }
        funct::BREAK => rec.op = Op::Break,
        funct::MFHI => {
            rec.op = Op::MoveFromHi;
            write_int(rec, rd);
        }
        funct::MFLO => {
            rec.op = Op::MoveFromLo;
            write_int(rec, rd);
        }
        funct::MTHI => {
            rec.op = Op::MoveToHi;
            rec.src1_reg = Some(rs);
            rec.hi_wport = true;
        }
        funct::MTLO => {
            rec.op = Op::MoveToLo;
            rec.src1_reg = Some(rs);
            rec.lo_wport = true;
        }
        f @ (funct::MULT | funct::MULTU | funct::DIV | funct::DIVU) => {
            rec.op = Op::MulDiv(match f {
                funct::MULT => MulDivOp::Mult,
                funct::MULTU => MulDivOp::Multu,
                funct::DIV => MulDivOp::Div,
                _ => MulDivOp::Divu,
            });
            two_regs(rec);
            rec.hi_wport = true;
            rec.lo_wport = true;
        }
        f => {
            let op = match f {
                funct::ADD | funct::ADDU => AluOp::Add,
                funct::SUB | funct::SUBU => AluOp::Sub,
                funct::AND => AluOp::And,
                funct::OR => AluOp::Or,
                funct::XOR => AluOp::Xor,
                funct::NOR => AluOp::Nor,
                funct::SLT => AluOp::Slt,
                funct::SLTU => AluOp::Sltu,
                _ => return false,
            };
            rec.op = Op::Alu(op);
            two_regs(rec);
            write_int(rec, rd);
        }
    }
    true
}

const fn shift_kind(f: u32) -> AluOp {
    match f {
        funct::SLL | funct::SLLV => AluOp::Sll,
        funct::SRL | funct::SRLV => AluOp::Srl,
        _ => AluOp::Sra,
    }
}

const fn memory_op(opcode: u32) -> Option<MemOp> {
    Some(match opcode {
        opcodes::OP_LB => MemOp::Lb,
        opcodes::OP_LH => MemOp::Lh,
        opcodes::OP_LWL => MemOp::Lwl,
        opcodes::OP_LW => MemOp::Lw,
        opcodes::OP_LBU => MemOp::Lbu,
        opcodes::OP_LHU => MemOp::Lhu,
        opcodes::OP_LWR => MemOp::Lwr,
        opcodes::OP_LWC1 => MemOp::Lwc1,
        opcodes::OP_SB => MemOp::Sb,
        opcodes::OP_SH => MemOp::Sh,
        opcodes::OP_SWL => MemOp::Swl,
        opcodes::OP_SW => MemOp::Sw,
        opcodes::OP_SWR => MemOp::Swr,
        opcodes::OP_SWC1 => MemOp::Swc1,
        _ => return None,
    })
}

const fn write_int(rec: &mut ControlRecord, dst: usize) {
    rec.dst = dst;
    rec.write_reg = true;
}

fn alu_imm(rec: &mut ControlRecord, op: AluOp, imm: u32) {
    let (rs, rt) = (rec.inst.rs(), rec.inst.rt());
    rec.op = Op::Alu(op);
    rec.src1_reg = Some(rs);
    rec.src2 = imm;
    write_int(rec, rt);
}

fn branch(
    rec: &mut ControlRecord,
    cond: BranchCond,
    link: bool,
    src1: Option<usize>,
    src2: Option<usize>,
) {
    rec.op = Op::Branch { cond, link };
    rec.src1_reg = src1;
    rec.src2_reg = src2;
    rec.btgt = Bru::branch_target(rec.pc, rec.inst.simm());
    rec.bdslot = true;
    if link {
        write_int(rec, abi::REG_RA);
    }
}

fn memory(rec: &mut ControlRecord, mem_op: MemOp) {
    let (rs, rt, simm) = (rec.inst.rs(), rec.inst.rt(), rec.inst.simm());
    rec.op = Op::MemAddr;
    rec.mem_op = Some(mem_op);
    rec.src1_reg = Some(rs);
    rec.src2 = simm;

    match mem_op {
        MemOp::Lwc1 => {
            rec.dst = rt;
            rec.write_freg = true;
        }
        MemOp::Swc1 => rec.fsrc_reg = Some(rt),
        op if op.is_store() => rec.data_reg = Some(rt),
        op => {
            write_int(rec, rt);
            rec.load_delay = true;
            if op.merges_subreg() {
                rec.data_reg = Some(rt);
            }
        }
    }
}

fn read_operands(rec: &mut ControlRecord, regs: &RegisterFile) {
    if let Some(r) = rec.src1_reg {
        rec.src1 = regs.bypass.read(r);
    }
    if let Some(r) = rec.src2_reg {
        rec.src2 = regs.bypass.read(r);
    }
    if let Some(r) = rec.data_reg {
        rec.subreg_operand = regs.bypass.read(r);
    }
}

fn illegal(mut rec: ControlRecord) -> ControlRecord {
    rec.op = Op::Nop;
    rec.mem_op = None;
    rec.is_illegal = true;
    rec.disable_writes();
    rec
}
