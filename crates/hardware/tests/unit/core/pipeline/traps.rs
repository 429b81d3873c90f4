//! Trap Tests.
//!
//! Syscalls drain the pipeline, run in Writeback against committed state and
//! replay the squashed fetch. Illegal encodings halt the simulation.

use mipsim_core::common::SimError;
use mipsim_core::isa::abi::{REG_A0, REG_A1, REG_A2, REG_A3, REG_V0};
use mipsim_core::sim::RunOutcome;

use crate::common::builder::instruction::*;
use crate::common::harness::{DATA_BASE, PROGRAM_BASE, TestContext};

const P: u32 = PROGRAM_BASE;

// ══════════════════════════════════════════════════════════
// 1. Syscall replay
// ══════════════════════════════════════════════════════════

#[test]
fn squashed_fetch_is_replayed_once() {
    let mut tc = TestContext::new().load_program(
        P,
        &[addi(REG_V0, 0, 4000), syscall(), addi(8, 8, 1)],
    );

    while tc.cpu().stats.syscalls == 0 {
        tc.run(1).unwrap();
        assert!(tc.cpu().stats.cycles < 20, "syscall never reached writeback");
    }
    assert_eq!(tc.cpu().stats.cycles, 6);
    assert_eq!(tc.cpu().if_id.pc, P + 8);
    assert!(tc.cpu().regs.flags.is_clear());
    assert_eq!(tc.cpu().stats.fetched, 3);
    assert_eq!(tc.cpu().hazards.syscall_stall, 0);

    tc.run(10).unwrap();
    assert_eq!(tc.get_reg(8), 1, "instruction after the syscall ran exactly once");
}

#[test]
fn unsupported_syscall_reports_enosys() {
    let mut tc =
        TestContext::new().load_program(P, &[addi(REG_V0, 0, 4000), syscall(), nop(), nop()]);
    tc.run(12).unwrap();

    assert_eq!(tc.get_reg(REG_V0), 89);
    assert_eq!(tc.get_reg(REG_A3), 1);
    assert_eq!(tc.cpu().regs.bypass.read(REG_V0), 89);
}

#[test]
fn syscall_result_is_visible_to_next_instruction() {
    let mut tc = TestContext::new().load_program(
        P,
        &[addi(REG_V0, 0, 4000), syscall(), add(9, REG_V0, 0)],
    );
    tc.run(16).unwrap();
    assert_eq!(tc.get_reg(9), 89);
}

#[test]
fn instructions_behind_syscall_are_bubbles() {
    let mut tc = TestContext::new().load_program(P, &[syscall(), addi(8, 0, 1)]);
    tc.set_reg(REG_V0, 4000);
    tc.run(4).unwrap();

    assert!(!tc.cpu().id_ex.valid);
    assert_eq!(tc.cpu().hazards.syscall_stall, 1);
    assert_eq!(tc.get_reg(8), 0);
}

// ══════════════════════════════════════════════════════════
// 2. Emulated calls
// ══════════════════════════════════════════════════════════

#[test]
fn exit_reports_code() {
    let mut tc = TestContext::new().load_program(
        P,
        &[addi(REG_V0, 0, 4001), addi(REG_A0, 0, 7), syscall()],
    );
    assert_eq!(tc.run_to_end().unwrap(), RunOutcome::Exited(7));
    assert_eq!(tc.cpu().stats.syscalls, 1);
}

#[test]
fn write_then_exit() {
    let mut tc = TestContext::new().load_program(
        P,
        &[
            addi(REG_V0, 0, 4004),
            addi(REG_A0, 0, 1),
            lui(REG_A1, (DATA_BASE >> 16) as u16),
            addi(REG_A2, 0, 3),
            syscall(),
            add(10, REG_V0, 0),
            addi(REG_V0, 0, 4001),
            addi(REG_A0, 0, 0),
            syscall(),
        ],
    );
    tc.cpu_mut().memory.load_bytes(DATA_BASE, b"hi\n");

    assert_eq!(tc.run_to_end().unwrap(), RunOutcome::Exited(0));
    assert_eq!(tc.output(), "hi\n");
    assert_eq!(tc.error_output(), "");
    assert_eq!(tc.get_reg(10), 3, "write returns the byte count");
    assert_eq!(tc.cpu().stats.syscalls, 2);
}

#[test]
fn write_to_stderr() {
    let mut tc = TestContext::new().load_program(
        P,
        &[
            addi(REG_V0, 0, 4004),
            addi(REG_A0, 0, 2),
            lui(REG_A1, (DATA_BASE >> 16) as u16),
            addi(REG_A2, 0, 4),
            syscall(),
            addi(REG_V0, 0, 4246),
            addi(REG_A0, 0, 3),
            syscall(),
        ],
    );
    tc.cpu_mut().memory.load_bytes(DATA_BASE, b"oops");

    assert_eq!(tc.run_to_end().unwrap(), RunOutcome::Exited(3));
    assert_eq!(tc.error_output(), "oops");
    assert_eq!(tc.output(), "");
}

// ══════════════════════════════════════════════════════════
// 3. Illegal instructions and break
// ══════════════════════════════════════════════════════════

#[test]
fn illegal_instruction_halts_with_its_address() {
    let mut tc =
        TestContext::new().load_program(P, &[addi(1, 0, 1), 0xfc00_0000, addi(2, 0, 2)]);
    let err = tc.run_to_end().unwrap_err();

    assert!(matches!(
        err,
        SimError::IllegalInstruction {
            inst: 0xfc00_0000,
            pc
        } if pc == P + 4
    ));
    assert_eq!(tc.get_reg(1), 1, "older instruction committed");
    assert_eq!(tc.get_reg(2), 0, "younger instruction did not");
    assert_eq!(tc.cpu().stats.retired, 1);
}

#[test]
fn dump_names_the_failing_instruction() {
    let mut tc = TestContext::new().load_program(P, &[0xfc00_0000]);
    let _ = tc.run_to_end();
    let dump = tc.cpu().dump_state();

    assert!(dump.starts_with("PC = 0x"));
    assert!(dump.contains(" hi "));
    assert!(dump.contains("unknown"));
    assert!(dump.contains(&format!("WB  {P:#010x}")));
    assert_eq!(dump.lines().count(), 1 + 32 + 2 + 1);
}

#[test]
fn break_is_a_no_op() {
    let mut tc = TestContext::new().load_program(P, &[brk(), addi(1, 0, 1)]);
    tc.run(8).unwrap();
    assert_eq!(tc.get_reg(1), 1);
}
