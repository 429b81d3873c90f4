//! Control Hazard Tests.
//!
//! Branches and jumps resolve in Execute. The instruction in the delay slot
//! always executes; the one after it is fetched only when the branch is not taken.

use mipsim_core::isa::abi::REG_V0;

use crate::common::builder::instruction::*;
use crate::common::harness::{DATA_BASE, PROGRAM_BASE, TestContext};

const P: u32 = PROGRAM_BASE;

#[test]
fn taken_branch_runs_delay_slot_and_skips_fall_through() {
    let mut tc = TestContext::new().load_program(
        P,
        &[
            addi(1, 0, 1),
            beq(0, 0, 2), // P+4 -> P+16
            addi(2, 0, 2),
            addi(3, 0, 3),
            addi(4, 0, 4),
        ],
    );
    tc.run(12).unwrap();

    assert_eq!(tc.get_reg(1), 1);
    assert_eq!(tc.get_reg(2), 2, "delay slot executes");
    assert_eq!(tc.get_reg(3), 0, "fall-through is never fetched");
    assert_eq!(tc.get_reg(4), 4);
    assert_eq!(tc.cpu().stats.cond_branches, 1);
    assert_eq!(tc.cpu().stats.taken_branches, 1);
}

#[test]
fn untaken_branch_falls_through() {
    let mut tc = TestContext::new().load_program(
        P,
        &[addi(1, 0, 1), bne(0, 0, 2), addi(2, 0, 2), addi(3, 0, 3), addi(4, 0, 4)],
    );
    tc.run(14).unwrap();

    assert_eq!(tc.get_reg(2), 2);
    assert_eq!(tc.get_reg(3), 3);
    assert_eq!(tc.get_reg(4), 4);
    assert_eq!(tc.cpu().stats.taken_branches, 0);
}

#[test]
fn branch_sees_forwarded_operand() {
    let mut tc = TestContext::new().load_program(
        P,
        &[addi(1, 0, 1), beq(1, 0, 2), nop(), addi(3, 0, 3), addi(4, 0, 4)],
    );
    tc.run(14).unwrap();

    assert_eq!(tc.get_reg(3), 3, "r1 == 1 so beq r1, r0 is not taken");
}

#[test]
fn branch_issues_exactly_one_fetch_bubble() {
    let mut tc =
        TestContext::new().load_program(P, &[beq(0, 0, 2), nop(), nop(), addi(4, 0, 4)]);
    // Cycle 1 fetches the branch, 2 the delay slot, 3 is the bubble, 4 the target at P+12.
    tc.run(4).unwrap();
    assert_eq!(tc.cpu().if_id.pc, P + 12);
    assert_eq!(tc.cpu().stats.fetched, 3);
}

#[test]
fn jal_links_past_the_delay_slot() {
    let mut tc = TestContext::new().load_program(
        P,
        &[
            jal(P + 16),
            addi(2, 0, 2),
            addi(3, 0, 3),
            nop(),
            addi(4, 0, 4),
        ],
    );
    tc.run(12).unwrap();

    assert_eq!(tc.get_reg(31), P + 8);
    assert_eq!(tc.get_reg(2), 2);
    assert_eq!(tc.get_reg(3), 0);
    assert_eq!(tc.get_reg(4), 4);
    assert_eq!(tc.cpu().stats.jal, 1);
}

#[test]
fn call_and_return() {
    // P:    jal  f
    // P+4:  addi r2, r0, 2      (delay slot)
    // P+8:  addi r5, r0, 5      (return lands here)
    // P+12: j    P+12
    // P+16: nop
    // f:    addi r4, r0, 4
    // f+4:  jr   ra
    // f+8:  nop                 (delay slot)
    let f = P + 20;
    let mut tc = TestContext::new().load_program(
        P,
        &[
            jal(f),
            addi(2, 0, 2),
            addi(5, 0, 5),
            j(P + 12),
            nop(),
            addi(4, 0, 4),
            jr(31),
            nop(),
        ],
    );
    tc.run(30).unwrap();

    assert_eq!(tc.get_reg(4), 4);
    assert_eq!(tc.get_reg(5), 5);
    assert_eq!(tc.get_reg(31), P + 8);
    assert_eq!(tc.cpu().stats.jr, 1);
}

#[test]
fn jalr_links_into_named_register() {
    let target = P + 16;
    let mut tc = TestContext::new().load_program(
        P,
        &[jalr(7, 8), nop(), addi(3, 0, 3), nop(), addi(4, 0, 4)],
    );
    tc.set_reg(8, target);
    tc.run(12).unwrap();

    assert_eq!(tc.get_reg(7), P + 8);
    assert_eq!(tc.get_reg(31), 0);
    assert_eq!(tc.get_reg(3), 0);
    assert_eq!(tc.get_reg(4), 4);
}

#[test]
fn linking_branch_writes_ra_even_when_not_taken() {
    let mut tc =
        TestContext::new().load_program(P, &[bgezal(1, 3), nop(), addi(3, 0, 3)]);
    tc.set_reg(1, 0xffff_ffff);
    tc.run(10).unwrap();

    assert_eq!(tc.get_reg(31), P + 8);
    assert_eq!(tc.get_reg(3), 3);
}

#[test]
fn branch_waits_for_loaded_operand() {
    let mut tc = TestContext::new().load_program(
        P,
        &[
            lw(1, 0, 2),
            beq(1, 0, 2), // P+4 -> P+16
            addi(3, 0, 3),
            addi(4, 0, 4),
            addi(5, 0, 5),
        ],
    );
    tc.set_reg(2, DATA_BASE);
    tc.run(16).unwrap();

    assert_eq!(tc.get_reg(3), 3);
    assert_eq!(tc.get_reg(4), 0, "loaded zero makes the branch taken");
    assert_eq!(tc.get_reg(5), 5);
    assert_eq!(tc.cpu().stats.load_use_stalls, 1);
}

#[test]
fn syscall_in_delay_slot_resumes_at_branch_target() {
    let mut tc = TestContext::new().load_program(
        P,
        &[
            addi(REG_V0, 0, 4000),
            beq(0, 0, 2), // P+4 -> P+16
            syscall(),
            addi(8, 0, 8),
            addi(9, 0, 9),
        ],
    );
    tc.run(20).unwrap();

    assert_eq!(tc.cpu().stats.syscalls, 1);
    assert_eq!(tc.get_reg(REG_V0), 89);
    assert_eq!(tc.get_reg(8), 0);
    assert_eq!(tc.get_reg(9), 9);
}
