//! Hi/Lo ordering through the pipeline.

use crate::common::builder::instruction::*;
use crate::common::harness::{PROGRAM_BASE, TestContext};

#[test]
fn mfhi_waits_for_multiply_to_commit() {
    let mut tc = TestContext::new().load_program(PROGRAM_BASE, &[mult(1, 2), mfhi(3), mflo(4)]);
    tc.set_reg(1, 0x1_0000);
    tc.set_reg(2, 0x1_0000);
    tc.run(14).unwrap();

    assert_eq!(tc.get_reg(3), 1);
    assert_eq!(tc.get_reg(4), 0);
    assert_eq!(tc.cpu().stats.bubbles, 3);
    assert_eq!(tc.cpu().stats.hilo_stalls, 1);
}

#[test]
fn mflo_two_behind_multiply_stalls_less() {
    let mut tc =
        TestContext::new().load_program(PROGRAM_BASE, &[multu(1, 2), nop(), mflo(4)]);
    tc.set_reg(1, 6);
    tc.set_reg(2, 7);
    tc.run(14).unwrap();

    assert_eq!(tc.get_reg(4), 42);
    assert_eq!(tc.cpu().stats.bubbles, 2);
}

#[test]
fn divide_by_zero_saturates_without_trapping() {
    let mut tc = TestContext::new().load_program(PROGRAM_BASE, &[div(1, 0), mfhi(3), mflo(4)]);
    tc.set_reg(1, 100);
    tc.run(14).unwrap();

    assert_eq!(tc.get_reg(3), 0x7fff_ffff);
    assert_eq!(tc.get_reg(4), 0x7fff_ffff);
}

#[test]
fn moves_to_hi_and_lo() {
    let mut tc = TestContext::new().load_program(
        PROGRAM_BASE,
        &[addi(1, 0, 11), addi(2, 0, 22), mthi(1), mtlo(2), mfhi(3), mflo(4)],
    );
    tc.run(24).unwrap();

    assert_eq!(tc.cpu().regs.hi, 11);
    assert_eq!(tc.cpu().regs.lo, 22);
    assert_eq!(tc.get_reg(3), 11);
    assert_eq!(tc.get_reg(4), 22);
}
