//! Field extraction for the R, I and J views of an instruction word.

use mipsim_core::isa::instruction::InstructionBits;
use proptest::prelude::*;

use crate::common::builder::instruction::{i_type, j_type, r_type};

#[test]
fn r_format_fields() {
    let inst = r_type(17, 18, 19, 7, 0x20);
    assert_eq!(inst.opcode(), 0);
    assert_eq!(inst.rs(), 17);
    assert_eq!(inst.rt(), 18);
    assert_eq!(inst.rd(), 19);
    assert_eq!(inst.shamt(), 7);
    assert_eq!(inst.funct(), 0x20);
}

#[test]
fn immediate_is_sign_extended_only_by_simm() {
    let inst = i_type(0x08, 1, 2, -1);
    assert_eq!(inst.imm(), 0xffff);
    assert_eq!(inst.simm(), 0xffff_ffff);

    let inst = i_type(0x08, 1, 2, 0x7fff);
    assert_eq!(inst.simm(), 0x7fff);
}

#[test]
fn cop1_fields_alias_rs_and_rd() {
    let inst = r_type(4, 2, 12, 0, 0) | (0x11 << 26);
    assert_eq!(inst.fmt(), 4);
    assert_eq!(inst.fs(), 12);
}

#[test]
fn jump_target_is_26_bits() {
    let inst = j_type(0x03, 0xffff_fffc);
    assert_eq!(inst.target(), 0x03ff_ffff);
}

proptest! {
    #[test]
    fn i_format_round_trips_fields(op in 0u32..64, rs in 0usize..32, rt in 0usize..32, imm in any::<i16>()) {
        let inst = i_type(op, rs, rt, i32::from(imm));
        prop_assert_eq!(inst.opcode(), op);
        prop_assert_eq!(inst.rs(), rs);
        prop_assert_eq!(inst.rt(), rt);
        prop_assert_eq!(inst.simm() as i32, i32::from(imm));
    }
}
