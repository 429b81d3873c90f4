//! Branch predicates and target formulas.

use mipsim_core::core::pipeline::signals::BranchCond;
use mipsim_core::core::units::bru::Bru;
use rstest::rstest;

#[rstest]
#[case(BranchCond::Eq, 5, 5, true)]
#[case(BranchCond::Eq, 5, 6, false)]
#[case(BranchCond::Ne, 5, 6, true)]
#[case(BranchCond::Lez, 0, 0, true)]
#[case(BranchCond::Lez, 0xffff_ffff, 0, true)]
#[case(BranchCond::Lez, 1, 0, false)]
#[case(BranchCond::Gtz, 1, 0, true)]
#[case(BranchCond::Gtz, 0x8000_0000, 0, false)]
#[case(BranchCond::Ltz, 0x8000_0000, 0, true)]
#[case(BranchCond::Ltz, 0, 0, false)]
#[case(BranchCond::Gez, 0, 0, true)]
#[case(BranchCond::Gez, 0xffff_ffff, 0, false)]
fn predicates(#[case] cond: BranchCond, #[case] rs: u32, #[case] rt: u32, #[case] taken: bool) {
    assert_eq!(Bru::taken(cond, rs, rt), taken);
}

#[test]
fn branch_target_is_relative_to_delay_slot() {
    assert_eq!(Bru::branch_target(0x0040_0004, 2), 0x0040_0010);
    assert_eq!(Bru::branch_target(0x0040_0010, -2_i32 as u32), 0x0040_000c);
    assert_eq!(Bru::branch_target(0x0040_0000, 0xffff_ffff), 0x0040_0000);
}

#[test]
fn jump_target_keeps_region_of_delay_slot() {
    assert_eq!(Bru::jump_target(0x0040_0000, 0x0010_0004), 0x0040_0010);
    assert_eq!(Bru::jump_target(0x1fff_fffc, 0x0000_0001), 0x2000_0004);
}
