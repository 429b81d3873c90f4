//! Register files.

use mipsim_core::common::RegisterFile;
use mipsim_core::core::arch::fpr::Fpr;

#[test]
fn double_pairs_low_word_in_even_register() {
    let mut fpr = Fpr::new();
    let bits = 1.5f64.to_bits();
    fpr.write(2, bits as u32);
    fpr.write(3, (bits >> 32) as u32);

    assert_eq!(fpr.read_double(2), bits);
    assert_eq!(fpr.read_double(3), bits, "odd index names the same pair");
    assert!((fpr.read_double_f64(2) - 1.5).abs() < f64::EPSILON);
}

#[test]
fn register_zero_ignores_writes() {
    let mut regs = RegisterFile::new();
    regs.write(0, 123);
    regs.write(5, 9);

    assert_eq!(regs.read(0), 0);
    assert_eq!(regs.bypass.read(0), 0);
    assert_eq!(regs.bypass.read(5), 9);
}

#[test]
fn bypass_refresh_discards_forwarded_values() {
    let mut regs = RegisterFile::new();
    regs.write(4, 1);
    regs.bypass.write(4, 99);
    regs.flags.set(4);

    regs.refresh_bypass();
    assert_eq!(regs.bypass.read(4), 1);
}

#[test]
fn dump_lists_every_register() {
    let mut regs = RegisterFile::new();
    regs.write(29, 0x7fff_fff0);
    let dump = regs.gpr.dump();

    assert_eq!(dump.lines().count(), 32);
    assert!(dump.contains("7ffffff0 (2147483632)"));
}
