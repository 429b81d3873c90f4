//! Latch contract for fetch entries and control records.

use mipsim_core::core::pipeline::latches::{ControlRecord, IfIdEntry};
use mipsim_core::core::pipeline::traits::PipelineLatch;

#[test]
fn flushed_fetch_entry_is_empty() {
    let mut entry = IfIdEntry::new(0x0040_0000, 0x2001_0005);
    assert!(!entry.is_empty());
    entry.flush();
    assert!(entry.is_empty());
    assert_eq!(entry, IfIdEntry::default());
}

#[test]
fn flushed_control_record_is_a_bubble() {
    let mut rec = ControlRecord::from_fetch(&IfIdEntry::new(0x0040_0000, 0xc));
    rec.is_syscall = true;
    assert!(!rec.is_empty());

    rec.flush();
    assert!(rec.is_empty());
    assert_eq!(rec, ControlRecord::bubble());
}

#[test]
fn disable_writes_clears_every_port() {
    let mut rec = ControlRecord {
        write_reg: true,
        write_freg: true,
        hi_wport: true,
        lo_wport: true,
        ..ControlRecord::default()
    };
    rec.disable_writes();
    assert!(!rec.write_reg && !rec.write_freg && !rec.hi_wport && !rec.lo_wport);
}
