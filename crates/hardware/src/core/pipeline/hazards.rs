//! Data Hazard Detection.
//!
//! This module decides how long Decode must hold an instruction. It provides:
//! 1. **Load-use detection:** A consumer directly behind an integer load.
//! 2. **Hi/Lo ordering:** `mfhi`/`mflo` behind a multiply, divide or move-to-Hi/Lo.
//! 3. **Store and float operand ordering:** Stores (and `mfc1`) whose registers are
//!    still being produced one to three stages ahead.
//!
//! ALU results never stall: Execute forwards them through the bypass copy in time
//! for the next instruction. Stall lengths come from [`PipelineConfig`] and are
//! indexed by how far ahead of Decode the producer sits.

use crate::config::{PipelineConfig, StageStalls};
use crate::core::pipeline::latches::ControlRecord;
use crate::core::pipeline::signals::Op;

/// The records currently held by the stages downstream of Decode.
#[derive(Clone, Copy, Debug)]
pub struct InFlight<'a> {
    /// Record in Execute (one stage ahead).
    pub execute: &'a ControlRecord,
    /// Record in Memory (two stages ahead).
    pub memory: &'a ControlRecord,
    /// Record in Writeback (three stages ahead).
    pub writeback: &'a ControlRecord,
}

impl<'a> InFlight<'a> {
    /// Iterates from nearest to farthest producer.
    fn nearest_first(&self) -> [(ProducerStage, &'a ControlRecord); 3] {
        [
            (ProducerStage::Execute, self.execute),
            (ProducerStage::Memory, self.memory),
            (ProducerStage::Writeback, self.writeback),
        ]
    }
}

/// Stage holding the instruction a consumer depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProducerStage {
    /// One stage ahead of Decode.
    Execute,
    /// Two stages ahead of Decode.
    Memory,
    /// Three stages ahead of Decode.
    Writeback,
}

impl StageStalls {
    /// Stall length for a producer in `stage`.
    pub const fn at(&self, stage: ProducerStage) -> u32 {
        match stage {
            ProducerStage::Execute => self.execute,
            ProducerStage::Memory => self.memory,
            ProducerStage::Writeback => self.writeback,
        }
    }
}

/// Kind of dependency that caused a stall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HazardKind {
    /// Consumer directly behind an integer load.
    LoadUse,
    /// Hi/Lo consumer behind a Hi/Lo producer.
    HiLo,
    /// Store data/base or float source still in flight.
    Operand,
}

/// Decode stall decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stall {
    /// Value loaded into `decoder_stall`.
    pub cycles: u32,
    /// Dependency that required the longest stall.
    pub cause: HazardKind,
}

/// Checks for a load-use hazard against the record in Execute.
///
/// # Returns
///
/// `true` if Execute holds an integer load whose nonzero destination is one of
/// the consumer's integer sources.
pub fn load_use(execute: &ControlRecord, consumer: &ControlRecord) -> bool {
    execute.load_delay
        && execute.write_reg
        && execute.dst != 0
        && consumer.int_sources().any(|r| r == execute.dst)
}

/// Finds the nearest in-flight writer of the Hi or Lo register `consumer` reads.
pub fn hilo_producer(inflight: &InFlight<'_>, consumer: &ControlRecord) -> Option<ProducerStage> {
    let reads_hi = consumer.op == Op::MoveFromHi;
    inflight
        .nearest_first()
        .into_iter()
        .find(|(_, rec)| if reads_hi { rec.hi_wport } else { rec.lo_wport })
        .map(|(stage, _)| stage)
}

/// Finds the nearest in-flight writer of any register `consumer` reads.
///
/// Integer sources match records with `write_reg` and a nonzero destination;
/// the float source matches records with `write_freg`.
pub fn operand_producer(inflight: &InFlight<'_>, consumer: &ControlRecord) -> Option<ProducerStage> {
    inflight
        .nearest_first()
        .into_iter()
        .find(|(_, rec)| {
            let int_hit =
                rec.write_reg && rec.dst != 0 && consumer.int_sources().any(|r| r == rec.dst);
            let float_hit = rec.write_freg && consumer.fsrc_reg == Some(rec.dst);
            int_hit || float_hit
        })
        .map(|(stage, _)| stage)
}

/// Computes the stall Decode must apply before `consumer` may proceed.
///
/// When several hazards apply the longest stall wins.
///
/// # Arguments
///
/// * `consumer` - The freshly decoded record.
/// * `inflight` - Records currently in Execute, Memory and Writeback.
/// * `policy`   - Configured stall lengths.
///
/// # Returns
///
/// `None` when the instruction can proceed this cycle.
pub fn decode_stall(
    consumer: &ControlRecord,
    inflight: &InFlight<'_>,
    policy: &PipelineConfig,
) -> Option<Stall> {
    let mut stall: Option<Stall> = None;
    let mut raise = |cycles: u32, cause: HazardKind| {
        if stall.is_none_or(|s| cycles > s.cycles) {
            stall = Some(Stall { cycles, cause });
        }
    };

    if load_use(inflight.execute, consumer) {
        raise(policy.load_use_stall, HazardKind::LoadUse);
    }

    let hilo = consumer
        .op
        .reads_hilo()
        .then(|| hilo_producer(inflight, consumer))
        .flatten();
    if let Some(stage) = hilo {
        raise(policy.hilo_stall.at(stage), HazardKind::HiLo);
    }

    let operand = (consumer.is_store() || consumer.op == Op::MoveFromCop1)
        .then(|| operand_producer(inflight, consumer))
        .flatten();
    if let Some(stage) = operand {
        raise(policy.store_stall.at(stage), HazardKind::Operand);
    }

    stall
}
