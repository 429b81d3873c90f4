//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline. It provides:
//! 1. **Cycle and CPI:** Total cycles, fetched and retired instructions, and derived metrics.
//! 2. **Pipeline:** Bubbles injected by Decode and stall decisions by cause.
//! 3. **Instruction mix:** Branches, jumps, loads, stores, float moves and syscalls.

use std::time::Instant;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Instructions fetched (net of fetches squashed by a syscall).
    pub fetched: u64,
    /// Instructions that completed Writeback.
    pub retired: u64,

    /// Bubbles Decode passed to Execute while holding a stalled instruction.
    pub bubbles: u64,
    /// Stall decisions caused by a consumer directly behind a load.
    pub load_use_stalls: u64,
    /// Stall decisions caused by `mfhi`/`mflo` behind a Hi/Lo producer.
    pub hilo_stalls: u64,
    /// Stall decisions caused by store or `mfc1` operands still in flight.
    pub operand_stalls: u64,

    /// Conditional branches executed.
    pub cond_branches: u64,
    /// Conditional branches taken.
    pub taken_branches: u64,
    /// `jal` instructions executed.
    pub jal: u64,
    /// `jr`/`jalr` instructions executed.
    pub jr: u64,
    /// Loads performed.
    pub loads: u64,
    /// Stores performed.
    pub stores: u64,
    /// `mfc1`/`mtc1` instructions executed.
    pub fp_moves: u64,
    /// Syscalls serviced.
    pub syscalls: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            fetched: 0,
            retired: 0,
            bubbles: 0,
            load_use_stalls: 0,
            hilo_stalls: 0,
            operand_stalls: 0,
            cond_branches: 0,
            taken_branches: 0,
            jal: 0,
            jr: 0,
            loads: 0,
            stores: 0,
            fp_moves: 0,
            syscalls: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"pipeline"`, `"instruction_mix"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "pipeline", "instruction_mix"];

impl SimStats {
    /// Cycles per retired instruction, or 0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.retired as f64
        }
    }

    /// Renders the requested sections as text.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an empty
    /// slice selects every section.
    pub fn report(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;
        let mut out = Vec::new();

        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            out.push("==========================================================".to_string());
            out.push("MIPS PIPELINE SIMULATION STATISTICS".to_string());
            out.push("==========================================================".to_string());
            out.push(format!("host_seconds             {seconds:.4} s"));
            out.push(format!("sim_cycles               {}", self.cycles));
            out.push(format!("sim_freq                 {khz:.2} kHz"));
            out.push(format!("sim_fetched              {}", self.fetched));
            out.push(format!("sim_insts                {}", self.retired));
            out.push(format!("sim_cpi                  {:.4}", self.cpi()));
            out.push("----------------------------------------------------------".to_string());
        }
        if want("pipeline") {
            out.push("PIPELINE".to_string());
            out.push(format!("  bubbles                {}", self.bubbles));
            out.push(format!("  stalls.load_use        {}", self.load_use_stalls));
            out.push(format!("  stalls.hilo            {}", self.hilo_stalls));
            out.push(format!("  stalls.operand         {}", self.operand_stalls));
            out.push("----------------------------------------------------------".to_string());
        }
        if want("instruction_mix") {
            out.push("INSTRUCTION MIX".to_string());
            for (name, n) in [
                ("op.branch", self.cond_branches),
                ("op.branch_taken", self.taken_branches),
                ("op.jal", self.jal),
                ("op.jr", self.jr),
                ("op.load", self.loads),
                ("op.store", self.stores),
                ("op.fp_move", self.fp_moves),
                ("op.syscall", self.syscalls),
            ] {
                out.push(format!("  {name:<22} {n} ({:.2}%)", pct(n)));
            }
        }
        out.push("==========================================================".to_string());
        out.join("\n")
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        println!("{}", self.report(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
