//! Emulated System Calls.
//!
//! A minimal MIPS o32 Linux syscall layer, enough to run freestanding test
//! programs. The syscall number is in `$v0` and arguments in `$a0`-`$a2`:
//!
//! | `$v0` | call         | behaviour                                          |
//! |-------|--------------|----------------------------------------------------|
//! | 4001  | `exit`       | request exit with `$a0`                            |
//! | 4004  | `write`      | write `$a2` bytes at `$a1` to fd `$a0` (1 or 2)    |
//! | 4246  | `exit_group` | request exit with `$a0`                            |
//!
//! Results follow the o32 convention: `$v0` holds the value and `$a3` is set on
//! failure. Anything else fails with `ENOSYS`.

use std::io::{self, Stderr, Stdout, Write};

use tracing::{debug, warn};

use crate::common::{Result, SimError};
use crate::common::constants::WORD64_ALIGN_MASK;
use crate::core::Cpu;
use crate::core::cpu::trap::SyscallHandler;
use crate::isa::abi;
use crate::soc::memory::get_byte;

/// `exit(status)`.
pub const SYS_EXIT: u32 = 4001;
/// `write(fd, buf, count)`.
pub const SYS_WRITE: u32 = 4004;
/// `exit_group(status)`.
pub const SYS_EXIT_GROUP: u32 = 4246;

/// Bad file descriptor.
pub const EBADF: u32 = 9;
/// Function not implemented.
pub const ENOSYS: u32 = 89;

/// Largest slice of guest memory copied to the host per `write` call on the sink.
pub const WRITE_CHUNK: usize = 4096;

const FD_STDOUT: u32 = 1;
const FD_STDERR: u32 = 2;

/// Syscall emulation writing program output to two host streams.
#[derive(Debug)]
pub struct EmulatedSyscalls<O, E> {
    stdout: O,
    stderr: E,
}

impl EmulatedSyscalls<Stdout, Stderr> {
    /// Emulation bound to the host's standard output and error.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> EmulatedSyscalls<O, E> {
    /// Emulation writing fd 1 to `stdout` and fd 2 to `stderr`.
    pub const fn new(stdout: O, stderr: E) -> Self {
        Self { stdout, stderr }
    }

    /// Stream receiving fd 1.
    pub const fn stdout(&self) -> &O {
        &self.stdout
    }

    /// Stream receiving fd 2.
    pub const fn stderr(&self) -> &E {
        &self.stderr
    }

    fn write(&mut self, cpu: &mut Cpu) -> Result<()> {
        let fd = cpu.regs.read(abi::REG_A0);
        let buf = cpu.regs.read(abi::REG_A1);
        let len = cpu.regs.read(abi::REG_A2);

        let sink: &mut dyn Write = match fd {
            FD_STDOUT => &mut self.stdout,
            FD_STDERR => &mut self.stderr,
            _ => {
                cpu.syscall_return(EBADF, true);
                return Ok(());
            }
        };

        let mut chunk = Vec::with_capacity(WRITE_CHUNK.min(len as usize));
        let mut addr = buf;
        let mut remaining = len;
        while remaining > 0 {
            chunk.clear();
            let take = remaining.min(WRITE_CHUNK as u32);
            for _ in 0..take {
                chunk.push(get_byte(addr, cpu.memory.read(addr & WORD64_ALIGN_MASK)) as u8);
                addr = addr.wrapping_add(1);
            }
            sink.write_all(&chunk)?;
            remaining -= take;
        }
        sink.flush()?;

        cpu.syscall_return(len, false);
        Ok(())
    }
}

impl<O: Write, E: Write> SyscallHandler for EmulatedSyscalls<O, E> {
    fn handle(&mut self, cpu: &mut Cpu, inst: u32) -> Result<()> {
        let number = cpu.regs.read(abi::REG_V0);
        match number {
            SYS_EXIT | SYS_EXIT_GROUP => {
                let code = cpu.regs.read(abi::REG_A0);
                debug!(code, "exit requested");
                cpu.request_exit(code);
                Ok(())
            }
            SYS_WRITE => self.write(cpu).map_err(|e| match e {
                SimError::Io(err) => SimError::Syscall {
                    number,
                    pc: cpu.wb.pc,
                    reason: err.to_string(),
                },
                other => other,
            }),
            _ => {
                warn!(number, "unsupported syscall {inst:#010x}");
                cpu.syscall_return(ENOSYS, true);
                Ok(())
            }
        }
    }
}
