//! Program Loader.
//!
//! This module places a program in memory and reports where execution starts. It performs:
//! 1. **File reading:** Reads the program image from disk.
//! 2. **ELF loading:** Copies every loadable segment of an ELF32 big-endian MIPS
//!    executable to its virtual address and returns the entry point.
//! 3. **Raw loading:** Copies a flat big-endian image to a base address, which is
//!    also the entry point.
//!
//! Bytes covered by a segment's memory size but not its file size are left as
//! they are; fresh memory reads as zero.

use std::fs;
use std::path::Path;

use object::elf;
use object::read::elf::ElfFile32;
use object::{Endianness, Object, ObjectSegment};
use tracing::debug;

use crate::common::{Result, SimError};
use crate::soc::Memory;

/// ELF magic number.
const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// How to interpret a program image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// ELF32 big-endian MIPS executable.
    Elf,
    /// Flat image loaded at the given base address.
    Raw {
        /// Load address and entry point.
        base: u32,
    },
}

/// Reads a program file from disk.
///
/// # Errors
///
/// Returns `SimError::Io` if the file cannot be read.
pub fn load_binary(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Returns `true` if `data` starts with the ELF magic number.
pub fn is_elf(data: &[u8]) -> bool {
    data.starts_with(ELF_MAGIC)
}

/// Loads an image into memory.
///
/// # Returns
///
/// The entry point.
///
/// # Errors
///
/// Returns `SimError::Load` for malformed or non-MIPS ELF files.
pub fn load_image(data: &[u8], format: ImageFormat, mem: &mut dyn Memory) -> Result<u32> {
    match format {
        ImageFormat::Elf => load_elf(data, mem),
        ImageFormat::Raw { base } => Ok(load_raw(data, base, mem)),
    }
}

/// Copies a flat image to `base` and returns `base` as the entry point.
pub fn load_raw(data: &[u8], base: u32, mem: &mut dyn Memory) -> u32 {
    debug!(base, len = data.len(), "loading raw image");
    mem.load_bytes(base, data);
    base
}

/// Loads the `PT_LOAD` segments of an ELF32 big-endian MIPS executable.
///
/// # Errors
///
/// Returns `SimError::Load` if the file does not parse, is little-endian, or
/// targets another machine.
pub fn load_elf(data: &[u8], mem: &mut dyn Memory) -> Result<u32> {
    let file = ElfFile32::<Endianness>::parse(data).map_err(|e| SimError::Load(e.to_string()))?;

    if file.is_little_endian() {
        return Err(SimError::Load("little-endian ELF; expected big-endian MIPS".into()));
    }
    let machine = file.elf_header().e_machine.get(file.endian());
    if machine != elf::EM_MIPS {
        return Err(SimError::Load(format!("unsupported ELF machine {machine}")));
    }

    for segment in file.segments() {
        let bytes = segment.data().map_err(|e| SimError::Load(e.to_string()))?;
        let addr = u32::try_from(segment.address())
            .map_err(|_| SimError::Load(format!("segment address {:#x} out of range", segment.address())))?;
        debug!(addr, len = bytes.len(), "loading segment");
        mem.load_bytes(addr, bytes);
    }

    u32::try_from(file.entry()).map_err(|_| SimError::Load("entry point out of range".into()))
}
