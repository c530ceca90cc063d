#![allow(dead_code)]

use mips_cpu::{Memory, PagedMemory, Processor};

/// Build a processor whose memory holds the given big-endian instruction
/// words starting at address zero.
pub fn processor_with_program(words: &[u32]) -> Processor<PagedMemory> {
    let mut memory = PagedMemory::new();
    for (i, word) in words.iter().enumerate() {
        memory.write(i as u32 * 4, &word.to_be_bytes()).unwrap();
    }

    Processor::new(memory)
}

/// Encode an R-type instruction (opcode zero)
pub fn rtype(funct: u8, s: u8, t: u8, d: u8, shamt: u8) -> u32 {
    (s as u32) << 21 | (t as u32) << 16 | (d as u32) << 11 | (shamt as u32) << 6 | funct as u32
}

/// Encode an I-type instruction
pub fn itype(op: u8, s: u8, t: u8, imm: u16) -> u32 {
    (op as u32) << 26 | (s as u32) << 21 | (t as u32) << 16 | imm as u32
}

/// Encode a J-type instruction
pub fn jtype(op: u8, target: u32) -> u32 {
    (op as u32) << 26 | (target & 0x03FF_FFFF)
}
