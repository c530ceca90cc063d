use mips_cpu::constants::*;
use mips_cpu::{Fault, Memory, PagedMemory, Processor};

mod common;
use common::{itype, processor_with_program};

/// Place the bytes at address 4, after the instruction word
fn with_data(program: u32, data: &[u8]) -> Processor<PagedMemory> {
    let mut cpu = processor_with_program(&[program]);
    cpu.memory_mut().write(4, data).unwrap();
    cpu
}

#[test]
fn lb_sign_extends() {
    let mut cpu = with_data(itype(OP_LB, 1, 3, 0), &[0x21, 0x43, 0x65, 0x87]);
    cpu.set_register(1, 7).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.register(3).unwrap(), 0xFFFF_FF87);
}

#[test]
fn lbu_zero_extends() {
    let mut cpu = with_data(itype(OP_LBU, 1, 3, 0), &[0x21, 0x43, 0x65, 0x87]);
    cpu.set_register(1, 7).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.register(3).unwrap(), 0x0000_0087);
}

#[test]
fn lh_sign_extends_the_big_endian_half() {
    let mut cpu = with_data(itype(OP_LH, 1, 3, 0), &[0x87, 0x65, 0x43, 0x21]);
    cpu.set_register(1, 4).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.register(3).unwrap(), 0xFFFF_8765);
}

#[test]
fn lhu_zero_extends_the_big_endian_half() {
    let mut cpu = with_data(itype(OP_LHU, 1, 3, 0), &[0x87, 0x65, 0x43, 0x21]);
    cpu.set_register(1, 4).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.register(3).unwrap(), 0x0000_8765);
}

#[test]
fn lw_reads_big_endian() {
    let mut cpu = with_data(itype(OP_LW, 1, 3, 0), &[0x21, 0x43, 0x65, 0x87]);
    cpu.set_register(1, 4).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.register(3).unwrap(), 0x2143_6587);
}

#[test]
fn negative_offset_forms_the_effective_address() {
    // lw $v1, -4($at) with $at = 8
    let mut cpu = with_data(itype(OP_LW, 1, 3, 0xFFFC), &[0x21, 0x43, 0x65, 0x87]);
    cpu.set_register(1, 8).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.register(3).unwrap(), 0x2143_6587);
}

#[test]
fn sw_then_lw_round_trips() {
    let mut cpu = processor_with_program(&[itype(OP_SW, 1, 3, 0), itype(OP_LW, 1, 4, 0)]);
    cpu.set_register(1, 0x100).unwrap();
    cpu.set_register(3, 0x1234_5678).unwrap();

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.register(4).unwrap(), 0x1234_5678);

    // The word lands big-endian in memory
    let mut bytes = [0; 4];
    cpu.memory_mut().read(0x100, &mut bytes).unwrap();
    assert_eq!(bytes, [0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn sh_then_lh_round_trips_with_sign() {
    let mut cpu = processor_with_program(&[itype(OP_SH, 1, 3, 0), itype(OP_LH, 1, 4, 0)]);
    cpu.set_register(1, 0x100).unwrap();
    cpu.set_register(3, 0x1234_8765).unwrap();

    cpu.step().unwrap();
    cpu.step().unwrap();

    // Only the low half is stored; the load sign-extends it
    assert_eq!(cpu.register(4).unwrap(), 0xFFFF_8765);
}

#[test]
fn sb_writes_only_the_low_byte() {
    let mut cpu = with_data(itype(OP_SB, 1, 3, 0), &[0x11, 0x22, 0x33, 0x44]);
    cpu.set_register(1, 5).unwrap();
    cpu.set_register(3, 0x1234_5678).unwrap();

    cpu.step().unwrap();

    let mut bytes = [0; 4];
    cpu.memory_mut().read(4, &mut bytes).unwrap();
    assert_eq!(bytes, [0x11, 0x78, 0x33, 0x44]);
}

#[test]
fn lw_requires_word_alignment() {
    let mut cpu = with_data(itype(OP_LW, 1, 3, 0), &[0x21, 0x43, 0x65, 0x87]);
    cpu.set_register(1, 6).unwrap();
    cpu.set_register(3, 99).unwrap();

    assert_eq!(cpu.step(), Err(Fault::InvalidAlignment));
    assert_eq!(cpu.register(3).unwrap(), 99);
    assert_eq!(cpu.program_counter(), 0);
}

#[test]
fn lh_requires_half_alignment() {
    let mut cpu = with_data(itype(OP_LH, 1, 3, 0), &[0x21, 0x43, 0x65, 0x87]);
    cpu.set_register(1, 5).unwrap();

    assert_eq!(cpu.step(), Err(Fault::InvalidAlignment));
}

#[test]
fn sh_requires_half_alignment() {
    let mut cpu = processor_with_program(&[itype(OP_SH, 1, 3, 0)]);
    cpu.set_register(1, 0x101).unwrap();

    assert_eq!(cpu.step(), Err(Fault::InvalidAlignment));
    assert_eq!(cpu.program_counter(), 0);
}

#[test]
fn lwl_replaces_the_upper_half() {
    let mut cpu = with_data(itype(OP_LWL, 1, 3, 0), &[0x11, 0x22, 0x33, 0x44]);
    cpu.set_register(1, 5).unwrap();
    cpu.set_register(3, 0xAABB_CCDD).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.register(3).unwrap(), 0x2233_CCDD);
}

#[test]
fn lwr_replaces_the_lower_half() {
    let mut cpu = with_data(itype(OP_LWR, 1, 3, 0), &[0x11, 0x22, 0x33, 0x44]);
    cpu.set_register(1, 5).unwrap();
    cpu.set_register(3, 0xAABB_CCDD).unwrap();

    // The window ends at the effective address
    cpu.step().unwrap();
    assert_eq!(cpu.register(3).unwrap(), 0xAABB_1122);
}

#[test]
fn swl_stores_the_upper_half() {
    let mut cpu = with_data(itype(OP_SWL, 1, 3, 0), &[0x11, 0x22, 0x33, 0x44]);
    cpu.set_register(1, 5).unwrap();
    cpu.set_register(3, 0xAABB_CCDD).unwrap();

    cpu.step().unwrap();

    let mut bytes = [0; 4];
    cpu.memory_mut().read(4, &mut bytes).unwrap();
    assert_eq!(bytes, [0x11, 0xAA, 0xBB, 0x44]);
}

#[test]
fn swr_stores_the_lower_half() {
    let mut cpu = with_data(itype(OP_SWR, 1, 3, 0), &[0x11, 0x22, 0x33, 0x44]);
    cpu.set_register(1, 5).unwrap();
    cpu.set_register(3, 0xAABB_CCDD).unwrap();

    cpu.step().unwrap();

    let mut bytes = [0; 4];
    cpu.memory_mut().read(4, &mut bytes).unwrap();
    assert_eq!(bytes, [0xCC, 0xDD, 0x33, 0x44]);
}

/// A memory device that faults every data access, for checking that
/// collaborator faults propagate unchanged.
struct FaultingMemory {
    program: PagedMemory,
}

impl Memory for FaultingMemory {
    fn read(&mut self, address: u32, data: &mut [u8]) -> Result<(), Fault> {
        if address < 8 {
            return self.program.read(address, data);
        }

        Err(Fault::AccessViolation)
    }

    fn write(&mut self, _address: u32, _data: &[u8]) -> Result<(), Fault> {
        Err(Fault::AccessViolation)
    }
}

#[test]
fn memory_faults_propagate_and_leave_state_unchanged() {
    let mut program = PagedMemory::new();
    program
        .write(0, &itype(OP_LW, 1, 3, 0).to_be_bytes())
        .unwrap();

    let mut cpu = Processor::new(FaultingMemory { program });
    cpu.set_register(1, 0x100).unwrap();
    cpu.set_register(3, 7).unwrap();

    assert_eq!(cpu.step(), Err(Fault::AccessViolation));
    assert_eq!(cpu.register(3).unwrap(), 7);
    assert_eq!(cpu.program_counter(), 0);
}

#[test]
fn fetch_faults_propagate() {
    let program = PagedMemory::new();
    let mut cpu = Processor::new(FaultingMemory { program });
    cpu.set_program_counter(0x1000);

    assert_eq!(cpu.step(), Err(Fault::AccessViolation));
    assert_eq!(cpu.program_counter(), 0x1000);
}
