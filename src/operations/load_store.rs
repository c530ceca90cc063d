use crate::fault::Fault;
use crate::instruction::Instruction;
use crate::math::add_unsigned;
use crate::memory::Memory;
use crate::Processor;

impl<M: Memory> Processor<M> {
    /// Effective address of an I-form memory access
    fn effective_address(&self, instruction: Instruction) -> u32 {
        add_unsigned(
            self.registers.get(instruction.s_register()),
            instruction.immediate() as i32,
        )
    }

    /// Check alignment and read a span for a load-family instruction.
    pub(crate) fn load(
        &mut self,
        instruction: Instruction,
        offset: i32,
        align: u32,
        data: &mut [u8],
    ) -> Result<(), Fault> {
        let address = add_unsigned(self.effective_address(instruction), offset);
        if address % align != 0 {
            return Err(Fault::InvalidAlignment);
        }

        self.tracer.trace(
            3,
            format_args!(
                "${} = mem[0x{:x} : 0x{:x}]",
                instruction.t_register(),
                address,
                address.wrapping_add(data.len() as u32 - 1)
            ),
        );
        self.memory.read(address, data)
    }

    /// Check alignment and write a span for a store-family instruction.
    pub(crate) fn store(
        &mut self,
        instruction: Instruction,
        offset: i32,
        align: u32,
        data: &[u8],
    ) -> Result<(), Fault> {
        let address = add_unsigned(self.effective_address(instruction), offset);
        if address % align != 0 {
            return Err(Fault::InvalidAlignment);
        }

        self.tracer.trace(
            3,
            format_args!(
                "mem[0x{:x} : 0x{:x}] = ${}",
                address,
                address.wrapping_add(data.len() as u32 - 1),
                instruction.t_register()
            ),
        );
        self.memory.write(address, data)
    }

    /// LB and LBU; opcode bit 2 selects the zero-extending form
    pub(crate) fn op_load_byte(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let mut byte = [0];
        self.load(instruction, 0, 1, &mut byte)?;

        let value = if instruction.op_code() & 4 != 0 {
            byte[0] as u32
        } else {
            byte[0] as i8 as i32 as u32
        };
        self.set_reg(instruction.t_register(), value);
        self.advance_program_counter();
        Ok(())
    }

    /// LH and LHU; opcode bit 2 selects the zero-extending form
    pub(crate) fn op_load_half(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let mut half = [0; 2];
        self.load(instruction, 0, 2, &mut half)?;

        let half = u16::from_be_bytes(half);
        let value = if instruction.op_code() & 4 != 0 {
            half as u32
        } else {
            half as i16 as i32 as u32
        };
        self.set_reg(instruction.t_register(), value);
        self.advance_program_counter();
        Ok(())
    }

    /// Load word
    pub(crate) fn op_lw(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let mut word = [0; 4];
        self.load(instruction, 0, 4, &mut word)?;

        self.set_reg(instruction.t_register(), u32::from_be_bytes(word));
        self.advance_program_counter();
        Ok(())
    }

    /// Load word left: a two-byte window at the effective address replaces
    /// the upper half of the destination register.
    pub(crate) fn op_lwl(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let mut half = [0; 2];
        self.load(instruction, 0, 1, &mut half)?;

        let value = u16::from_be_bytes(half) as u32;
        let old = self.registers.get(instruction.t_register());
        self.set_reg(instruction.t_register(), (old & 0x0000FFFF) | value << 16);
        self.advance_program_counter();
        Ok(())
    }

    /// Load word right: a two-byte window ending at the effective address
    /// replaces the lower half of the destination register.
    pub(crate) fn op_lwr(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let mut half = [0; 2];
        self.load(instruction, -1, 1, &mut half)?;

        let value = u16::from_be_bytes(half) as u32;
        let old = self.registers.get(instruction.t_register());
        self.set_reg(instruction.t_register(), (old & 0xFFFF0000) | value);
        self.advance_program_counter();
        Ok(())
    }

    /// Store byte
    pub(crate) fn op_sb(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let byte = [self.registers.get(instruction.t_register()) as u8];
        self.store(instruction, 0, 1, &byte)?;
        self.advance_program_counter();
        Ok(())
    }

    /// Store half word
    pub(crate) fn op_sh(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let half = (self.registers.get(instruction.t_register()) as u16).to_be_bytes();
        self.store(instruction, 0, 2, &half)?;
        self.advance_program_counter();
        Ok(())
    }

    /// Store word
    pub(crate) fn op_sw(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let word = self.registers.get(instruction.t_register()).to_be_bytes();
        self.store(instruction, 0, 4, &word)?;
        self.advance_program_counter();
        Ok(())
    }

    /// Store word left: the upper half of the register goes to a two-byte
    /// window at the effective address.
    pub(crate) fn op_swl(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let half = ((self.registers.get(instruction.t_register()) >> 16) as u16).to_be_bytes();
        self.store(instruction, 0, 1, &half)?;
        self.advance_program_counter();
        Ok(())
    }

    /// Store word right: the lower half of the register goes to a two-byte
    /// window ending at the effective address.
    pub(crate) fn op_swr(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let half = (self.registers.get(instruction.t_register()) as u16).to_be_bytes();
        self.store(instruction, -1, 1, &half)?;
        self.advance_program_counter();
        Ok(())
    }
}
