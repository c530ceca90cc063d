use crate::constants::{OP_BGTZ, OP_BLEZ, OP_REGIMM, REGIMM_BGEZ, REGIMM_BGEZAL, REGIMM_BLTZ, REGIMM_BLTZAL, REGIMM_LINK_BIT, REG_RA};
use crate::fault::Fault;
use crate::instruction::Instruction;
use crate::math::add_unsigned;
use crate::memory::Memory;
use crate::Processor;

impl<M: Memory> Processor<M> {
    /// BEQ and BNE, selected by the low opcode bit
    pub(crate) fn op_branch_compare(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let offset = (instruction.immediate() as i32) << 2;
        let target = add_unsigned(self.next_program_counter, offset);

        let s_value = self.registers.get(instruction.s_register());
        let t_value = self.registers.get(instruction.t_register());
        let mut taken = s_value == t_value;
        if instruction.op_code() & 1 != 0 {
            taken = !taken;
        }

        if self.tracer.enabled(3) {
            self.tracer.trace(
                3,
                format_args!(
                    "Test: ${} {}= ${} - {}",
                    instruction.s_register(),
                    if instruction.op_code() & 1 != 0 { '!' } else { '=' },
                    instruction.t_register(),
                    if taken { "TRUE" } else { "FALSE" }
                ),
            );
        }

        if taken {
            self.jump_to(target);
        } else {
            self.advance_program_counter();
        }
        Ok(())
    }

    /// The conditional branches that compare a register against zero: the
    /// REGIMM family (selected by the rt field) plus BLEZ and BGTZ. The
    /// linking forms write the return address whether or not the branch is
    /// taken.
    pub(crate) fn op_branch_zero(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let op_code = instruction.op_code();
        let rt = instruction.t_register();
        let value = self.registers.get(instruction.s_register()) as i32;

        let taken = match (op_code, rt) {
            (OP_REGIMM, REGIMM_BLTZ) | (OP_REGIMM, REGIMM_BLTZAL) => value < 0,
            (OP_REGIMM, REGIMM_BGEZ) | (OP_REGIMM, REGIMM_BGEZAL) => value >= 0,
            (OP_BLEZ, _) => value <= 0,
            (OP_BGTZ, _) => value > 0,
            _ => return Err(Fault::InvalidInstruction),
        };

        self.tracer.trace(
            3,
            format_args!(
                "Test: ${} {} - {}",
                instruction.s_register(),
                value,
                if taken { "TRUE" } else { "FALSE" }
            ),
        );

        if op_code == OP_REGIMM && rt & REGIMM_LINK_BIT != 0 {
            let return_address = self.program_counter.wrapping_add(8);
            self.set_reg(REG_RA, return_address);
        }

        let offset = (instruction.immediate() as i32) << 2;
        let target = add_unsigned(self.next_program_counter, offset);
        if taken {
            self.jump_to(target);
        } else {
            self.advance_program_counter();
        }
        Ok(())
    }

    /// ADDI and ADDIU; only ADDI traps on signed overflow
    pub(crate) fn op_add_immediate(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let value = self.registers.get(instruction.s_register());
        let immediate = instruction.immediate() as i32;

        if instruction.op_code() & 1 == 0 {
            (value as i32)
                .checked_add(immediate)
                .ok_or(Fault::ArithmeticOverflow)?;
        }

        self.set_reg(instruction.t_register(), add_unsigned(value, immediate));
        self.advance_program_counter();
        Ok(())
    }

    /// SLTI and SLTIU. Both sign-extend the immediate; SLTIU compares the
    /// result as unsigned.
    pub(crate) fn op_set_less_than_immediate(
        &mut self,
        instruction: Instruction,
    ) -> Result<(), Fault> {
        let value = self.registers.get(instruction.s_register());
        let immediate = instruction.immediate() as i32;

        let result = if instruction.op_code() & 1 != 0 {
            value < immediate as u32
        } else {
            (value as i32) < immediate
        };

        self.set_reg(instruction.t_register(), result as u32);
        self.advance_program_counter();
        Ok(())
    }

    /// ANDI, ORI and XORI. The immediate is zero-extended, unlike the
    /// arithmetic forms.
    pub(crate) fn op_bitwise_immediate(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let value = self.registers.get(instruction.s_register());
        let immediate = instruction.immediate() as u16 as u32;

        let result = match instruction.op_code() & 3 {
            0 => value & immediate,
            1 => value | immediate,
            2 => value ^ immediate,
            _ => return Err(Fault::InvalidInstruction),
        };

        self.set_reg(instruction.t_register(), result);
        self.advance_program_counter();
        Ok(())
    }

    /// Load upper immediate
    pub(crate) fn op_lui(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let value = (instruction.immediate() as u16 as u32) << 16;
        self.set_reg(instruction.t_register(), value);
        self.advance_program_counter();
        Ok(())
    }
}
