use crate::fault::Fault;
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::Processor;

impl<M: Memory> Processor<M> {
    /// Shift left logical
    pub(crate) fn op_sll(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let value = self.registers.get(instruction.t_register()) << instruction.shift_amount();
        self.set_reg(instruction.d_register(), value);
        self.advance_program_counter();
        Ok(())
    }

    /// Shift right logical
    pub(crate) fn op_srl(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let value = self.registers.get(instruction.t_register()) >> instruction.shift_amount();
        self.set_reg(instruction.d_register(), value);
        self.advance_program_counter();
        Ok(())
    }

    /// Shift right arithmetic, filling from the sign bit
    pub(crate) fn op_sra(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let value =
            (self.registers.get(instruction.t_register()) as i32) >> instruction.shift_amount();
        self.set_reg(instruction.d_register(), value as u32);
        self.advance_program_counter();
        Ok(())
    }

    /// Shift left logical variable
    pub(crate) fn op_sllv(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let amount = self.variable_shift_amount(instruction);
        let value = self.registers.get(instruction.t_register()) << amount;
        self.set_reg(instruction.d_register(), value);
        self.advance_program_counter();
        Ok(())
    }

    /// Shift right logical variable
    pub(crate) fn op_srlv(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let amount = self.variable_shift_amount(instruction);
        let value = self.registers.get(instruction.t_register()) >> amount;
        self.set_reg(instruction.d_register(), value);
        self.advance_program_counter();
        Ok(())
    }

    /// Shift right arithmetic variable
    pub(crate) fn op_srav(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let amount = self.variable_shift_amount(instruction);
        let value = (self.registers.get(instruction.t_register()) as i32) >> amount;
        self.set_reg(instruction.d_register(), value as u32);
        self.advance_program_counter();
        Ok(())
    }

    /// The variable shift forms use the low five bits of $s
    fn variable_shift_amount(&self, instruction: Instruction) -> u32 {
        self.registers.get(instruction.s_register()) & 0x1F
    }

    /// Jump register
    pub(crate) fn op_jr(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let address = self.registers.get(instruction.s_register());
        if address % 4 != 0 {
            return Err(Fault::InvalidAlignment);
        }

        self.jump_to(address);
        Ok(())
    }

    /// Jump and link register
    pub(crate) fn op_jalr(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let address = self.registers.get(instruction.s_register());
        if address % 4 != 0 {
            return Err(Fault::InvalidAlignment);
        }

        let return_register = instruction.d_register();
        let return_address = self.jump_to(address);
        self.set_reg(return_register, return_address);
        Ok(())
    }

    /// Move from HI
    pub(crate) fn op_mfhi(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let value = self.registers.hi_register;
        self.set_reg(instruction.d_register(), value);
        self.advance_program_counter();
        Ok(())
    }

    /// Move to HI
    pub(crate) fn op_mthi(&mut self, instruction: Instruction) -> Result<(), Fault> {
        self.registers.hi_register = self.registers.get(instruction.s_register());
        self.advance_program_counter();
        Ok(())
    }

    /// Move from LO
    pub(crate) fn op_mflo(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let value = self.registers.lo_register;
        self.set_reg(instruction.d_register(), value);
        self.advance_program_counter();
        Ok(())
    }

    /// Move to LO
    pub(crate) fn op_mtlo(&mut self, instruction: Instruction) -> Result<(), Fault> {
        self.registers.lo_register = self.registers.get(instruction.s_register());
        self.advance_program_counter();
        Ok(())
    }

    /// Multiply, 64-bit signed product into HI:LO
    pub(crate) fn op_mult(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let s = self.registers.get(instruction.s_register()) as i32;
        let t = self.registers.get(instruction.t_register()) as i32;
        self.registers.set_hi_lo((s as i64 * t as i64) as u64);
        self.advance_program_counter();
        Ok(())
    }

    /// Multiply unsigned
    pub(crate) fn op_multu(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let s = self.registers.get(instruction.s_register()) as u64;
        let t = self.registers.get(instruction.t_register()) as u64;
        self.registers.set_hi_lo(s * t);
        self.advance_program_counter();
        Ok(())
    }

    /// Divide, quotient into LO and remainder into HI. Division by zero and
    /// i32::MIN / -1 write zero to both and do not fault.
    pub(crate) fn op_div(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let s = self.registers.get(instruction.s_register()) as i32;
        let t = self.registers.get(instruction.t_register()) as i32;

        let (quotient, remainder) = if t == 0 || (s == i32::MIN && t == -1) {
            (0, 0)
        } else {
            (s / t, s % t)
        };

        self.registers.lo_register = quotient as u32;
        self.registers.hi_register = remainder as u32;
        self.advance_program_counter();
        Ok(())
    }

    /// Divide unsigned. Division by zero writes zero to HI and LO.
    pub(crate) fn op_divu(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let s = self.registers.get(instruction.s_register());
        let t = self.registers.get(instruction.t_register());

        let (quotient, remainder) = if t == 0 { (0, 0) } else { (s / t, s % t) };

        self.registers.lo_register = quotient;
        self.registers.hi_register = remainder;
        self.advance_program_counter();
        Ok(())
    }

    /// Add (with overflow check)
    pub(crate) fn op_add(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let a = self.registers.get(instruction.s_register()) as i32;
        let b = self.registers.get(instruction.t_register()) as i32;
        let value = a.checked_add(b).ok_or(Fault::ArithmeticOverflow)?;
        self.set_reg(instruction.d_register(), value as u32);
        self.advance_program_counter();
        Ok(())
    }

    /// Add unsigned (no overflow check)
    pub(crate) fn op_addu(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        self.set_reg(instruction.d_register(), a.wrapping_add(b));
        self.advance_program_counter();
        Ok(())
    }

    /// Subtract (with overflow check)
    pub(crate) fn op_sub(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let a = self.registers.get(instruction.s_register()) as i32;
        let b = self.registers.get(instruction.t_register()) as i32;
        let value = a.checked_sub(b).ok_or(Fault::ArithmeticOverflow)?;
        self.set_reg(instruction.d_register(), value as u32);
        self.advance_program_counter();
        Ok(())
    }

    /// Subtract unsigned (no overflow check)
    pub(crate) fn op_subu(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        self.set_reg(instruction.d_register(), a.wrapping_sub(b));
        self.advance_program_counter();
        Ok(())
    }

    /// Bitwise and
    pub(crate) fn op_and(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        self.set_reg(instruction.d_register(), a & b);
        self.advance_program_counter();
        Ok(())
    }

    /// Bitwise or
    pub(crate) fn op_or(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        self.set_reg(instruction.d_register(), a | b);
        self.advance_program_counter();
        Ok(())
    }

    /// Bitwise exclusive or
    pub(crate) fn op_xor(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        self.set_reg(instruction.d_register(), a ^ b);
        self.advance_program_counter();
        Ok(())
    }

    /// Bitwise not-or
    pub(crate) fn op_nor(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        self.set_reg(instruction.d_register(), !(a | b));
        self.advance_program_counter();
        Ok(())
    }

    /// Set if less than (signed)
    pub(crate) fn op_slt(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let s = self.registers.get(instruction.s_register()) as i32;
        let t = self.registers.get(instruction.t_register()) as i32;
        self.set_reg(instruction.d_register(), (s < t) as u32);
        self.advance_program_counter();
        Ok(())
    }

    /// Set if less than (unsigned)
    pub(crate) fn op_sltu(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let s = self.registers.get(instruction.s_register());
        let t = self.registers.get(instruction.t_register());
        self.set_reg(instruction.d_register(), (s < t) as u32);
        self.advance_program_counter();
        Ok(())
    }
}
