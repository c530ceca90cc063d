use crate::fault::Fault;
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::Processor;

impl<M: Memory> Processor<M> {
    /// General coprocessor operation: hand the instruction word to the
    /// installed callable.
    pub(crate) fn op_copz(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let index = (instruction.op_code() & 3) as usize;
        let cop = self.coprocessors[index]
            .cop
            .ok_or(Fault::CoprocessorUnusable)?;

        self.tracer
            .trace(3, format_args!("CP{}: 0x{:x}", index, instruction.0 & 0x03FFFFFF));
        cop(self, instruction.0)?;
        self.advance_program_counter();
        Ok(())
    }

    /// Load word to a coprocessor: an aligned four-byte read, handed to the
    /// installed hook.
    pub(crate) fn op_lwcz(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let index = (instruction.op_code() & 3) as usize;
        let lwc = self.coprocessors[index]
            .lwc
            .ok_or(Fault::CoprocessorUnusable)?;

        let mut word = [0; 4];
        self.load(instruction, 0, 4, &mut word)?;
        lwc(self, instruction.t_register(), u32::from_be_bytes(word))?;
        self.advance_program_counter();
        Ok(())
    }

    /// Store word from a coprocessor: the installed hook supplies the word,
    /// which goes out as an aligned four-byte write.
    pub(crate) fn op_swcz(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let index = (instruction.op_code() & 3) as usize;
        let swc = self.coprocessors[index]
            .swc
            .ok_or(Fault::CoprocessorUnusable)?;

        let word = swc(self, instruction.t_register())?;
        self.store(instruction, 0, 4, &word.to_be_bytes())?;
        self.advance_program_counter();
        Ok(())
    }
}
