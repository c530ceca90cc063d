use crate::constants::REG_RA;
use crate::fault::Fault;
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::Processor;

impl<M: Memory> Processor<M> {
    /// J and JAL, selected by the low opcode bit. The link value names the
    /// instruction after the delay slot.
    pub(crate) fn op_jump(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let address = instruction.real_address(self.program_counter);
        let return_address = self.jump_to(address);

        if instruction.op_code() & 1 != 0 {
            self.set_reg(REG_RA, return_address);
        }
        Ok(())
    }
}
