use crate::config::Config;
use crate::constants::*;
use crate::coprocessor::Coprocessor;
use crate::fault::Fault;
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::trace::{DebugHandler, Tracer};
use log::debug;
use std::io::Write;

/// A MIPS-I processor core wired to an external memory device.
///
/// The core holds the architectural state (general registers, HI/LO, the
/// program counter and its delayed successor) and the configuration slots
/// (tracing, coprocessors, exception handler table). One instruction is
/// executed per [`step`](Processor::step) call; a returned fault leaves the
/// architectural state exactly as it was before the call.
#[derive(Debug)]
pub struct Processor<M> {
    pub(crate) registers: Registers,
    pub(crate) program_counter: u32,
    pub(crate) next_program_counter: u32,
    pub(crate) memory: M,
    pub(crate) config: Config,
    pub(crate) coprocessors: [Coprocessor<M>; NUM_COPROCESSORS],
    exception_handlers: [u32; NUM_EXCEPTION_HANDLERS],
    pub(crate) tracer: Tracer,
}

impl<M: Memory> Processor<M> {
    /// Create a processor bound to the given memory space, with all
    /// registers zeroed and the program counter at zero.
    ///
    /// The memory is a collaborator, not a possession: pass `&mut memory`
    /// (the trait is implemented for mutable references) to keep ownership
    /// on the caller's side.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, Config::default())
    }

    pub fn with_config(memory: M, config: Config) -> Self {
        Processor {
            registers: Registers::new(),
            program_counter: 0,
            next_program_counter: 4,
            memory,
            config,
            coprocessors: Default::default(),
            exception_handlers: [0; NUM_EXCEPTION_HANDLERS],
            tracer: Tracer::new(),
        }
    }

    /// Reset as if just created: registers, HI/LO, the program counter, the
    /// coprocessor slots and the exception handler table are cleared. The
    /// memory binding and the tracing configuration survive.
    pub fn reset(&mut self) {
        debug!("Processor reset");
        self.registers.clear();
        self.program_counter = 0;
        self.next_program_counter = 4;
        self.coprocessors = Default::default();
        self.exception_handlers = [0; NUM_EXCEPTION_HANDLERS];
    }

    /// Current value of one of the 32 general purpose registers.
    pub fn register(&self, index: u8) -> Result<u32, Fault> {
        if index >= 32 {
            return Err(Fault::InvalidArgument);
        }

        Ok(self.registers.get(index))
    }

    /// Modify one of the 32 general purpose registers. A write to register
    /// zero is discarded.
    pub fn set_register(&mut self, index: u8, value: u32) -> Result<(), Fault> {
        if index >= 32 {
            return Err(Fault::InvalidArgument);
        }

        self.set_reg(index, value);
        Ok(())
    }

    /// Address of the next instruction to execute
    pub fn program_counter(&self) -> u32 {
        self.program_counter
    }

    /// Set the address of the next instruction to execute. The delayed
    /// successor is re-established at `pc + 4`.
    pub fn set_program_counter(&mut self, pc: u32) {
        self.program_counter = pc;
        self.next_program_counter = pc.wrapping_add(4);
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Set the trace verbosity and the byte sink the lines go to. Level
    /// zero is silent. With no sink (and no handler) installed, a non-zero
    /// level writes to standard output.
    pub fn set_debug_level(&mut self, level: u32, sink: Option<Box<dyn Write>>) {
        self.tracer.set_level(level, sink);
    }

    /// Install a callback that receives trace lines instead of the sink.
    pub fn set_debug_handler(&mut self, handler: Option<DebugHandler>) {
        self.tracer.set_handler(handler);
    }

    /// Assign a coprocessor to one of the four slots.
    pub fn set_coprocessor(
        &mut self,
        index: usize,
        coprocessor: Coprocessor<M>,
    ) -> Result<(), Fault> {
        if index >= NUM_COPROCESSORS {
            return Err(Fault::InvalidArgument);
        }

        debug!("Installing coprocessor {}: {:?}", index, coprocessor);
        self.coprocessors[index] = coprocessor;
        Ok(())
    }

    /// Record a handler address for an architectural exception kind. The
    /// table is retained for the caller's use; raising a fault never
    /// transfers control inside the simulator.
    pub fn set_exception_handler(&mut self, kind: Fault, address: u32) -> Result<(), Fault> {
        let index = kind.exception_index().ok_or(Fault::InvalidArgument)?;
        self.exception_handlers[index] = address;
        Ok(())
    }

    /// Advance the processor by one instruction.
    ///
    /// Fetches four bytes at the program counter, converts them from the
    /// simulated big-endian order, dispatches on the opcode (and function
    /// or rt field) and runs the handler. On any fault the architectural
    /// state is left untouched, so the caller can inspect what went wrong
    /// and a repeated call returns the same fault.
    pub fn step(&mut self) -> Result<(), Fault> {
        self.tracer
            .trace(3, format_args!("PC: 0x{:08x}", self.program_counter));

        if self.program_counter % 4 != 0 {
            return self.fault(Fault::InvalidAlignment);
        }

        let mut word = [0; 4];
        if let Err(error) = self.memory.read(self.program_counter, &mut word) {
            return self.fault(error);
        }
        let instruction = Instruction(u32::from_be_bytes(word));

        if self.tracer.enabled(2) {
            if let Some(mnemonic) = instruction.mnemonic() {
                self.tracer.trace(2, format_args!("{}", mnemonic));
            }
        }

        match self.execute(instruction) {
            Ok(()) => Ok(()),
            Err(error) => self.fault(error),
        }
    }

    /// Log a fault at level 1 and pass it on.
    fn fault(&mut self, error: Fault) -> Result<(), Fault> {
        self.tracer.trace(1, format_args!("Exception: {}", error));
        Err(error)
    }

    pub(crate) fn execute(&mut self, instruction: Instruction) -> Result<(), Fault> {
        match instruction.op_code() {
            OP_R_TYPE => self.execute_r_type(instruction),
            OP_REGIMM | OP_BLEZ | OP_BGTZ => self.op_branch_zero(instruction),
            OP_J | OP_JAL => self.op_jump(instruction),
            OP_BEQ | OP_BNE => self.op_branch_compare(instruction),
            OP_ADDI | OP_ADDIU => self.op_add_immediate(instruction),
            OP_SLTI | OP_SLTIU => self.op_set_less_than_immediate(instruction),
            OP_ANDI | OP_ORI | OP_XORI => self.op_bitwise_immediate(instruction),
            OP_LUI => self.op_lui(instruction),
            OP_COP0..=OP_COP3 => self.op_copz(instruction),
            OP_LB | OP_LBU => self.op_load_byte(instruction),
            OP_LH | OP_LHU => self.op_load_half(instruction),
            OP_LW => self.op_lw(instruction),
            OP_LWL => self.op_lwl(instruction),
            OP_LWR => self.op_lwr(instruction),
            OP_SB => self.op_sb(instruction),
            OP_SH => self.op_sh(instruction),
            OP_SW => self.op_sw(instruction),
            OP_SWL => self.op_swl(instruction),
            OP_SWR => self.op_swr(instruction),
            OP_LWC0..=OP_LWC3 => self.op_lwcz(instruction),
            OP_SWC0..=OP_SWC3 => self.op_swcz(instruction),
            _ => Err(Fault::InvalidInstruction),
        }
    }

    /// R-type instructions share opcode zero and dispatch on the function
    /// field.
    fn execute_r_type(&mut self, instruction: Instruction) -> Result<(), Fault> {
        match instruction.function() {
            FUNCTION_SLL => self.op_sll(instruction),
            FUNCTION_SRL => self.op_srl(instruction),
            FUNCTION_SRA => self.op_sra(instruction),
            FUNCTION_SLLV => self.op_sllv(instruction),
            FUNCTION_SRLV => self.op_srlv(instruction),
            FUNCTION_SRAV => self.op_srav(instruction),
            FUNCTION_JR => self.op_jr(instruction),
            FUNCTION_JALR => self.op_jalr(instruction),
            FUNCTION_SYSCALL => Err(Fault::SystemCall),
            FUNCTION_BREAK => Err(Fault::Break),
            FUNCTION_MFHI => self.op_mfhi(instruction),
            FUNCTION_MTHI => self.op_mthi(instruction),
            FUNCTION_MFLO => self.op_mflo(instruction),
            FUNCTION_MTLO => self.op_mtlo(instruction),
            FUNCTION_MULT => self.op_mult(instruction),
            FUNCTION_MULTU => self.op_multu(instruction),
            FUNCTION_DIV => self.op_div(instruction),
            FUNCTION_DIVU => self.op_divu(instruction),
            FUNCTION_ADD => self.op_add(instruction),
            FUNCTION_ADDU => self.op_addu(instruction),
            FUNCTION_SUB => self.op_sub(instruction),
            FUNCTION_SUBU => self.op_subu(instruction),
            FUNCTION_AND => self.op_and(instruction),
            FUNCTION_OR => self.op_or(instruction),
            FUNCTION_XOR => self.op_xor(instruction),
            FUNCTION_NOR => self.op_nor(instruction),
            FUNCTION_SLT => self.op_slt(instruction),
            FUNCTION_SLTU => self.op_sltu(instruction),
            _ => Err(Fault::InvalidInstruction),
        }
    }

    /// Set a register, tracing the write.
    pub(crate) fn set_reg(&mut self, index: u8, value: u32) {
        self.registers.set(index, value);
        self.tracer.trace(
            3,
            format_args!("${} = {} (0x{:x})", index, value as i32, value),
        );
    }

    /// Move to the next instruction in sequence.
    pub(crate) fn advance_program_counter(&mut self) {
        self.program_counter = self.next_program_counter;
        self.next_program_counter = self.program_counter.wrapping_add(4);
    }

    /// Schedule a transfer to `target` once the delay slot has executed,
    /// and return the link address (the instruction after the slot).
    pub(crate) fn jump_to(&mut self, target: u32) -> u32 {
        let return_address = self.program_counter.wrapping_add(8);
        self.tracer.trace(3, format_args!("$pcN = 0x{:x}", target));

        if self.config.disable_delay_slots {
            self.program_counter = target;
            self.next_program_counter = target.wrapping_add(4);
        } else {
            self.program_counter = self.next_program_counter;
            self.next_program_counter = target;
        }

        return_address
    }
}
