use crate::constants::*;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A MIPS instruction
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Instruction(pub u32);

impl Instruction {
    /// Get the operation code
    pub fn op_code(&self) -> u8 {
        ((self.0 & 0xFC000000) >> 26) as u8
    }

    /// Get the s register (for R and I type instructions)
    pub fn s_register(&self) -> u8 {
        ((self.0 & 0x03E00000) >> 21) as u8
    }

    /// Get the t register (for R and I type instructions)
    pub fn t_register(&self) -> u8 {
        ((self.0 & 0x001F0000) >> 16) as u8
    }

    /// Get the d register (for R type instructions)
    pub fn d_register(&self) -> u8 {
        ((self.0 & 0x0000F800) >> 11) as u8
    }

    /// Get the shift amount (for R type instructions)
    pub fn shift_amount(&self) -> u8 {
        ((self.0 & 0x000007C0) >> 6) as u8
    }

    /// Get the ALU function (for R type instructions)
    pub fn function(&self) -> u8 {
        (self.0 & 0x0000003F) as u8
    }

    /// Get the immediate value (for I type instructions). Cast to `i32` to
    /// sign-extend, or to `u16` for the zero-extending forms.
    pub fn immediate(&self) -> i16 {
        (self.0 & 0x0000FFFF) as i16
    }

    /// Get the pseudo address (for J type instructions)
    pub fn pseudo_address(&self) -> u32 {
        self.0 & 0x03FFFFFF
    }

    /// Convert the pseudo address to a full address.
    /// The first four bits are taken from the delay slot's address, and the
    /// lower two bits are zeros.
    pub fn real_address(&self, program_counter: u32) -> u32 {
        (0xF0000000 & program_counter.wrapping_add(4)) | (self.pseudo_address() << 2)
    }

    /// The instruction's mnemonic, resolved through the function or rt field
    /// where the opcode requires it. `None` for unmapped encodings.
    pub fn mnemonic(&self) -> Option<&'static str> {
        let mnemonic = match self.op_code() {
            OP_R_TYPE => match self.function() {
                FUNCTION_SLL => "sll",
                FUNCTION_SRL => "srl",
                FUNCTION_SRA => "sra",
                FUNCTION_SLLV => "sllv",
                FUNCTION_SRLV => "srlv",
                FUNCTION_SRAV => "srav",
                FUNCTION_JR => "jr",
                FUNCTION_JALR => "jalr",
                FUNCTION_SYSCALL => "syscall",
                FUNCTION_BREAK => "break",
                FUNCTION_MFHI => "mfhi",
                FUNCTION_MTHI => "mthi",
                FUNCTION_MFLO => "mflo",
                FUNCTION_MTLO => "mtlo",
                FUNCTION_MULT => "mult",
                FUNCTION_MULTU => "multu",
                FUNCTION_DIV => "div",
                FUNCTION_DIVU => "divu",
                FUNCTION_ADD => "add",
                FUNCTION_ADDU => "addu",
                FUNCTION_SUB => "sub",
                FUNCTION_SUBU => "subu",
                FUNCTION_AND => "and",
                FUNCTION_OR => "or",
                FUNCTION_XOR => "xor",
                FUNCTION_NOR => "nor",
                FUNCTION_SLT => "slt",
                FUNCTION_SLTU => "sltu",
                _ => return None,
            },
            OP_REGIMM => match self.t_register() {
                REGIMM_BLTZ => "bltz",
                REGIMM_BGEZ => "bgez",
                REGIMM_BLTZAL => "bltzal",
                REGIMM_BGEZAL => "bgezal",
                _ => return None,
            },
            OP_J => "j",
            OP_JAL => "jal",
            OP_BEQ => "beq",
            OP_BNE => "bne",
            OP_BLEZ => "blez",
            OP_BGTZ => "bgtz",
            OP_ADDI => "addi",
            OP_ADDIU => "addiu",
            OP_SLTI => "slti",
            OP_SLTIU => "sltiu",
            OP_ANDI => "andi",
            OP_ORI => "ori",
            OP_XORI => "xori",
            OP_LUI => "lui",
            0x10 => "cop0",
            0x11 => "cop1",
            0x12 => "cop2",
            0x13 => "cop3",
            OP_LB => "lb",
            OP_LH => "lh",
            OP_LWL => "lwl",
            OP_LW => "lw",
            OP_LBU => "lbu",
            OP_LHU => "lhu",
            OP_LWR => "lwr",
            OP_SB => "sb",
            OP_SH => "sh",
            OP_SWL => "swl",
            OP_SW => "sw",
            OP_SWR => "swr",
            0x30 => "lwc0",
            0x31 => "lwc1",
            0x32 => "lwc2",
            0x33 => "lwc3",
            0x38 => "swc0",
            0x39 => "swc1",
            0x3A => "swc2",
            0x3B => "swc3",
            _ => return None,
        };

        Some(mnemonic)
    }

    /// Decode and format the instruction
    pub fn stringify(&self, program_counter: u32) -> String {
        if self.0 == 0 {
            return "noop".to_string();
        }

        let mnemonic = match self.mnemonic() {
            Some(mnemonic) => mnemonic,
            None => return format!(".word 0x{:08x}", self.0),
        };

        match self.op_code() {
            OP_R_TYPE => match self.function() {
                FUNCTION_SLL | FUNCTION_SRL | FUNCTION_SRA => format!(
                    "{} {}, {}, {}",
                    mnemonic,
                    Register(self.d_register()),
                    Register(self.t_register()),
                    self.shift_amount()
                ),
                FUNCTION_SLLV | FUNCTION_SRLV | FUNCTION_SRAV => format!(
                    "{} {}, {}, {}",
                    mnemonic,
                    Register(self.d_register()),
                    Register(self.t_register()),
                    Register(self.s_register())
                ),
                FUNCTION_JR => format!("jr {}", Register(self.s_register())),
                FUNCTION_JALR => format!(
                    "jalr {}, {}",
                    Register(self.d_register()),
                    Register(self.s_register())
                ),
                FUNCTION_SYSCALL | FUNCTION_BREAK => mnemonic.to_string(),
                FUNCTION_MFHI | FUNCTION_MFLO => {
                    format!("{} {}", mnemonic, Register(self.d_register()))
                }
                FUNCTION_MTHI | FUNCTION_MTLO => {
                    format!("{} {}", mnemonic, Register(self.s_register()))
                }
                FUNCTION_MULT | FUNCTION_MULTU | FUNCTION_DIV | FUNCTION_DIVU => format!(
                    "{} {}, {}",
                    mnemonic,
                    Register(self.s_register()),
                    Register(self.t_register())
                ),
                _ => format!(
                    "{} {}, {}, {}",
                    mnemonic,
                    Register(self.d_register()),
                    Register(self.s_register()),
                    Register(self.t_register())
                ),
            },
            OP_REGIMM | OP_BLEZ | OP_BGTZ => format!(
                "{} {}, {}",
                mnemonic,
                Register(self.s_register()),
                self.immediate()
            ),
            OP_J | OP_JAL => format!("{} 0x{:x}", mnemonic, self.real_address(program_counter)),
            OP_BEQ | OP_BNE => format!(
                "{} {}, {}, {}",
                mnemonic,
                Register(self.s_register()),
                Register(self.t_register()),
                self.immediate()
            ),
            OP_ADDI | OP_ADDIU | OP_SLTI | OP_SLTIU => format!(
                "{} {}, {}, {}",
                mnemonic,
                Register(self.t_register()),
                Register(self.s_register()),
                self.immediate()
            ),
            OP_ANDI | OP_ORI | OP_XORI => format!(
                "{} {}, {}, 0x{:x}",
                mnemonic,
                Register(self.t_register()),
                Register(self.s_register()),
                self.immediate() as u16
            ),
            OP_LUI => format!(
                "lui {}, 0x{:x}",
                Register(self.t_register()),
                self.immediate() as u16
            ),
            OP_COP0..=OP_COP3 => format!("{} 0x{:x}", mnemonic, self.0 & 0x03FFFFFF),
            // Loads, stores and the coprocessor transfers all use the
            // offset(base) operand form
            _ => format!(
                "{} {}, {}({})",
                mnemonic,
                Register(self.t_register()),
                self.immediate(),
                Register(self.s_register())
            ),
        }
    }
}

/// Pretty-print the register using its name
struct Register(u8);

impl Display for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        assert!(self.0 < 32);

        f.write_str(REGISTER_NAMES[self.0 as usize])
    }
}
