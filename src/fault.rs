use thiserror::Error;

/// A non-success result from the CPU or one of its collaborators.
///
/// Two namespaces share this type: library errors, raised when the caller
/// misuses the API or an I/O operation fails, and architectural exceptions,
/// raised by a simulated instruction. A fault returned from
/// [`Processor::step`](crate::Processor::step) leaves the architectural
/// state exactly as it was before the call.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Fault {
    // Library errors
    #[error("Not implemented")]
    NotImplemented,
    #[error("Invalid argument")]
    InvalidArgument,
    #[error("Invalid handle")]
    InvalidHandle,
    #[error("File read error")]
    FileReadError,
    #[error("File write error")]
    FileWriteError,

    // Architectural exceptions
    #[error("Break")]
    Break,
    #[error("Invalid address")]
    InvalidAddress,
    #[error("Invalid alignment")]
    InvalidAlignment,
    #[error("Access violation")]
    AccessViolation,
    #[error("Invalid instruction")]
    InvalidInstruction,
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
    #[error("Coprocessor unusable")]
    CoprocessorUnusable,
    #[error("System call")]
    SystemCall,
}

impl Fault {
    /// True for faults raised by a simulated instruction, false for the
    /// caller-facing library errors.
    pub fn is_exception(&self) -> bool {
        !matches!(
            self,
            Fault::NotImplemented
                | Fault::InvalidArgument
                | Fault::InvalidHandle
                | Fault::FileReadError
                | Fault::FileWriteError
        )
    }

    /// Slot assigned to this exception in the handler address table.
    pub(crate) fn exception_index(&self) -> Option<usize> {
        match self {
            Fault::Break => Some(0),
            Fault::InvalidAddress => Some(1),
            Fault::InvalidAlignment => Some(2),
            Fault::AccessViolation => Some(3),
            Fault::InvalidInstruction => Some(4),
            Fault::ArithmeticOverflow => Some(5),
            Fault::CoprocessorUnusable => Some(6),
            Fault::SystemCall => Some(7),
            _ => None,
        }
    }
}
