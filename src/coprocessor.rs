use crate::fault::Fault;
use crate::processor::Processor;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Signature for a general coprocessor operation, invoked by COPz with the
/// full instruction word.
pub type CopFn<M> = fn(&mut Processor<M>, u32) -> Result<(), Fault>;

/// Signature for the word-load hook, invoked by LWCz with the target
/// coprocessor register index and the freshly loaded word.
pub type CopLoadFn<M> = fn(&mut Processor<M>, u8, u32) -> Result<(), Fault>;

/// Signature for the word-store hook, invoked by SWCz with the source
/// coprocessor register index; returns the word to store.
pub type CopStoreFn<M> = fn(&mut Processor<M>, u8) -> Result<u32, Fault>;

/// A pluggable coprocessor: a general operation plus word load/store hooks.
/// An instruction that reaches an unset callable faults
/// [`Fault::CoprocessorUnusable`].
pub struct Coprocessor<M> {
    pub cop: Option<CopFn<M>>,
    pub lwc: Option<CopLoadFn<M>>,
    pub swc: Option<CopStoreFn<M>>,
}

impl<M> Copy for Coprocessor<M> {}

impl<M> Clone for Coprocessor<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Default for Coprocessor<M> {
    fn default() -> Self {
        Coprocessor {
            cop: None,
            lwc: None,
            swc: None,
        }
    }
}

impl<M> Debug for Coprocessor<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coprocessor")
            .field("cop", &self.cop.is_some())
            .field("lwc", &self.lwc.is_some())
            .field("swc", &self.swc.is_some())
            .finish()
    }
}
