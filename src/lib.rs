pub mod constants;

mod config;
mod coprocessor;
mod fault;
mod instruction;
mod math;
mod memory;
mod operations;
mod processor;
mod registers;
mod trace;

pub use {
    config::Config, coprocessor::*, fault::Fault, instruction::*, memory::*, processor::*,
    registers::*, trace::DebugHandler,
};
