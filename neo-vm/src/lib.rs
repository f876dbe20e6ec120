//! Neo Virtual Machine script construction.
//!
//! This crate builds the byte scripts a Neo node executes: opcodes, push
//! encodings, interop syscalls and the call flags passed to
//! `System.Contract.Call`.

pub mod call_flags;
pub mod error;
pub mod op_code;
pub mod script_builder;
pub mod syscall;
pub mod vm_state;

pub use call_flags::CallFlags;
pub use error::{VmError, VmResult};
pub use op_code::OpCode;
pub use script_builder::ScriptBuilder;
pub use syscall::Syscall;
pub use vm_state::VMState;
