//! Host command execution

pub mod interpreter;

pub use interpreter::Interpreter;
