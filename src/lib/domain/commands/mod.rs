//! The representation of a program invocation and its building blocks

pub mod arguments;
pub mod command_lines;
