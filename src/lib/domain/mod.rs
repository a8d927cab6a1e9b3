//! The core entities of the program, independent of any configuration source

pub mod commands;
pub mod environment;
