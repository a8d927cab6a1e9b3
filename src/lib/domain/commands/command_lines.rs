use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::commands::arguments::{Argument, Arguments};
use crate::domain::environment::EnvVars;

/// Type for representing the command line that will be handed to the operating system
/// to launch the build tool, and store its different components
///
/// * *program*: the executable that will be spawned, either the configured override
///     or the bundled default
/// * *arguments*: the ordered collection of command line arguments passed to the program,
///     preserved exactly in generation order
/// * *environment*: the complete environment of the child process, the ambient variables
///     already merged with the step declared overrides
/// * *working_dir*: the directory the program will be launched from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramCommandLine<'a> {
    pub program: Argument<'a>,
    pub arguments: Arguments<'a>,
    pub environment: EnvVars,
    pub working_dir: Cow<'a, Path>,
}

impl<'a> ProgramCommandLine<'a> {
    pub fn new(
        program: Argument<'a>,
        arguments: Arguments<'a>,
        environment: EnvVars,
        working_dir: &'a Path,
    ) -> Self {
        Self {
            program,
            arguments,
            environment,
            working_dir: Cow::Borrowed(working_dir),
        }
    }
}

impl core::fmt::Display for ProgramCommandLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.program,
            self.arguments
                .iter()
                .map(|argument| argument.value())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
