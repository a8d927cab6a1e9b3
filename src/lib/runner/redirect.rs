//! Rewrites a generated command line so the error stream of the launched
//! program gets merged into its standard output

use crate::domain::commands::arguments::{Argument, Arguments};
use crate::domain::commands::command_lines::ProgramCommandLine;
use crate::utils::constants::{UNIX_SH, WIN_CMD};

/// The shell snippet that relaunches the wrapped program with its stderr
/// merged into stdout
const SH_REDIRECT_SNIPPET: &str = r#"exec "$0" "$@" 2>&1"#;
const CMD_REDIRECT_SUFFIX: &str = "2>&1";

/// Wraps the given command line into a shell invocation that redirects the
/// stderr of the launched program into its stdout. Only the program and the
/// arguments are rewritten. The environment and the working directory pass
/// through untouched.
pub fn wrap(command_line: ProgramCommandLine<'_>) -> ProgramCommandLine<'_> {
    if cfg!(target_os = "windows") {
        wrap_with_cmd(command_line)
    } else {
        wrap_with_sh(command_line)
    }
}

/// `/bin/sh -c 'exec "$0" "$@" 2>&1' <program> <arguments>`
fn wrap_with_sh(command_line: ProgramCommandLine<'_>) -> ProgramCommandLine<'_> {
    let mut arguments = Arguments::with_capacity(command_line.arguments.len() + 3);
    arguments.create_and_push("-c");
    arguments.create_and_push(SH_REDIRECT_SNIPPET);
    arguments.push(command_line.program);
    arguments.extend(command_line.arguments);

    ProgramCommandLine {
        program: Argument::from(UNIX_SH),
        arguments,
        environment: command_line.environment,
        working_dir: command_line.working_dir,
    }
}

/// `cmd /c <program> <arguments> 2>&1`
fn wrap_with_cmd(command_line: ProgramCommandLine<'_>) -> ProgramCommandLine<'_> {
    let mut arguments = Arguments::with_capacity(command_line.arguments.len() + 3);
    arguments.create_and_push("/c");
    arguments.push(command_line.program);
    arguments.extend(command_line.arguments);
    arguments.create_and_push(CMD_REDIRECT_SUFFIX);

    ProgramCommandLine {
        program: Argument::from(WIN_CMD),
        arguments,
        environment: command_line.environment,
        working_dir: command_line.working_dir,
    }
}
