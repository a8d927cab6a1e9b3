//! Launches the generated command lines as operating system processes

use std::process::ExitStatus;

use color_eyre::{eyre::Context, Result};

use crate::domain::commands::command_lines::ProgramCommandLine;
use crate::utils::constants::error_messages;

/// Executes a new [`std::process::Command`] spawning the program held by the
/// generated [`ProgramCommandLine`] and waits until it finishes.
///
/// The child receives exactly the environment snapshot carried by the command
/// line, since it already holds the ambient variables merged with the step
/// declared overrides.
pub fn run_step_command_line(command_line: &ProgramCommandLine) -> Result<ExitStatus> {
    log::trace!("Executing the command line => {command_line}");

    std::process::Command::new(&command_line.program)
        .args(command_line.arguments.iter())
        .env_clear()
        .envs(&command_line.environment)
        .current_dir(&command_line.working_dir)
        .spawn()?
        .wait()
        .with_context(|| {
            format!(
                "{}: {command_line}",
                error_messages::FAILURE_LAUNCHING_STEP
            )
        })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use color_eyre::Result;

    use super::*;
    use crate::domain::commands::arguments::{Argument, Arguments};
    use crate::domain::environment;
    use crate::step_model::StepModel;

    #[cfg(unix)]
    #[test]
    fn test_the_child_process_runs_with_the_snapshot_environment() -> Result<()> {
        let mut model = StepModel::default();
        model
            .environment
            .insert("CMAKE_STEP_EXECUTORS_PROBE", "expected");

        // `sh -c 'test ...'` exits zero only when the variable reached the child
        let command_line = ProgramCommandLine::new(
            Argument::from("/bin/sh"),
            [
                "-c",
                r#"test "$CMAKE_STEP_EXECUTORS_PROBE" = 'expected'"#,
            ]
            .into_iter()
            .collect(),
            environment::snapshot_with_overrides(&model.environment),
            Path::new("."),
        );

        let exit_status = run_step_command_line(&command_line)?;
        assert!(exit_status.success());

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_a_failing_program_reports_its_exit_status() -> Result<()> {
        let command_line = ProgramCommandLine::new(
            Argument::from("false"),
            Arguments::default(),
            environment::snapshot_with_overrides(&indexmap::IndexMap::new()),
            Path::new("."),
        );

        let exit_status = run_step_command_line(&command_line)?;
        assert!(!exit_status.success());

        Ok(())
    }
}
