extern crate core;

pub mod cli;
pub mod config_file;
pub mod domain;
pub mod parsers;
pub mod runner;
pub mod step_model;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::fs;
    use std::path::{Path, PathBuf};

    use crate::utils::constants::error_messages;
    use crate::{
        cli::{
            input::{CliArgs, Command},
            output::executors,
        },
        config_file::{self, CMakeStepConfigFile},
        domain::commands::command_lines::ProgramCommandLine,
        parsers::ParsersRegistry,
        runner,
        step_model::StepModel,
        utils::{
            self,
            reader::{find_config_files, ConfigFile},
        },
    };
    use color_eyre::eyre::eyre;
    use color_eyre::{eyre::Context, Report, Result};

    /// The main work of the project. Runs the build steps declared by the
    /// configuration files found under the project root, one at a time,
    /// aborting on the first one that fails
    pub fn run_cmake_step(cli_args: &CliArgs) -> std::result::Result<(), Report> {
        let abs_project_root = determine_absolute_path_of_the_project_root(cli_args)?;

        let config_files: Vec<ConfigFile> =
            find_config_files(&abs_project_root, &cli_args.match_files)?;

        for config_file in config_files {
            let cfg_path = &config_file.path;
            log::debug!(
                "Launching a cmake-step work event for the configuration file: {:?}",
                cfg_path,
            );
            let raw_file = fs::read_to_string(cfg_path)
                .with_context(|| format!("{}: {:?}", error_messages::READ_CFG_FILE, cfg_path))?;

            let config: CMakeStepConfigFile<'_> =
                config_file::cmake_step_cfg_from_file(raw_file.as_str()).with_context(|| {
                    format!("{}: {:?}", error_messages::PARSE_CFG_FILE, cfg_path)
                })?;

            let step_model: StepModel<'_> =
                utils::reader::build_model(config, cli_args, &abs_project_root)
                    .with_context(|| error_messages::STEP_MODEL_MAPPING)?;

            perform_main_work(cli_args, &step_model, cfg_path)?;
        }

        Ok(())
    }

    /// Generates the command line of the given step and then runs or displays
    /// it based on the main command passed on the CLI.
    ///
    /// Every step gets a fresh [`ParsersRegistry`], since the activation of
    /// the bundled output parser is scoped to the step that registered it.
    fn perform_main_work(
        cli_args: &CliArgs,
        step_model: &StepModel,
        cfg_path: &Path,
    ) -> Result<()> {
        let mut parsers_registry = ParsersRegistry::new();

        let command_line = runner::make_program_command_line(step_model, &mut parsers_registry)
            .with_context(|| error_messages::FAILURE_GENERATING_COMMAND_LINE)?;

        match cli_args.command {
            Command::Build => execute_generated_command_line(&command_line),
            Command::Show => show_generated_command_line(&command_line),
        }
        .with_context(|| format!("{}: {:?}", error_messages::FAILED_BUILD_FOR_CFG_FILE, cfg_path))
    }

    fn execute_generated_command_line(command_line: &ProgramCommandLine) -> Result<()> {
        let exit_status = executors::run_step_command_line(command_line)?;
        if !exit_status.success() {
            return Err(eyre!(
                "Ending the program, because the invocation: {command_line} finished with: {exit_status}"
            ));
        }
        Ok(())
    }

    /// Dumps the generated command line to stdout instead of launching it,
    /// so a run can be inspected before wiring it on a pipeline
    fn show_generated_command_line(command_line: &ProgramCommandLine) -> Result<()> {
        let pretty_dump = serde_json::to_string_pretty(command_line)
            .with_context(|| "Error serializing the generated command line")?;
        println!("{pretty_dump}");
        Ok(())
    }

    /// Resolves the full path of the location of the project's root on the fs.
    /// If the `--root` [`CliArgs`] arg is present, it will be used as the
    /// project root path, otherwise, we will assume that the project root is
    /// exactly the directory from where the binary was invoked by the user
    fn determine_absolute_path_of_the_project_root(cli_args: &CliArgs) -> Result<PathBuf> {
        let project_root = cli_args
            .root
            .as_deref()
            .map(Path::new)
            .unwrap_or(Path::new("."));

        utils::fs::get_project_root_absolute_path(project_root)
            .with_context(|| error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH)
    }

    #[cfg(test)]
    mod tests {
        use clap::Parser;
        use color_eyre::Result;
        use tempfile::tempdir;

        use crate::cli::input::CliArgs;
        use crate::utils;

        use super::run_cmake_step;

        #[test]
        fn test_a_project_without_config_files_is_an_error() -> Result<()> {
            let temp = tempdir()?;

            let cli_args =
                CliArgs::parse_from(["", "--root", temp.path().to_str().unwrap(), "show"]);
            assert!(run_cmake_step(&cli_args).is_err());

            Ok(temp.close()?)
        }

        #[test]
        fn test_shows_every_detected_build_step() -> Result<()> {
            let temp = tempdir()?;
            utils::fs::create_file(
                temp.path(),
                "cmake_step.toml",
                b"[step]\nbuild_path = 'build'\n",
            )?;
            let nested = temp.path().join("ci");
            utils::fs::create_directory(&nested)?;
            utils::fs::create_file(&nested, "cmake_step_ci.toml", b"")?;

            let cli_args =
                CliArgs::parse_from(["", "--root", temp.path().to_str().unwrap(), "show"]);
            assert!(run_cmake_step(&cli_args).is_ok());

            Ok(temp.close()?)
        }

        #[test]
        fn test_an_unparseable_config_file_aborts_the_run() -> Result<()> {
            let temp = tempdir()?;
            utils::fs::create_file(temp.path(), "cmake_step.toml", b"[step\nnot toml at all")?;

            let cli_args =
                CliArgs::parse_from(["", "--root", temp.path().to_str().unwrap(), "show"]);
            assert!(run_cmake_step(&cli_args).is_err());

            Ok(temp.close()?)
        }
    }
}
