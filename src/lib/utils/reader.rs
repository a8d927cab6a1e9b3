use std::path::{Path, PathBuf};

use color_eyre::{eyre::eyre, Result};
use walkdir::WalkDir;

use crate::cli::input::CliArgs;
use crate::config_file::CMakeStepConfigFile;
use crate::step_model::params::RunnerParameters;
use crate::step_model::StepModel;
use crate::utils::constants::{runner_params, CONFIG_FILE_EXT, CONFIG_FILE_NAME};

/// Details about a found configuration file on the project
///
/// This is just a configuration file with a valid name found
/// at a valid path in some subdirectory
#[derive(Debug)]
pub struct ConfigFile {
    pub path: PathBuf,
}

/// Checks for the existence of the `cmake_step_<any>.toml` configuration
/// files under the given base path, and returns a collection of the ones
/// found.
///
/// *base_path* - A parameter for receive an input via command line
/// parameter to indicate where the configuration files lives in
/// the client's project. Defaults to `.`
///
/// This function fails if there's no configuration file
/// (or isn't present in any directory of the project)
pub fn find_config_files(
    base_path: &Path,
    filename_match: &Option<String>,
) -> Result<Vec<ConfigFile>> {
    log::debug!("Searching for cmake-step configuration files...");
    let mut files = vec![];

    for e in WalkDir::new(base_path)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        // A file name that isn't valid UTF-8 can never be a configuration file
        let Some(filename) = e.file_name().to_str() else {
            continue;
        };
        let file_match = filename_match
            .as_ref()
            .map(|fm| fm.as_str())
            .unwrap_or(filename);
        if e.file_type().is_file()
            && filename.starts_with(CONFIG_FILE_NAME)
            && filename.ends_with(CONFIG_FILE_EXT)
            && filename.contains(file_match)
        {
            files.push(ConfigFile {
                path: e.path().to_path_buf(),
            })
        }
    }

    if files.is_empty() {
        Err(eyre!("No configuration files found for the project"))
    } else {
        Ok(files)
    }
}

/// Maps the parsed data of a configuration file into the [`StepModel`], the
/// read only snapshot that drives the command line generation.
///
/// Every declared step attribute lands on the runner parameters map under its
/// well known key, always as a string, since that map is the contract with
/// the generator. The `--cmake-path` command line override wins over the
/// program declared on the configuration file.
pub fn build_model<'a>(
    config: CMakeStepConfigFile<'a>,
    cli_args: &'a CliArgs,
    absolute_project_root: &Path,
) -> Result<StepModel<'a>> {
    let step = config.step.unwrap_or_default();

    let mut params = RunnerParameters::new();
    if let Some(cmake_command) = cli_args.cmake_path.as_deref().or(step.cmake_command) {
        params.set(runner_params::CMAKE_COMMAND, cmake_command);
    }
    if let Some(build_path) = step.build_path {
        params.set(runner_params::BUILD_PATH, build_path);
    }
    if let Some(build_target) = step.build_target {
        params.set(runner_params::BUILD_TARGET, build_target);
    }
    if let Some(configuration) = step.configuration {
        params.set(runner_params::BUILD_CONFIGURATION, configuration);
    }
    if let Some(clean_first) = step.clean_first {
        params.set(
            runner_params::BUILD_CLEAN_FIRST,
            if clean_first { "true" } else { "false" },
        );
    }
    if let Some(native_tool_args) = step.native_tool_args {
        params.set(runner_params::NATIVE_TOOL_PARAMS, native_tool_args);
    }
    if let Some(redirect_stderr) = step.redirect_stderr {
        params.set(
            runner_params::REDIRECT_STDERR,
            if redirect_stderr { "true" } else { "false" },
        );
    }

    Ok(StepModel {
        params,
        environment: config.environment.unwrap_or_default(),
        working_dir: absolute_project_root.to_path_buf(),
    })
}
