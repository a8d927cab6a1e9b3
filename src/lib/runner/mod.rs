//! The core of the program. Maps the configured parameters of a build step
//! into the ready to launch `cmake --build` invocation.

pub mod redirect;

use color_eyre::Result;

use crate::domain::commands::arguments::{Argument, Arguments};
use crate::domain::commands::command_lines::ProgramCommandLine;
use crate::domain::environment;
use crate::parsers::{self, ParserScope, ParsersRegistry};
use crate::step_model::StepModel;
use crate::utils::constants::{
    cmake_flags, error_messages, runner_params, DEFAULT_CMAKE_PROGRAM,
};

/// Generates the `cmake --build` invocation for the given build step.
///
/// Every piece of the command line degrades to a default when its parameter
/// is missing: the program to the bundled `cmake` literal, the build path to
/// the current directory and the optional flags to their absence, so the
/// generation itself never fails. On the way out the bundled output parser
/// gets wired into the given [`ParsersRegistry`], activated for this step
/// only, and when the step asks for it the returned command line comes
/// already wrapped to redirect the stderr of the child process.
pub fn make_program_command_line<'a>(
    model: &'a StepModel<'a>,
    parsers_registry: &mut ParsersRegistry,
) -> Result<ProgramCommandLine<'a>> {
    let params = &model.params;
    let environment = environment::snapshot_with_overrides(&model.environment);

    let program = params
        .get_non_blank(runner_params::CMAKE_COMMAND)
        .unwrap_or(DEFAULT_CMAKE_PROGRAM);

    // Check for program exist
    // if !Path::new(program).exists()
    //     && utils::fs::find_executable_by_name_in_path(program, &environment).is_none()
    // {
    //     return Err(eyre!("Cannot locate `{program}' executable"));
    // }

    let mut arguments = Arguments::with_capacity(8);
    arguments.create_and_push(cmake_flags::BUILD);
    arguments.create_and_push(
        params
            .get(runner_params::BUILD_PATH)
            .unwrap_or(cmake_flags::CURRENT_DIR),
    );

    if let Some(build_target) = params.get_non_blank(runner_params::BUILD_TARGET) {
        arguments.create_and_push(cmake_flags::TARGET);
        arguments.create_and_push(build_target);
    }
    if let Some(build_configuration) = params.get_non_blank(runner_params::BUILD_CONFIGURATION) {
        arguments.create_and_push(cmake_flags::CONFIG);
        arguments.create_and_push(build_configuration);
    }
    if params.flag(runner_params::BUILD_CLEAN_FIRST) {
        arguments.create_and_push(cmake_flags::CLEAN_FIRST);
    }

    arguments.create_and_push(cmake_flags::NATIVE_TOOL_SEPARATOR);
    if let Some(native_tool_params) = params.get_non_blank(runner_params::NATIVE_TOOL_PARAMS) {
        arguments.extend(tokenize_native_tool_params(native_tool_params));
    }

    initialize_regex_parsers(parsers_registry);

    let command_line = ProgramCommandLine::new(
        Argument::from(program),
        arguments,
        environment,
        &model.working_dir,
    );

    Ok(if params.flag(runner_params::REDIRECT_STDERR) {
        redirect::wrap(command_line)
    } else {
        command_line
    })
}

/// Splits the free form native tool parameters into single arguments with
/// shell style word splitting, honoring quotes. A malformed quoting downgrades
/// the splitting to plain whitespace instead of aborting the generation.
fn tokenize_native_tool_params(native_tool_params: &str) -> Arguments<'_> {
    match shell_words::split(native_tool_params) {
        Ok(tokens) => tokens.into_iter().collect(),
        Err(error) => {
            log::warn!(
                "Splitting the native tool parameters without honoring quotes ({error}): {native_tool_params}"
            );
            native_tool_params.split_ascii_whitespace().collect()
        }
    }
}

/// Wires the bundled cmake output parser into the registry, activated for
/// this build step only
fn initialize_regex_parsers(parsers_registry: &mut ParsersRegistry) {
    register_cmake_parser(parsers::resources::CMAKE_PARSER, parsers_registry)
}

/// A definition that cannot be loaded leaves the step without output
/// annotation, never without a command line
fn register_cmake_parser(raw_definition: &str, parsers_registry: &mut ParsersRegistry) {
    match parsers::load_parser(raw_definition) {
        Ok(parser) => {
            let name = parser.name().to_owned();
            parsers_registry.register(&name, parser);
            parsers_registry.enable(&name, ParserScope::ThisStep);
        }
        Err(error) => log::info!(
            "{} ({}): {error}",
            error_messages::CANNOT_LOAD_PARSER,
            parsers::resources::CMAKE_PARSER_FILE_NAME
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use indexmap::IndexMap;

    use super::*;
    use crate::step_model::params::RunnerParameters;

    fn model_with_params<'a>(entries: &[(&'a str, &'a str)]) -> StepModel<'a> {
        let mut params = RunnerParameters::new();
        for (key, value) in entries.iter().copied() {
            params.set(key, value);
        }

        StepModel {
            params,
            environment: IndexMap::new(),
            working_dir: PathBuf::from("project"),
        }
    }

    fn generate<'a>(model: &'a StepModel<'a>) -> ProgramCommandLine<'a> {
        make_program_command_line(model, &mut ParsersRegistry::new())
            .expect("The command line generation never fails")
    }

    #[test]
    fn test_a_bare_step_generates_the_minimal_invocation() {
        let model = model_with_params(&[]);
        let command_line = generate(&model);

        let expected: Arguments = ["--build", ".", "--"].into_iter().collect();
        assert_eq!(command_line.program.value(), "cmake");
        assert_eq!(command_line.arguments, expected);
        assert_eq!(command_line.working_dir, model.working_dir);
    }

    #[test]
    fn test_every_configured_flag_lands_on_its_place() {
        let model = model_with_params(&[
            ("build-path", "cmake-build-release"),
            ("build-target", "all"),
            ("build-configuration", "Release"),
            ("build-clean-first", "true"),
        ]);
        let command_line = generate(&model);

        let expected: Arguments = [
            "--build",
            "cmake-build-release",
            "--target",
            "all",
            "--config",
            "Release",
            "--clean-first",
            "--",
        ]
        .into_iter()
        .collect();
        assert_eq!(command_line.arguments, expected);
    }

    #[test]
    fn test_native_tool_params_are_split_and_appended_after_the_separator() {
        let model = model_with_params(&[("native-tool-params", "-j4 --verbose")]);
        let command_line = generate(&model);

        let expected: Arguments = ["--build", ".", "--", "-j4", "--verbose"]
            .into_iter()
            .collect();
        assert_eq!(command_line.arguments, expected);
    }

    #[test]
    fn test_quoted_native_tool_params_stay_as_one_argument() {
        let model = model_with_params(&[(
            "native-tool-params",
            r#"-j4 -DCMAKE_CXX_FLAGS="-O2 -g""#,
        )]);
        let command_line = generate(&model);

        let expected: Arguments = ["--build", ".", "--", "-j4", "-DCMAKE_CXX_FLAGS=-O2 -g"]
            .into_iter()
            .collect();
        assert_eq!(command_line.arguments, expected);
    }

    #[test]
    fn test_ill_quoted_native_tool_params_fall_back_to_whitespace_splitting() {
        let model = model_with_params(&[("native-tool-params", "-j4 'unterminated")]);
        let command_line = generate(&model);

        let expected: Arguments = ["--build", ".", "--", "-j4", "'unterminated"]
            .into_iter()
            .collect();
        assert_eq!(command_line.arguments, expected);
    }

    #[test]
    fn test_blank_values_behave_like_absent_ones() {
        let model = model_with_params(&[
            ("build-target", "   "),
            ("build-configuration", ""),
            ("build-clean-first", "no"),
        ]);
        let command_line = generate(&model);

        let expected: Arguments = ["--build", ".", "--"].into_iter().collect();
        assert_eq!(command_line.arguments, expected);
    }

    #[test]
    fn test_a_present_but_blank_build_path_is_used_verbatim() {
        let model = model_with_params(&[("build-path", "")]);
        let command_line = generate(&model);

        // Only a missing build path falls back to the current directory
        let expected: Arguments = ["--build", "", "--"].into_iter().collect();
        assert_eq!(command_line.arguments, expected);
    }

    #[test]
    fn test_the_program_override_is_taken_verbatim() {
        let model = model_with_params(&[("cmake-command", "C:\\Program Files\\CMake\\cmake.exe")]);
        assert_eq!(
            generate(&model).program.value(),
            "C:\\Program Files\\CMake\\cmake.exe"
        );

        let blank_override = model_with_params(&[("cmake-command", "  ")]);
        assert_eq!(generate(&blank_override).program.value(), "cmake");
    }

    #[test]
    fn test_the_environment_overrides_win_over_the_ambient_variables() {
        std::env::set_var("CMAKE_STEP_RUNNER_PROBE", "ambient");

        let mut model = model_with_params(&[]);
        model.environment.insert("CMAKE_STEP_RUNNER_PROBE", "step");
        model.environment.insert("CMAKE_STEP_RUNNER_EXTRA", "1");
        let command_line = generate(&model);

        assert_eq!(
            command_line
                .environment
                .get("CMAKE_STEP_RUNNER_PROBE")
                .map(String::as_str),
            Some("step")
        );
        assert_eq!(
            command_line
                .environment
                .get("CMAKE_STEP_RUNNER_EXTRA")
                .map(String::as_str),
            Some("1")
        );
        std::env::remove_var("CMAKE_STEP_RUNNER_PROBE");
    }

    #[test]
    fn test_the_redirect_flag_wraps_the_generated_command_line() {
        let plain = model_with_params(&[("build-target", "install")]);
        let redirected = model_with_params(&[
            ("build-target", "install"),
            ("redirect-stderr", "true"),
        ]);

        let plain_command_line = generate(&plain);
        let redirected_command_line = generate(&redirected);

        assert_eq!(plain_command_line.program.value(), "cmake");
        assert_ne!(redirected_command_line.program, plain_command_line.program);
        assert_eq!(
            redirected_command_line.working_dir,
            plain_command_line.working_dir
        );
        // The plain invocation survives complete inside the wrapped one
        assert!(redirected_command_line
            .arguments
            .iter()
            .any(|argument| argument.value() == "cmake"));
        let wrapped_tail: Vec<&str> = redirected_command_line
            .arguments
            .iter()
            .skip_while(|argument| argument.value() != "--build")
            .map(|argument| argument.value())
            .collect();
        assert_eq!(
            wrapped_tail,
            ["--build", ".", "--target", "install", "--"]
        );
    }

    #[test]
    fn test_an_unloadable_parser_definition_neither_fails_nor_pollutes_the_registry() {
        let mut registry = ParsersRegistry::new();
        register_cmake_parser("definitely not a parser definition", &mut registry);

        assert!(registry.get("cmake").is_none());
        assert!(!registry.is_enabled("cmake"));

        // The generated command line stays the same with or without parsers
        let model = model_with_params(&[]);
        let with_parsers = generate(&model);
        let expected: Arguments = ["--build", ".", "--"].into_iter().collect();
        assert_eq!(with_parsers.program.value(), "cmake");
        assert_eq!(with_parsers.arguments, expected);
    }

    #[test]
    fn test_the_bundled_parser_ends_registered_and_scoped_to_the_step() {
        let model = model_with_params(&[]);
        let mut registry = ParsersRegistry::new();
        make_program_command_line(&model, &mut registry)
            .expect("The command line generation never fails");

        assert!(registry.get("cmake").is_some());
        assert_eq!(registry.scope_of("cmake"), Some(ParserScope::ThisStep));
    }
}
