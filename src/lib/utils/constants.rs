//! Constant value definitions to use across the whole program

/// The program that runs the build when no override is configured
pub const DEFAULT_CMAKE_PROGRAM: &str = "cmake";

/// The keys under which the step attributes travel in the runner
/// parameters map
pub mod runner_params {
    pub const CMAKE_COMMAND: &str = "cmake-command";
    pub const BUILD_PATH: &str = "build-path";
    pub const BUILD_TARGET: &str = "build-target";
    pub const BUILD_CONFIGURATION: &str = "build-configuration";
    pub const BUILD_CLEAN_FIRST: &str = "build-clean-first";
    pub const NATIVE_TOOL_PARAMS: &str = "native-tool-params";
    pub const REDIRECT_STDERR: &str = "redirect-stderr";
}

/// The `cmake` command line vocabulary that the generator emits
pub mod cmake_flags {
    pub const BUILD: &str = "--build";
    pub const TARGET: &str = "--target";
    pub const CONFIG: &str = "--config";
    pub const CLEAN_FIRST: &str = "--clean-first";
    /// Everything after this separator goes verbatim to the native build tool
    pub const NATIVE_TOOL_SEPARATOR: &str = "--";
    pub const CURRENT_DIR: &str = ".";
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "Failed to resolve the absolute path of the project root";
    pub const FAILURE_GENERATING_COMMAND_LINE: &str =
        "Failed to generate the cmake command line for the step";
    pub const FAILED_BUILD_FOR_CFG_FILE: &str = "Failed to run the build step for the config file";
    pub const STEP_MODEL_MAPPING: &str = "Error building the step model";
    pub const FAILURE_LAUNCHING_STEP: &str = "Error launching the generated command line";
    pub const CANNOT_LOAD_PARSER: &str = "Cannot load the cmake output parser";
    pub const PARSE_PARSER_DEFINITION: &str = "Could not parse the parser definition";
    pub const INVALID_PARSER_PATTERN: &str = "Invalid pattern on the parser definition";
}

pub const CONFIG_FILE_NAME: &str = "cmake_step";
pub const CONFIG_FILE_EXT: &str = ".toml";

pub const WIN_CMD: &str = "C:\\Windows\\system32\\cmd";
pub const UNIX_SH: &str = "/bin/sh";

pub const CONFIG_FILE_MOCK: &str = r#"
[step]
cmake_command = 'cmake'
build_path = 'build'
build_target = 'install'
configuration = 'Release'
clean_first = true
native_tool_args = '-j8 --verbose'
redirect_stderr = false

[environment]
CMAKE_BUILD_PARALLEL_LEVEL = '8'
VERBOSE = '1'
"#;
