//! The configuration options available to describe how one build step
//! drives `cmake --build`

use serde::*;

/// [`StepAttribute`] - The declarative description of one `cmake --build`
/// invocation
///
/// * `cmake_command` - Path of the program to launch instead of the default
///     `cmake` resolved from the path
/// * `build_path` - The project binary directory handed to `--build`. When it
///     is not declared the build runs over the current directory
/// * `build_target` - Value for the `--target` flag
/// * `configuration` - Value for the `--config` flag of the multi configuration
///     generators
/// * `clean_first` - Whether to pass `--clean-first`, so the target gets
///     rebuilt from scratch
/// * `native_tool_args` - Extra arguments handed to the underlying native
///     build tool after the `--` separator, with shell style quoting honored
/// * `redirect_stderr` - Whether the launched process gets its stderr stream
///     merged into stdout
///
/// ```rust
/// use cmake_step::config_file::step::StepAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[step]
///     cmake_command = '/opt/cmake/bin/cmake'
///     build_path = 'build'
///     build_target = 'install'
///     configuration = 'Release'
///     clean_first = true
///     native_tool_args = '-j8 --verbose'
///     redirect_stderr = false
///"#;
///
/// let config: StepAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the cmake-step toml file");
///
/// assert_eq!(config.cmake_command, Some("/opt/cmake/bin/cmake"));
/// assert_eq!(config.build_path, Some("build"));
/// assert_eq!(config.build_target, Some("install"));
/// assert_eq!(config.configuration, Some("Release"));
/// assert_eq!(config.clean_first, Some(true));
/// assert_eq!(config.native_tool_args, Some("-j8 --verbose"));
/// assert_eq!(config.redirect_stderr, Some(false));
/// ```
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StepAttribute<'a> {
    #[serde(borrow)]
    pub cmake_command: Option<&'a str>,
    #[serde(borrow)]
    pub build_path: Option<&'a str>,
    #[serde(borrow)]
    pub build_target: Option<&'a str>,
    #[serde(borrow)]
    pub configuration: Option<&'a str>,
    pub clean_first: Option<bool>,
    #[serde(borrow)]
    pub native_tool_args: Option<&'a str>,
    pub redirect_stderr: Option<bool>,
}
