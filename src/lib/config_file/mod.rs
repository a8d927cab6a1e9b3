//! root file for the module where the datastructures that hold the TOML
//! parsed data live.
pub mod step;

use indexmap::IndexMap;
use serde::Deserialize;

use self::step::StepAttribute;

/// ```rust
/// use cmake_step::config_file::{
///     CMakeStepConfigFile,
///     cmake_step_cfg_from_file,
///     step::StepAttribute
/// };
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [step]
///     build_path = 'cmake-build-debug'
///     build_target = 'all'
///
///     [environment]
///     CMAKE_BUILD_PARALLEL_LEVEL = '4'
/// "#;
///
/// let config: CMakeStepConfigFile = cmake_step_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the cmake-step toml file");
///
/// let step: &StepAttribute = config.step.as_ref()
///     .expect("Step attribute not found on the configuration");
/// assert_eq!(step.build_path, Some("cmake-build-debug"));
/// assert_eq!(step.build_target, Some("all"));
/// assert_eq!(step.cmake_command, None);
/// assert_eq!(step.clean_first, None);
///
/// let environment = config.environment.as_ref()
///     .expect("Environment attribute not found on the configuration");
/// assert_eq!(environment.get("CMAKE_BUILD_PARALLEL_LEVEL"), Some(&"4"));
/// ```
/// The [`CMakeStepConfigFile`] is the type that holds
/// the whole hierarchy of a cmake-step config file attributes
/// and properties
#[derive(Deserialize, Debug, Default)]
pub struct CMakeStepConfigFile<'a> {
    #[serde(borrow)]
    pub step: Option<StepAttribute<'a>>,
    #[serde(borrow)]
    pub environment: Option<IndexMap<&'a str, &'a str>>,
}

pub fn cmake_step_cfg_from_file(
    cfg: &'_ str,
) -> Result<CMakeStepConfigFile<'_>, toml::de::Error> {
    <CMakeStepConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}
