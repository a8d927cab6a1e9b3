pub mod params;

use std::path::PathBuf;

use indexmap::IndexMap;

use self::params::RunnerParameters;

/// The in memory representation of a single configured build step, already
/// detached from the shape of the configuration file that declared it
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StepModel<'a> {
    pub params: RunnerParameters<'a>,
    pub environment: IndexMap<&'a str, &'a str>,
    pub working_dir: PathBuf,
}
