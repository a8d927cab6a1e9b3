//! The environment that the spawned build tool will receive

use std::collections::HashMap;

use indexmap::IndexMap;

/// Convenient typedef of the environment variables map
pub type EnvVars = HashMap<String, String>;

/// Takes a snapshot of the ambient process environment and overlays the step
/// declared overrides on top of it. On a key collision the override wins.
pub fn snapshot_with_overrides(overrides: &IndexMap<&str, &str>) -> EnvVars {
    let mut environment: EnvVars = std::env::vars().collect();
    environment.extend(
        overrides
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string())),
    );
    environment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_the_ambient_value() {
        std::env::set_var("CMAKE_STEP_ENV_PROBE", "ambient");
        let mut overrides = IndexMap::new();
        overrides.insert("CMAKE_STEP_ENV_PROBE", "overridden");
        overrides.insert("CMAKE_STEP_ENV_EXTRA", "1");

        let environment = snapshot_with_overrides(&overrides);

        assert_eq!(
            environment.get("CMAKE_STEP_ENV_PROBE").map(String::as_str),
            Some("overridden")
        );
        assert_eq!(
            environment.get("CMAKE_STEP_ENV_EXTRA").map(String::as_str),
            Some("1")
        );
        std::env::remove_var("CMAKE_STEP_ENV_PROBE");
    }

    #[test]
    fn test_ambient_variables_are_carried_into_the_snapshot() {
        std::env::set_var("CMAKE_STEP_ENV_CARRIED", "kept");
        let environment = snapshot_with_overrides(&IndexMap::new());
        assert_eq!(
            environment.get("CMAKE_STEP_ENV_CARRIED").map(String::as_str),
            Some("kept")
        );
        std::env::remove_var("CMAKE_STEP_ENV_CARRIED");
    }
}
