//! The runner parameters map, the string to string contract of a build step

use std::borrow::Cow;

use indexmap::IndexMap;

/// The parameters that configure a single build step.
///
/// Keys are the well known entries of [`crate::utils::constants::runner_params`].
/// Values always travel as strings, whatever their original type was on the
/// configuration surface that produced them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunnerParameters<'a>(IndexMap<&'a str, Cow<'a, str>>);

impl<'a> RunnerParameters<'a> {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Stores the value for the given parameter key
    pub fn set<V: Into<Cow<'a, str>>>(&mut self, key: &'a str, value: V) {
        self.0.insert(key, value.into());
    }

    /// Raw access to a parameter value, exactly as it was configured
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|value| value.as_ref())
    }

    /// A parameter value filtered down to the usable ones, where a whitespace
    /// only value counts as absent
    pub fn get_non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }

    /// Reads a parameter as a boolean flag. Only the case insensitive literal
    /// `true` enables it. Any other value, or the absence of the key, leaves
    /// the flag disabled.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or_default()
    }
}
