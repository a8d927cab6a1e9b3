//! The named, regex based rule sets that annotate the output of a build
//! step, and the registry where the active ones are tracked

pub mod resources;

use color_eyre::{eyre::Context, Result};
use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;

use crate::utils::constants::error_messages;

/// The kind of annotation that a matched output line receives on the
/// build report
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Whether an enabled parser annotates only the output of the build step
/// that activated it, or the output of every step of the build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserScope {
    ThisStep,
    AllSteps,
}

/// The raw shape of a parser definition file, holding the declared
/// patterns before they are compiled and validated
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RawParserDefinition<'a> {
    #[serde(borrow)]
    name: &'a str,
    #[serde(borrow)]
    rules: Vec<RawParserRule<'a>>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RawParserRule<'a> {
    #[serde(borrow)]
    pattern: &'a str,
    severity: Severity,
}

/// One compiled annotation rule of a [`RegexParser`]
#[derive(Debug)]
pub struct ParserRule {
    pattern: Regex,
    severity: Severity,
}

/// A named, ordered regex rule set that classifies the lines written by
/// the build tool. The first rule matching a line decides its severity.
#[derive(Debug)]
pub struct RegexParser {
    name: String,
    rules: Vec<ParserRule>,
}

impl RegexParser {
    /// The name this parser declares for itself on its definition file,
    /// which is also the name it must be registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The annotation that the given output line receives, if any rule
    /// recognizes it
    pub fn severity_of(&self, line: &str) -> Option<Severity> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(line))
            .map(|rule| rule.severity)
    }
}

/// Builds the [`RegexParser`] declared by the raw text of a parser
/// definition file, compiling every declared pattern upfront so an
/// unloadable definition is detected before any output is processed
pub fn load_parser(raw_definition: &str) -> Result<RegexParser> {
    let definition: RawParserDefinition = toml::from_str(raw_definition)
        .with_context(|| error_messages::PARSE_PARSER_DEFINITION)?;

    let mut rules = Vec::with_capacity(definition.rules.len());
    for rule in definition.rules {
        let pattern = Regex::new(rule.pattern).with_context(|| {
            format!("{}: {}", error_messages::INVALID_PARSER_PATTERN, rule.pattern)
        })?;
        rules.push(ParserRule {
            pattern,
            severity: rule.severity,
        });
    }

    Ok(RegexParser {
        name: definition.name.to_owned(),
        rules,
    })
}

/// Tracks the output parsers known to the running agent and which of them
/// are active, with the scope they were activated with
#[derive(Debug, Default)]
pub struct ParsersRegistry {
    parsers: IndexMap<String, RegexParser>,
    enabled: IndexMap<String, ParserScope>,
}

impl ParsersRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the parser available under the given name. Registering an
    /// already known name replaces the previous definition.
    pub fn register(&mut self, name: &str, parser: RegexParser) {
        self.parsers.insert(name.to_owned(), parser);
    }

    /// Activates a registered parser with the given scope. Asking for a
    /// name that was never registered leaves the registry untouched.
    pub fn enable(&mut self, name: &str, scope: ParserScope) {
        if self.parsers.contains_key(name) {
            self.enabled.insert(name.to_owned(), scope);
        } else {
            log::debug!("Refusing to enable the unknown output parser: {name}");
        }
    }

    pub fn get(&self, name: &str) -> Option<&RegexParser> {
        self.parsers.get(name)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains_key(name)
    }

    pub fn scope_of(&self, name: &str) -> Option<ParserScope> {
        self.enabled.get(name).copied()
    }
}
