//! Engine settings read from a task document.
//!
//! The `engine` section of a document such as
//! ```text
//! // engine settings
//! engine
//! rectify: true
//! variable: t
//! simplify_results: false
//! loglevel: debug
//! ```
//! fills an [`EngineConfig`]. Missing keys keep their defaults, unknown keys are ignored.

use crate::Utils::logger::{init_logger, level_filter};
use crate::Utils::task_parser::{SectionMap, Value, parse_document_as};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_errors::{ParseError, SymbolicError};
use log::{debug, info};

/// title of the section holding the engine settings
pub const ENGINE_SECTION: &str = "engine";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// insert implicit multiplications while parsing
    pub rectify: bool,
    /// default differentiation variable
    pub variable: char,
    /// simplify derivatives produced through the config
    pub simplify_results: bool,
    /// trace, debug, info, warn, error or off
    pub loglevel: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rectify: true,
            variable: 'x',
            simplify_results: true,
            loglevel: None,
        }
    }
}

// the single value of a key, None if the key is absent
fn single_value<'a>(section: &'a SectionMap, key: &str) -> Result<Option<&'a Value>, SymbolicError> {
    match section.get(key) {
        None | Some(None) => Ok(None),
        Some(Some(values)) if values.len() == 1 => Ok(values.first()),
        Some(Some(values)) => Err(SymbolicError::Config(format!(
            "'{}' takes a single value, got {}",
            key,
            values.len()
        ))),
    }
}

fn boolean_value(section: &SectionMap, key: &str) -> Result<Option<bool>, SymbolicError> {
    single_value(section, key)?
        .map(|value| {
            value.as_boolean().ok_or_else(|| {
                SymbolicError::Config(format!("'{}' must be true or false, got '{}'", key, value))
            })
        })
        .transpose()
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the `engine` section of a task document; a document without it gives the defaults.
    pub fn from_document(input: &str) -> Result<Self, SymbolicError> {
        let document = parse_document_as(input, None).map_err(SymbolicError::Config)?;
        match document.get(ENGINE_SECTION) {
            Some(section) => Self::from_section(section),
            None => {
                info!("no '{}' section found, using default settings", ENGINE_SECTION);
                Ok(Self::default())
            }
        }
    }

    /// Builds the settings from an already parsed section
    pub fn from_section(section: &SectionMap) -> Result<Self, SymbolicError> {
        let mut config = Self::default();
        if let Some(rectify) = boolean_value(section, "rectify")? {
            config.rectify = rectify;
        }
        if let Some(simplify) = boolean_value(section, "simplify_results")? {
            config.simplify_results = simplify;
        }
        if let Some(value) = single_value(section, "variable")? {
            config.variable = variable_id(value)?;
        }
        if let Some(value) = single_value(section, "loglevel")? {
            let level = value.to_string();
            // reject unknown names early
            level_filter(Some(&level))?;
            config.loglevel = Some(level);
        }
        debug!("engine settings: {:?}", config);
        Ok(config)
    }

    /// Installs the logger at the configured level
    pub fn init_logger(&self) -> Result<(), SymbolicError> {
        init_logger(self.loglevel.as_deref())
    }

    /// Parses text with the configured implicit multiplication setting
    pub fn parse(&self, text: &str) -> Result<Expr, ParseError> {
        Expr::parse_with(text, self.rectify)
    }

    /// Derivative with respect to the configured variable, simplified if requested
    pub fn derivative(&self, expr: &Expr) -> Expr {
        let derivative = expr.differentiate(self.variable);
        if self.simplify_results {
            derivative.simplify()
        } else {
            derivative
        }
    }
}

// a variable id is one ASCII letter; `e` is Euler's number
fn variable_id(value: &Value) -> Result<char, SymbolicError> {
    let text = value.to_string();
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() && c != 'e' => Ok(c),
        _ => Err(SymbolicError::Config(format!(
            "'variable' must be a single letter other than 'e', got '{}'",
            text
        ))),
    }
}
