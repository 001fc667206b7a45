use std::collections::BTreeMap;

use crate::model::Value;

/// The result of a parse: parameter values by name, plus the trail of matched sub-commands.
///
/// Every parameter of every visited command is present, holding its default when it wasn't matched.
///
/// ### Example
/// ```
/// # use opt_builder as opt;
/// use opt::{Command, CommandConfig, ParameterConfig, Value};
///
/// let mut command = Command::new("program");
/// command
///     .option("--force, -f", ParameterConfig::default().default_value(false))
///     .unwrap()
///     .command("add", CommandConfig::default(), |add| {
///         add.option("-a", ParameterConfig::default().name("all"))?;
///         Ok(())
///     })
///     .unwrap();
///
/// let matches = command.parse(["-f", "add", "-a"]).unwrap();
/// assert!(matches.flag("force"));
/// assert!(matches.flag("all"));
/// assert_eq!(matches.commands(), &["add".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    values: BTreeMap<String, Value>,
    commands: Vec<String>,
}

impl Matches {
    /// The value stored for the parameter `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a value (including a default) is stored for the parameter `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Whether the parameter `name` holds `Value::Bool(true)`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(Value::Bool(true)))
    }

    /// The single argument stored for the parameter `name`, if it holds one.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Value::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// The arguments stored for the parameter `name`, if it holds a list.
    pub fn list(&self, name: &str) -> Option<&[String]> {
        match self.values.get(name) {
            Some(Value::List(values)) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// The matched sub-command names, outermost first.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Iterate all stored values, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Store `value` only if nothing is stored for `name` yet.
    pub(crate) fn seed(&mut self, name: &str, value: &Value) {
        if !self.values.contains_key(name) {
            self.values.insert(name.to_string(), value.clone());
        }
    }

    pub(crate) fn push_command(&mut self, name: &str) {
        self.commands.push(name.to_string());
    }
}
