use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::api::Matches;
use crate::matcher::{Consumed, Switch, Token, TokenKind, Tokens};
use crate::model::{Arity, Nargs, Value};
use crate::parser::{DefinitionError, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

static TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("static regex must compile"));

/// A post-processing function applied to the collected arguments of a multi-argument parameter.
pub type Transform = Arc<dyn Fn(Vec<String>) -> Value + Send + Sync>;

/// The configuration of a parameter.
///
/// ### Example
/// ```
/// # use opt_builder as opt;
/// use opt::{Command, ParameterConfig, Value};
///
/// let mut command = Command::new("program");
/// command
///     .option("--level, -l", ParameterConfig::default().nargs(1).default_value("1"))
///     .unwrap()
///     .option("--quiet, -q", ParameterConfig::default().name("silent"))
///     .unwrap();
///
/// let matches = command.parse(["-q"]).unwrap();
/// assert_eq!(matches.text("level"), Some("1"));
/// assert_eq!(matches.get("silent"), Some(&Value::Bool(true)));
/// ```
#[derive(Clone)]
pub struct ParameterConfig {
    name: Option<String>,
    default: Value,
    value: Value,
    nargs: Nargs,
    global: bool,
    help: Option<String>,
    transform: Option<Transform>,
}

impl Default for ParameterConfig {
    fn default() -> Self {
        Self {
            name: None,
            default: Value::Null,
            value: Value::Bool(true),
            nargs: Nargs::default(),
            global: false,
            help: None,
            transform: None,
        }
    }
}

impl std::fmt::Debug for ParameterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterConfig")
            .field("name", &self.name)
            .field("default", &self.default)
            .field("value", &self.value)
            .field("nargs", &self.nargs)
            .field("global", &self.global)
            .field("help", &self.help)
            .field("transform", &self.transform.as_ref().map(|_| ".."))
            .finish()
    }
}

impl ParameterConfig {
    /// Override the name the parameter is stored under.
    /// Otherwise, the name is the first switch (ex: `h` for `-h, --help`), or the free-text definition.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name.replace(name.into());
        self
    }

    /// The value stored before (or without) the parameter being matched.
    /// Defaults to [`Value::Null`].
    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    /// The value stored when a parameter with an arity of `0` is matched.
    /// Defaults to `Value::Bool(true)`.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// The number of arguments the parameter consumes when matched.
    /// Defaults to `0`.
    pub fn nargs(mut self, nargs: impl Into<Nargs>) -> Self {
        self.nargs = nargs.into();
        self
    }

    /// Offer the parameter in every sub-command below the command it is registered with.
    pub fn global(mut self) -> Self {
        self.global = true;
        self
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Post-process the collected arguments of a parameter (any arity other than `0` or `1`).
    ///
    /// ### Example
    /// ```
    /// # use opt_builder as opt;
    /// use opt::{Command, ParameterConfig, Value};
    ///
    /// let mut command = Command::new("program");
    /// command
    ///     .option(
    ///         "--sum, -s",
    ///         ParameterConfig::default()
    ///             .nargs("+")
    ///             .transform(|values| {
    ///                 let total: u32 = values.iter().filter_map(|v| v.parse::<u32>().ok()).sum();
    ///                 Value::Text(total.to_string())
    ///             }),
    ///     )
    ///     .unwrap();
    ///
    /// let matches = command.parse(["--sum", "1", "2", "3"]).unwrap();
    /// assert_eq!(matches.text("sum"), Some("6"));
    /// ```
    pub fn transform(
        mut self,
        transform: impl Fn(Vec<String>) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.transform.replace(Arc::new(transform));
        self
    }
}

/// A named parseable unit: one or more switches (or a free-text slot) plus an arity.
#[derive(Clone)]
pub struct Parameter {
    name: String,
    switches: Vec<Switch>,
    arity: Arity,
    default: Value,
    value: Value,
    global: bool,
    help: Option<String>,
    transform: Option<Transform>,
}

impl std::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let switches = self
            .switches
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "Parameter[{}, {switches}, {}]", self.name, self.arity)
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Parameter {
    pub(crate) fn new(definition: &str, config: ParameterConfig) -> Result<Self, DefinitionError> {
        let ParameterConfig {
            name,
            default,
            value,
            nargs,
            global,
            help,
            transform,
        } = config;
        let arity = nargs.arity()?;

        let (name, switches) = if TEXT_RE.is_match(definition) {
            let name = name.unwrap_or_else(|| definition.to_string());

            if arity.max() == Some(0) {
                return Err(DefinitionError::TextWithoutArguments(name));
            }

            (name, Vec::default())
        } else {
            let switches = Switch::parse_list(definition)?;
            let name = match name {
                Some(name) => name,
                None => switches
                    .first()
                    .map(|s| s.name().to_string())
                    .ok_or_else(|| DefinitionError::InvalidSwitch(definition.to_string()))?,
            };

            (name, switches)
        };

        Ok(Self {
            name,
            switches,
            arity,
            default,
            value,
            global,
            help,
            transform,
        })
    }

    /// The name the parameter is stored under in [`Matches`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved arity.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Whether this is a free-text parameter (no switches).
    pub fn is_text(&self) -> bool {
        self.switches.is_empty()
    }

    /// Whether this parameter is offered in descendant sub-commands.
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// The value stored when the parameter is not matched.
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    pub(crate) fn switches(&self) -> &[Switch] {
        &self.switches
    }

    pub(crate) fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Two parameters collide when they share a name or any switch.
    pub(crate) fn collides(&self, other: &Parameter) -> bool {
        self.name == other.name
            || self
                .switches
                .iter()
                .any(|switch| other.switches.contains(switch))
    }

    /// Try to match the front of the token stream, binding arguments into `matches` on success.
    pub(crate) fn try_parse(
        &self,
        tokens: &mut Tokens,
        matches: &mut Matches,
    ) -> Result<bool, ParseError> {
        if self.is_text() {
            if tokens.front().map_or(false, Token::is_text) {
                self.bind(Consumed::Whole, tokens, matches)?;
                return Ok(true);
            }

            return Ok(false);
        }

        for switch in &self.switches {
            if switch.matches(tokens) {
                let consumed = switch.consume(tokens);

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Parameter '{}' triggered by {switch} ({consumed:?}).", self.name);
                }

                self.bind(consumed, tokens, matches)?;
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn bind(
        &self,
        consumed: Consumed,
        tokens: &mut Tokens,
        matches: &mut Matches,
    ) -> Result<(), ParseError> {
        if self.arity.is_flag() {
            matches.insert(&self.name, self.value.clone());
            return Ok(());
        }

        let mut values: Vec<String> = Vec::default();

        match consumed {
            Consumed::Residual => {
                // The rest of a short group is glued to the switch: `-l5` or `-l=5`.
                let value = tokens
                    .pop_front()
                    .expect("internal error - a residual token must follow the switch")
                    .into_value();

                if let Some(stripped) = value.strip_prefix('=') {
                    values.push(stripped.to_string());
                } else {
                    values.push(value);
                }
            }
            Consumed::Whole => {
                if tokens.front().map_or(false, Token::is_text) {
                    while self.arity.is_open(values.len())
                        && tokens.front().map_or(false, Token::is_text)
                    {
                        let token = tokens.pop_front().expect("internal error - front was checked");
                        values.push(token.into_value());
                    }
                } else if !self.is_text()
                    && tokens.front().map_or(false, |t| t.kind() == TokenKind::Short)
                {
                    // At most one standalone short token is taken as an argument: `-l -5`.
                    let token = tokens.pop_front().expect("internal error - front was checked");
                    values.push(token.into_value());
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parameter '{}' collected {values:?}.", self.name);
        }

        if !self.arity.contains(values.len()) {
            return Err(ParseError::ArityMismatch {
                name: self.name.clone(),
                provided: values.len(),
                expected: self.arity,
            });
        }

        let value = if self.arity.is_single() {
            Value::Text(values.remove(0))
        } else {
            match &self.transform {
                Some(transform) => transform(values),
                None => Value::List(values),
            }
        };

        matches.insert(&self.name, value);
        Ok(())
    }
}
