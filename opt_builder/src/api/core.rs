use crate::api::{Matches, Parameter, ParameterConfig};
use crate::matcher::tokenize;
use crate::parser::{ConsoleInterface, DefinitionError, GeneralParser, ParseError, Parser, Printer};

/// The configuration of a command.
#[derive(Debug, Clone, Default)]
pub struct CommandConfig {
    about: Option<String>,
}

impl CommandConfig {
    /// Document the about message for this command.
    /// If repeated, only the final about message will apply.
    ///
    /// An about message documents the command in full sentence/paragraph format.
    /// We recommend allowing `opt` to format this field (ex: it is not recommended to use line breaks `'\n'`).
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }
}

/// A command: its parameters and nested sub-commands.
///
/// Configure a command once, then parse any number of inputs with it.
/// A configured command is immutable during parsing, and may be shared across threads.
///
/// ### Example
/// ```
/// # use opt_builder as opt;
/// use opt::{Command, ParameterConfig};
///
/// let mut command = Command::new("program");
/// command
///     .option("--help, -h", ParameterConfig::default())
///     .unwrap()
///     .option("--level, -l", ParameterConfig::default().nargs(1))
///     .unwrap()
///     .option("file", ParameterConfig::default().name("files").nargs("*"))
///     .unwrap();
///
/// let matches = command.parse(["-h", "--level=5", "a.txt", "b.txt"]).unwrap();
/// assert!(matches.flag("help"));
/// assert_eq!(matches.text("level"), Some("5"));
/// assert_eq!(matches.list("files").unwrap(), &["a.txt".to_string(), "b.txt".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    about: Option<String>,
    parameters: Vec<Parameter>,
    commands: Vec<Command>,
}

impl Command {
    /// Create a command.
    /// The root command is usually named after the program.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, CommandConfig::default())
    }

    /// Create a command with an explicit configuration.
    pub fn with_config(name: impl Into<String>, config: CommandConfig) -> Self {
        Self {
            name: name.into(),
            about: config.about,
            parameters: Vec::default(),
            commands: Vec::default(),
        }
    }

    /// The command name; sub-commands are selected by this name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The about message, if documented.
    pub fn about(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// The registered parameters, in registration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// The registered sub-commands, in registration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub(crate) fn find_command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    // The first parameter in this command's tree that collides with `parameter`.
    fn find_collision(&self, parameter: &Parameter) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|existing| existing.collides(parameter))
            .or_else(|| {
                self.commands
                    .iter()
                    .find_map(|command| command.find_collision(parameter))
            })
    }

    /// Register a parameter.
    ///
    /// A dashed `definition` is a comma separated list of switches (ex: `-h, --help`).
    /// An un-dashed single word `definition` is a free-text parameter, which matches plain input tokens.
    ///
    /// The order of parameters is the order they are offered input tokens during parsing.
    ///
    /// Fails when the definition is malformed, when the parameter collides (by name or switch) with a registered parameter,
    /// or when a free-text parameter is added to a command with sub-commands.
    ///
    /// ### Example
    /// ```
    /// # use opt_builder as opt;
    /// use opt::{Command, DefinitionError, ParameterConfig};
    ///
    /// let mut command = Command::new("program");
    /// command.option("-v, --verbose", ParameterConfig::default()).unwrap();
    ///
    /// assert_eq!(
    ///     command.option("--version, -v", ParameterConfig::default()).unwrap_err(),
    ///     DefinitionError::Collision {
    ///         definition: "--version, -v".to_string(),
    ///         existing: "v".to_string(),
    ///     }
    /// );
    /// ```
    pub fn option(
        &mut self,
        definition: &str,
        config: ParameterConfig,
    ) -> Result<&mut Self, DefinitionError> {
        let parameter = Parameter::new(definition, config)?;

        if parameter.is_text() && !self.commands.is_empty() {
            return Err(DefinitionError::MixedTextAndCommands(self.name.clone()));
        }

        // A global parameter must not collide anywhere below this command either.
        let existing = if parameter.is_global() {
            self.find_collision(&parameter)
        } else {
            self.parameters
                .iter()
                .find(|existing| existing.collides(&parameter))
        };

        if let Some(existing) = existing {
            return Err(DefinitionError::Collision {
                definition: definition.to_string(),
                existing: existing.name().to_string(),
            });
        }

        self.parameters.push(parameter);
        Ok(self)
    }

    /// Register a sub-command, configured by `setup_fn`.
    ///
    /// After a sub-command's name is matched in the input, parsing continues with the sub-command's parameters
    /// (plus any global parameters of its ancestors).
    ///
    /// Fails when the name is already registered, when this command has a free-text parameter,
    /// when the sub-command collides with a global parameter of this command, or when `setup_fn` fails.
    ///
    /// ### Example
    /// ```
    /// # use opt_builder as opt;
    /// use opt::{Command, CommandConfig, ParameterConfig};
    ///
    /// let mut command = Command::new("program");
    /// command
    ///     .option("--verbose, -v", ParameterConfig::default().global())
    ///     .unwrap()
    ///     .command("add", CommandConfig::default().about("Add things."), |add| {
    ///         add.option("--num, -n", ParameterConfig::default().nargs(1))?;
    ///         Ok(())
    ///     })
    ///     .unwrap();
    ///
    /// let matches = command.parse(["add", "-n", "3", "-v"]).unwrap();
    /// assert_eq!(matches.commands(), &["add".to_string()]);
    /// assert_eq!(matches.text("num"), Some("3"));
    /// assert!(matches.flag("verbose"));
    /// ```
    pub fn command(
        &mut self,
        name: impl Into<String>,
        config: CommandConfig,
        setup_fn: impl FnOnce(&mut Command) -> Result<(), DefinitionError>,
    ) -> Result<&mut Self, DefinitionError> {
        let name = name.into();

        if self.parameters.iter().any(Parameter::is_text) {
            return Err(DefinitionError::MixedTextAndCommands(self.name.clone()));
        }

        if self.find_command(&name).is_some() {
            return Err(DefinitionError::DuplicateCommand(name));
        }

        let mut command = Command::with_config(name, config);
        setup_fn(&mut command)?;

        for global in self.parameters.iter().filter(|p| p.is_global()) {
            if let Some(existing) = command.find_collision(global) {
                return Err(DefinitionError::Collision {
                    definition: existing.name().to_string(),
                    existing: global.name().to_string(),
                });
            }
        }

        self.commands.push(command);
        Ok(self)
    }

    /// Parse the input tokens (not including the program name).
    ///
    /// The result holds the default of every parameter of every visited command, overwritten by the matched parameters.
    /// On error, nothing of the partial parse is returned.
    pub fn parse<I, S>(&self, inputs: I) -> Result<Matches, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Parser::new(self).consume(tokenize(inputs))
    }

    /// Render the help message of this command, sized to the terminal.
    pub fn help(&self) -> String {
        Printer::terminal(self.name.clone(), self).render()
    }

    /// Build the console facing parser.
    /// See [`GeneralParser`].
    pub fn build(self) -> GeneralParser {
        GeneralParser::new(self, Box::new(ConsoleInterface::default()))
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build the parser, directing all of its output into `user_interface`.
    #[cfg(feature = "unit_test")]
    pub fn build_with_interface(
        self,
        user_interface: Box<dyn crate::UserInterface>,
    ) -> GeneralParser {
        GeneralParser::new(self, user_interface)
    }
}
