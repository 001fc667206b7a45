use std::env;

use crate::api::{Command, Matches, Parameter};
use crate::model::Value;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// The parameter which, when `true`, requests the help message instead of a result.
const HELP_NAME: &str = "help";

/// The configured command line parser.
/// Built via [`Command::build`].
pub struct GeneralParser {
    command: Command,
    user_interface: Box<dyn UserInterface>,
}

impl GeneralParser {
    pub(crate) fn new(command: Command, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            command,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens.
    ///
    /// If the parse fails (ex: an unknown token, a wrong number of arguments), the error is displayed and this returns `Err(1)`.
    ///
    /// If the deepest matched command offers a parameter named `help` and it was triggered,
    /// that command's help message is displayed and this returns `Err(0)`.
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
    ///     .option("--level", ParameterConfig::default().nargs(1))
    ///     .unwrap();
    /// let parser = command.build();
    ///
    /// let matches = parser.parse_tokens(&["--level", "5"]).unwrap();
    /// assert_eq!(matches.text("level"), Some("5"));
    /// ```
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<Matches, i32> {
        let matches = match self.command.parse(tokens) {
            Ok(matches) => matches,
            Err(error) => {
                self.user_interface.print_error(error);
                return Err(1);
            }
        };

        let mut program = self.command.name().to_string();
        let mut command = &self.command;
        let mut inherited: Vec<&Parameter> = Vec::default();

        for name in matches.commands() {
            inherited.extend(command.parameters().iter().filter(|p| p.is_global()));
            command = command
                .find_command(name)
                .expect("internal error - matched commands must exist in the tree");
            program.push(' ');
            program.push_str(name);
        }

        let offers_help = inherited
            .iter()
            .copied()
            .chain(command.parameters())
            .any(|p| p.name() == HELP_NAME);

        if offers_help && matches.get(HELP_NAME) == Some(&Value::Bool(true)) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help requested for '{program}'.");
            }

            let message = Printer::terminal(program, command)
                .inherit(inherited)
                .render();
            self.user_interface.print(message);
            return Err(0);
        }

        Ok(matches)
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// Behaves as [`GeneralParser::parse_tokens`], except that rather than returning an error code it exits the process with that code (via `std::process::exit`).
    pub fn parse(&self) -> Matches {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(matches) => matches,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }
}
