use crate::api::{Command, Matches, Parameter};
use crate::matcher::Tokens;
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Drives the parse of a token stream through a command tree.
pub(crate) struct Parser<'a> {
    root: &'a Command,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(root: &'a Command) -> Self {
        Self { root }
    }

    pub(crate) fn consume(&self, mut tokens: Tokens) -> Result<Matches, ParseError> {
        let mut matches = Matches::default();

        for parameter in self.root.parameters() {
            matches.insert(parameter.name(), parameter.default_value().clone());
        }

        descend(self.root, &mut tokens, &mut matches, Vec::default())?;
        Ok(matches)
    }
}

// Parse within `command` until the tokens run out.
// `inherited` holds the global parameters of the command's ancestors, outermost first.
fn descend<'a>(
    command: &'a Command,
    tokens: &mut Tokens,
    matches: &mut Matches,
    mut inherited: Vec<&'a Parameter>,
) -> Result<(), ParseError> {
    let offered: Vec<&Parameter> = inherited
        .iter()
        .copied()
        .chain(command.parameters())
        .collect();

    'tokens: while !tokens.is_empty() {
        // Always restart from the first parameter: a matched switch may expose a new token (ex: `-abc` -> `-bc`).
        for parameter in &offered {
            if parameter.try_parse(tokens, matches)? {
                continue 'tokens;
            }
        }

        let token = tokens
            .pop_front()
            .expect("internal error - tokens must not be empty");

        if token.is_text() {
            if let Some(sub_command) = command.find_command(token.value()) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Dispatching from '{}' to sub-command '{}'.",
                        command.name(),
                        sub_command.name()
                    );
                }

                matches.push_command(sub_command.name());

                for parameter in sub_command.parameters() {
                    matches.seed(parameter.name(), parameter.default_value());
                }

                inherited.extend(command.parameters().iter().filter(|p| p.is_global()));
                return descend(sub_command, tokens, matches, inherited);
            }
        }

        return Err(ParseError::UnknownToken {
            kind: token.kind(),
            token: token.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommandConfig, ParameterConfig};
    use crate::matcher::{tokenize, TokenKind};
    use crate::model::Value;
    use rstest::rstest;

    fn flag() -> ParameterConfig {
        ParameterConfig::default()
    }

    fn parse(command: &Command, inputs: Vec<&str>) -> Result<Matches, ParseError> {
        Parser::new(command).consume(tokenize(inputs))
    }

    #[test]
    fn empty() {
        let command = Command::new("program");
        let matches = parse(&command, vec![]).unwrap();
        assert_eq!(matches, Matches::default());
    }

    #[test]
    fn defaults_seeded() {
        let mut command = Command::new("program");
        command
            .option("--help", flag())
            .unwrap()
            .option("--version", flag().default_value(false))
            .unwrap();

        let matches = parse(&command, vec!["--help"]).unwrap();
        assert_eq!(matches.get("help"), Some(&Value::Bool(true)));
        assert_eq!(matches.get("version"), Some(&Value::Bool(false)));

        let matches = parse(&command, vec![]).unwrap();
        assert_eq!(matches.get("help"), Some(&Value::Null));
        assert!(!matches.flag("help"));
    }

    #[rstest]
    #[case(vec!["-h"])]
    #[case(vec!["--help"])]
    fn short_and_long(#[case] inputs: Vec<&str>) {
        let mut command = Command::new("program");
        command.option("-h, --help", flag()).unwrap();

        let matches = parse(&command, inputs).unwrap();
        assert!(matches.flag("h"));
    }

    #[rstest]
    #[case(vec!["-af"])]
    #[case(vec!["-fa"])]
    #[case(vec!["-a", "-f"])]
    fn grouped_short(#[case] inputs: Vec<&str>) {
        let mut command = Command::new("program");
        command
            .option("-a", flag())
            .unwrap()
            .option("-f", flag())
            .unwrap();

        let matches = parse(&command, inputs).unwrap();
        assert!(matches.flag("a"));
        assert!(matches.flag("f"));
    }

    #[test]
    fn grouped_short_with_argument() {
        let mut command = Command::new("program");
        command
            .option("-v", flag())
            .unwrap()
            .option("-l", flag().nargs(1))
            .unwrap();

        let matches = parse(&command, vec!["-vl5"]).unwrap();
        assert!(matches.flag("v"));
        assert_eq!(matches.text("l"), Some("5"));
    }

    #[test]
    fn double_dash() {
        let mut command = Command::new("program");
        command
            .option("-v", flag().name("version"))
            .unwrap()
            .option("rest", flag().nargs(0..))
            .unwrap();

        let matches = parse(&command, vec!["-v", "--", "-h"]).unwrap();
        assert!(matches.flag("version"));
        assert_eq!(matches.get("rest"), Some(&Value::from(vec!["-h"])));
    }

    #[test]
    fn free_text_first_wins() {
        let mut command = Command::new("program");
        command
            .option("first", flag().nargs(0..=2))
            .unwrap()
            .option("second", flag().nargs(1))
            .unwrap();

        let matches = parse(&command, vec!["a", "b", "c"]).unwrap();
        // The first free-text parameter is always offered first: it claims `c` as well.
        assert_eq!(matches.get("first"), Some(&Value::from(vec!["c"])));
        assert_eq!(matches.get("second"), Some(&Value::Null));
    }

    #[rstest]
    #[case(vec!["--bogus"], TokenKind::Long, "--bogus")]
    #[case(vec!["-x"], TokenKind::Short, "-x")]
    #[case(vec!["-vx"], TokenKind::Short, "-x")]
    #[case(vec!["stray"], TokenKind::Text, "stray")]
    #[case(vec!["-v", "--level=5"], TokenKind::Long, "--level=5")]
    fn unknown_token(#[case] inputs: Vec<&str>, #[case] kind: TokenKind, #[case] token: &str) {
        let mut command = Command::new("program");
        command.option("-v", flag()).unwrap();

        assert_eq!(
            parse(&command, inputs).unwrap_err(),
            ParseError::UnknownToken {
                kind,
                token: token.to_string(),
            }
        );
    }

    #[test]
    fn unknown_token_message() {
        let command = Command::new("program");
        assert_eq!(
            parse(&command, vec!["--bogus"]).unwrap_err().to_string(),
            "Unknown option (long): --bogus"
        );
    }

    fn git() -> Command {
        let mut command = Command::new("git");
        command
            .option("-f", flag())
            .unwrap()
            .option("--verbose, -V", flag().global().default_value(false))
            .unwrap()
            .command("add", CommandConfig::default(), |add| {
                add.option("-a", flag().default_value(false))?
                    .option("path", flag().nargs("*"))?;
                Ok(())
            })
            .unwrap()
            .command("remote", CommandConfig::default(), |remote| {
                remote
                    .option("--quiet, -q", flag().global())?
                    .command("rename", CommandConfig::default(), |rename| {
                        rename.option("names", flag().nargs(2))?;
                        Ok(())
                    })?;
                Ok(())
            })
            .unwrap();
        command
    }

    #[test]
    fn sub_command() {
        let matches = parse(&git(), vec!["-f", "add", "-a"]).unwrap();
        assert!(matches.flag("f"));
        assert!(matches.flag("a"));
        assert_eq!(matches.commands(), &["add".to_string()]);
        assert_eq!(matches.get("path"), Some(&Value::Null));
    }

    #[test]
    fn sub_command_defaults_only_when_visited() {
        let matches = parse(&git(), vec!["-f"]).unwrap();
        assert!(matches.commands().is_empty());
        assert!(!matches.contains("a"));
        assert!(matches.contains("verbose"));
    }

    #[test]
    fn parent_parameter_not_inherited() {
        assert_eq!(
            parse(&git(), vec!["add", "-f"]).unwrap_err(),
            ParseError::UnknownToken {
                kind: TokenKind::Short,
                token: "-f".to_string(),
            }
        );
    }

    #[rstest]
    #[case(vec!["add", "-V"])]
    #[case(vec!["add", "--verbose", "x"])]
    #[case(vec!["remote", "rename", "-V", "a", "b"])]
    fn global_parameter(#[case] inputs: Vec<&str>) {
        let matches = parse(&git(), inputs).unwrap();
        assert!(matches.flag("verbose"));
    }

    #[test]
    fn nested_sub_commands() {
        let matches = parse(&git(), vec!["remote", "-q", "rename", "old", "new", "-q"]).unwrap();
        assert_eq!(
            matches.commands(),
            &["remote".to_string(), "rename".to_string()]
        );
        assert!(matches.flag("quiet"));
        assert_eq!(matches.get("names"), Some(&Value::from(vec!["old", "new"])));
    }

    #[test]
    fn sub_command_is_text_only() {
        assert_eq!(
            parse(&git(), vec!["--add"]).unwrap_err(),
            ParseError::UnknownToken {
                kind: TokenKind::Long,
                token: "--add".to_string(),
            }
        );
    }

    #[test]
    fn unknown_sub_command() {
        assert_eq!(
            parse(&git(), vec!["commit"]).unwrap_err(),
            ParseError::UnknownToken {
                kind: TokenKind::Text,
                token: "commit".to_string(),
            }
        );
    }

    #[test]
    fn arity_error_aborts() {
        assert_eq!(
            parse(&git(), vec!["remote", "rename", "a"]).unwrap_err(),
            ParseError::ArityMismatch {
                name: "names".to_string(),
                provided: 1,
                expected: crate::model::Arity::new(2, Some(2)),
            }
        );
    }
}
