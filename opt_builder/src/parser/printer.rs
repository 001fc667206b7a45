use terminal_size::{terminal_size, Width};

use crate::api::{Command, Parameter};
use crate::parser::ColumnRenderer;

const DEFAULT_TERMINAL_WIDTH: usize = 80;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// Renders the help message for a single command.
pub(crate) struct Printer<'a> {
    program: String,
    command: &'a Command,
    inherited: Vec<&'a Parameter>,
    total_width: usize,
}

impl<'a> Printer<'a> {
    /// Produce a printer sized to the current terminal (or a default width when there is none).
    pub(crate) fn terminal(program: impl Into<String>, command: &'a Command) -> Self {
        let total_width = if let Some((Width(width), _)) = terminal_size() {
            width as usize
        } else {
            DEFAULT_TERMINAL_WIDTH
        };

        Self::new(program, command, total_width)
    }

    pub(crate) fn new(program: impl Into<String>, command: &'a Command, total_width: usize) -> Self {
        Self {
            program: program.into(),
            command,
            inherited: Vec::default(),
            total_width,
        }
    }

    /// Include the global parameters inherited from ancestor commands.
    pub(crate) fn inherit(mut self, inherited: Vec<&'a Parameter>) -> Self {
        self.inherited = inherited;
        self
    }

    pub(crate) fn render(&self) -> String {
        let parameters: Vec<&Parameter> = self
            .inherited
            .iter()
            .copied()
            .chain(self.command.parameters())
            .collect();
        let (texts, options): (Vec<&Parameter>, Vec<&Parameter>) =
            parameters.into_iter().partition(|p| p.is_text());

        let mut summary = vec![format!("usage: {}", self.program)];
        let mut text_summary = Vec::default();
        let mut sections: Vec<(&str, Vec<(String, String)>)> = Vec::default();

        if !texts.is_empty() {
            let mut rows = Vec::default();

            for parameter in &texts {
                let grammar = placeholder(parameter);
                text_summary.push(grammar.clone());
                rows.push((grammar, describe(parameter)));
            }

            sections.push(("arguments:", rows));
        }

        if !options.is_empty() {
            let mut rows = Vec::default();

            for parameter in &options {
                let grammar = placeholder(parameter);
                let mut switches = parameter.switches().iter();
                // Summarize with the short switch when there is one.
                let summarized = parameter
                    .switches()
                    .iter()
                    .find(|s| s.is_short())
                    .or_else(|| parameter.switches().first())
                    .expect("internal error - option parameters must have a switch");
                summary.push(format!("[{}]", with_grammar(summarized.to_string(), &grammar)));

                let mut label = String::default();

                if let Some(first) = switches.next() {
                    label.push_str(&with_grammar(first.to_string(), &grammar));
                }

                for switch in switches {
                    label.push_str(", ");
                    label.push_str(&with_grammar(switch.to_string(), &grammar));
                }

                rows.push((label, describe(parameter)));
            }

            sections.push(("options:", rows));
        }

        summary.extend(text_summary);

        if !self.command.commands().is_empty() {
            let names: Vec<&str> = self.command.commands().iter().map(|c| c.name()).collect();
            summary.push(format!("{{{}}}", names.join(",")));
            let rows = self
                .command
                .commands()
                .iter()
                .map(|c| (c.name().to_string(), c.about().unwrap_or_default().to_string()))
                .collect();
            sections.push(("commands:", rows));
        }

        let label_width = sections
            .iter()
            .flat_map(|(_, rows)| rows.iter().map(|(label, _)| label.chars().count()))
            .max()
            .unwrap_or(0);
        let renderer =
            ColumnRenderer::guided(MAIN_INDENT, label_width, PADDING_WIDTH, self.total_width);
        let mut lines = vec![summary.join(" ")];

        if let Some(about) = self.command.about() {
            lines.push(String::default());
            lines.push(about.to_string());
        }

        for (title, rows) in sections {
            lines.push(String::default());
            lines.push(title.to_string());

            for (label, text) in rows {
                lines.extend(renderer.render(&label, &text));
            }
        }

        lines.join("\n")
    }
}

fn with_grammar(switch: String, grammar: &str) -> String {
    if grammar.is_empty() {
        switch
    } else {
        format!("{switch} {grammar}")
    }
}

fn describe(parameter: &Parameter) -> String {
    parameter.help().unwrap_or_default().to_string()
}

// Beyond this many repetitions, a placeholder is abbreviated with its total count.
const REPEAT_LIMIT: usize = 3;

// The argument placeholder of the parameter, ex: `NAME NAME [NAME]`.
fn placeholder(parameter: &Parameter) -> String {
    let example = parameter.name().to_ascii_uppercase().replace('-', "_");
    let arity = parameter.arity();
    let mut parts: Vec<String> = if arity.min() > REPEAT_LIMIT {
        vec![format!("{example} ...{}", arity.min())]
    } else {
        (0..arity.min()).map(|_| example.clone()).collect()
    };

    match arity.max() {
        None if arity.min() == 0 => parts.push(format!("[{example} ...]")),
        None => parts.push("[...]".to_string()),
        Some(max) if max - arity.min() > REPEAT_LIMIT => parts.push(format!("[{example} ...{max}]")),
        Some(max) => parts.extend((arity.min()..max).map(|_| format!("[{example}]"))),
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommandConfig, ParameterConfig};
    use crate::test::assert_contains;
    use rstest::rstest;

    fn flag() -> ParameterConfig {
        ParameterConfig::default()
    }

    #[rstest]
    #[case("--verbose", flag(), "")]
    #[case("--level", flag().nargs(1), "LEVEL")]
    #[case("--pair", flag().nargs(2), "PAIR PAIR")]
    #[case("--maybe", flag().nargs(0..=1), "[MAYBE]")]
    #[case("--span", flag().nargs(1..=3), "SPAN [SPAN] [SPAN]")]
    #[case("--any", flag().nargs("*"), "[ANY ...]")]
    #[case("--some", flag().nargs("+"), "SOME [...]")]
    #[case("--many", flag().nargs(2..), "MANY MANY [...]")]
    #[case("--dry-run", flag().nargs(1), "DRY_RUN")]
    #[case("--four", flag().nargs(4), "FOUR ...4")]
    #[case("--wide", flag().nargs(1..=10), "WIDE [WIDE ...10]")]
    #[case("--huge", flag().nargs(0..=50_000_000), "[HUGE ...50000000]")]
    #[case("--both", flag().nargs(5..=9), "BOTH ...5 [BOTH ...9]")]
    #[case("file", flag().nargs(1), "FILE")]
    fn placeholders(
        #[case] definition: &str,
        #[case] config: ParameterConfig,
        #[case] expected: &str,
    ) {
        let parameter = Parameter::new(definition, config).unwrap();
        assert_eq!(placeholder(&parameter), expected);
    }

    #[test]
    fn render_wide_arity() {
        let mut command = Command::new("program");
        command
            .option("--huge", flag().nargs(0..=50_000_000))
            .unwrap();

        let message = Printer::new("program", &command, 80).render();

        assert_eq!(
            message,
            "usage: program [--huge [HUGE ...50000000]]\n\noptions:\n --huge [HUGE ...50000000]"
        );
    }

    #[test]
    fn render_empty() {
        let command = Command::new("program");
        assert_eq!(Printer::new("program", &command, 80).render(), "usage: program");
    }

    #[test]
    fn render_options() {
        // Setup
        let mut command = Command::with_config(
            "program",
            CommandConfig::default().about("Does the thing."),
        );
        command
            .option("-h, --help", flag().help("Show this help message."))
            .unwrap()
            .option("--level, -l", flag().nargs(1).help("The level."))
            .unwrap()
            .option("files", flag().nargs("+"))
            .unwrap();

        // Execute
        let message = Printer::new("program", &command, 80).render();

        // Verify
        assert_eq!(
            message,
            "usage: program [-h] [-l LEVEL] FILES [...]

Does the thing.

arguments:
 FILES [...]

options:
 -h, --help                Show this help message.
 --level LEVEL, -l LEVEL   The level."
        );
    }

    #[test]
    fn render_commands() {
        let mut command = Command::new("git");
        command
            .option("--verbose", flag().global())
            .unwrap()
            .command("add", CommandConfig::default().about("Add files."), |_| Ok(()))
            .unwrap()
            .command("remove", CommandConfig::default(), |_| Ok(()))
            .unwrap();

        let message = Printer::new("git", &command, 80).render();

        assert_contains!(message, "usage: git [--verbose] {add,remove}\n");
        assert_contains!(message, "\ncommands:\n");
        assert_contains!(message, "\n add         Add files.\n");
        assert_contains!(message, "\n remove");
    }

    #[test]
    fn render_inherited() {
        let mut command = Command::new("git");
        command
            .option("--verbose", flag().global().help("Say more."))
            .unwrap()
            .command("add", CommandConfig::default(), |add| {
                add.option("-a", flag())?;
                Ok(())
            })
            .unwrap();
        let add = command.find_command("add").unwrap();

        let message = Printer::new("git add", add, 80)
            .inherit(command.parameters().iter().collect())
            .render();

        assert_contains!(message, "usage: git add [--verbose] [-a]\n");
        assert_contains!(message, "\n --verbose   Say more.");
    }

    #[test]
    fn render_wrapped() {
        let mut command = Command::new("program");
        command
            .option(
                "--verbose",
                flag().help("One two three four five six seven eight nine ten."),
            )
            .unwrap();

        let message = Printer::new("program", &command, 20).render();

        assert_eq!(
            message,
            "usage: program [--verbose]

options:
 --verbose   One two three
             four five six
             seven eight nine
             ten."
        );
    }
}
