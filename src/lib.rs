//! `opt` is a declarative command line parser for Rust.
//!
//! A command line interface is described as a tree of [`Command`]s.
//! Each command holds a list of *parameters* and may hold nested sub-commands.
//! Parsing a list of input tokens against the tree produces a [`Matches`]: a string-keyed mapping from parameter name to [`Value`], plus the trail of sub-commands that were entered.
//!
//! `opt` makes no attempt to convert values into program types.
//! Values are kept as text (or lists of text), unless the parameter is configured with a transform.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! ```console
//! $ summer -h
//! usage: summer [-h] ITEM [...]
//!
//! Sum the items.
//!
//! arguments:
//!  ITEM [...]   The items to sum.
//!
//! options:
//!  --help, -h   Show this help message and exit.
//!
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer 1 --bogus
//! Parse error: Unknown option (long): --bogus
//! ```
//!
//! # Parameters
//! Parameters are registered via [`Command::option`], which takes a *definition* and a [`ParameterConfig`].
//!
//! The definition decides how the parameter is triggered:
//! * A comma separated list of switches (ex: `"-l, --level"`).
//! Short switches (`-l`) are a single dash and a single character; long switches (`--level`) are two dashes.
//! The parameter is named after the first switch, unless configured otherwise via [`ParameterConfig::name`].
//! * A bare word (ex: `"file"`) defines a *free-text* parameter.
//! Free-text parameters are triggered by any non-dashed token.
//!
//! The argument count of a parameter is configured via [`ParameterConfig::nargs`] (see [`Nargs`]).
//! By default, switch parameters take no arguments, and store their trigger value ([`ParameterConfig::value`], `true` by default) when matched.
//!
//! The following inputs are all equivalent, for a parameter `"--level, -l"` taking one argument:
//! ```console
//! $ program --level 5
//! $ program --level=5
//! $ program -l 5
//! $ program -l5
//! ```
//!
//! Grouped short switches (ex: `-af`) trigger each switch in turn.
//! Everything after a `--` token is treated as free-text, regardless of any dashes.
//!
//! # Sub-commands
//! Sub-commands are registered via [`Command::command`].
//! A command holds either sub-commands or free-text parameters, never both.
//!
//! When a non-dashed token names a sub-command, parsing continues within that sub-command.
//! Parameters of the parent are no longer matched, except those configured as [`ParameterConfig::global`].
//!
//! ```no_run
#![doc = include_str!("../demos/git_like.rs")]
//! ```
//!
//! ```console
//! $ git-like -v remote rename origin upstream
//! help: Null
//! names: List(["origin", "upstream"])
//! verbose: Bool(true)
//! Renaming 'origin' to 'upstream'.
//!
//! $ git-like add -h
//! usage: git-like add [-h] [-v] [-A] [PATHS ...]
//!
//! Add file contents to the index.
//!
//! arguments:
//!  [PATHS ...]     The files to add.
//!
//! options:
//!  --help, -h      Show this help message and exit.
//!  --verbose, -v   Print more details.
//!  --all, -A       Add all the files.
//! ```
//!
//! # Errors
//! Mistakes in the interface definition are reported when they are registered, as a [`DefinitionError`].
//! Mistakes in the input are reported by [`Command::parse`] as a [`ParseError`]; the first mistake aborts the parse.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit debug logs via [`tracing`](https://docs.rs/tracing).
pub use opt_builder::*;
