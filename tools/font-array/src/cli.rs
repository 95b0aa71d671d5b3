//! Command line parsing and [`Action`] construction.

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use crate::{TranscodeError, derive_output_path};

/// The log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// The action to carry out.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Action {
    /// No font was provided, so there is nothing to do.
    Nothing,
    /// Transcode a font with a specific configuration.
    Transcode(TranscodeConfig),
}

/// Description of the paths involved in a single transcode.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TranscodeConfig {
    /// The path to the binary font.
    pub input: PathBuf,
    /// The path to which the array should be written, if explicitly provided.
    pub output: Option<PathBuf>,
}

impl TranscodeConfig {
    /// Returns the path to which the array should be written.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::MissingFileName`] if no output path was provided and one could
    /// not be derived from [`TranscodeConfig::input`].
    pub fn output_path(&self) -> Result<PathBuf, TranscodeError> {
        match self.output {
            Some(ref output) => Ok(output.clone()),
            None => derive_output_path(&self.input),
        }
    }

    /// Returns the path to the binary font.
    pub fn input_path(&self) -> &Path {
        &self.input
    }
}

/// Parses the program's arguments to construct an [`Action`].
pub fn get_action() -> Action {
    parse_arguments(&command_parser().get_matches())
}

/// Parses the arguments required to produce an [`Action`].
pub fn parse_arguments(matches: &ArgMatches) -> Action {
    let Some(input) = matches.get_one::<PathBuf>("input").cloned() else {
        return Action::Nothing;
    };
    let output = matches.get_one::<PathBuf>("output").cloned();

    Action::Transcode(TranscodeConfig { input, output })
}

/// Returns the command parser for all [`Action`]s.
pub fn command_parser() -> Command {
    let input = Arg::new("input")
        .value_name("FONT")
        .help("Binary font to embed")
        .allow_hyphen_values(true)
        .value_parser(value_parser!(PathBuf));

    let output = Arg::new("output")
        .value_name("OUTPUT")
        .help("Path of the generated array [default: FONT up to its first '.', plus \".txt\"]")
        .allow_hyphen_values(true)
        .value_parser(value_parser!(PathBuf));

    // Anything after OUTPUT is accepted and ignored.
    let ignored = Arg::new("ignored")
        .num_args(1..)
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .trailing_var_arg(true)
        .hide(true);

    // Every argument is positional, so `-h` and `--version` are paths like any other.
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts a binary font into a source array literal and a length constant")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(input)
        .arg(output)
        .arg(ignored)
}

#[cfg(test)]
mod test {
    use std::{path::PathBuf, str::FromStr};

    use super::{Action, DEFAULT_LOG_FILTER, TranscodeConfig, command_parser, parse_arguments};

    fn action_from(args: &[&str]) -> Action {
        let matches = command_parser()
            .try_get_matches_from(std::iter::once("font-array").chain(args.iter().copied()))
            .unwrap();
        parse_arguments(&matches)
    }

    #[test]
    fn no_arguments_does_nothing() {
        assert_eq!(action_from(&[]), Action::Nothing);
    }

    #[test]
    fn input_only_derives_output() {
        let Action::Transcode(config) = action_from(&["glyphs.bin"]) else {
            panic!("expected a transcode action");
        };

        assert_eq!(
            config,
            TranscodeConfig {
                input: PathBuf::from("glyphs.bin"),
                output: None,
            }
        );
        assert_eq!(config.output_path().unwrap(), PathBuf::from("glyphs.txt"));
    }

    #[test]
    fn explicit_output_is_used() {
        let Action::Transcode(config) = action_from(&["font.v2.bin", "out/font.h"]) else {
            panic!("expected a transcode action");
        };

        assert_eq!(config.input_path(), PathBuf::from("font.v2.bin"));
        assert_eq!(config.output_path().unwrap(), PathBuf::from("out/font.h"));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let action = action_from(&["font.bin", "font.txt", "extra", "more"]);

        assert_eq!(
            action,
            Action::Transcode(TranscodeConfig {
                input: PathBuf::from("font.bin"),
                output: Some(PathBuf::from("font.txt")),
            })
        );
    }

    #[test]
    fn hyphenated_extra_arguments_are_ignored() {
        let expected = Action::Transcode(TranscodeConfig {
            input: PathBuf::from("font.bin"),
            output: Some(PathBuf::from("font.txt")),
        });

        assert_eq!(action_from(&["font.bin", "font.txt", "--verbose"]), expected);
        assert_eq!(action_from(&["font.bin", "font.txt", "-x"]), expected);
        assert_eq!(action_from(&["font.bin", "font.txt", "--help"]), expected);
        assert_eq!(
            action_from(&["font.bin", "font.txt", "extra", "--version", "-h"]),
            expected
        );
    }

    #[test]
    fn hyphenated_paths_are_accepted() {
        let Action::Transcode(config) = action_from(&["-font.bin"]) else {
            panic!("expected a transcode action");
        };
        assert_eq!(config.input_path(), PathBuf::from("-font.bin"));
        assert_eq!(config.output_path().unwrap(), PathBuf::from("-font.txt"));

        let action = action_from(&["--help", "-h"]);
        assert_eq!(
            action,
            Action::Transcode(TranscodeConfig {
                input: PathBuf::from("--help"),
                output: Some(PathBuf::from("-h")),
            })
        );
    }

    #[test]
    fn successful_runs_are_quiet_by_default() {
        let filter = log::LevelFilter::from_str(DEFAULT_LOG_FILTER).unwrap();

        assert_eq!(filter, log::LevelFilter::Warn);
        assert!(log::Level::Info > filter);
    }

    #[test]
    fn command_parser_is_valid() {
        command_parser().debug_assert();
    }
}
