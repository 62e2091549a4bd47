use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, ErrorKind, FromArgMatches, Parser};
use log::{debug, error};
use rand::thread_rng;

use fixture_gen::{
    generate_file, Faker, FixtureError, GenerationContext, GenerationSummary, ShapeKind,
};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Writes a CSV file of fake CRM records", long_about = None)]
pub struct Cli {
    /// The CSV file to write, created or overwritten
    pub(crate) output_file: PathBuf,
    /// How many records to generate
    pub(crate) count: u64,
    /// Anything after `count` is ignored
    #[clap(hide = true, parse(from_os_str))]
    pub(crate) _rest: Vec<OsString>,
}

/// What a binary does with the result of a run.
#[derive(Debug)]
pub enum Outcome {
    /// Print the summary and exit 0.
    Done(GenerationSummary),
    /// Print the argument error, then the usage line on stdout, and exit 1.
    Usage(String),
    Failed(FixtureError),
}

impl Outcome {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Done(_) => 0,
            Outcome::Usage(_) | Outcome::Failed(_) => 1,
        }
    }
}

impl From<Result<GenerationSummary, FixtureError>> for Outcome {
    fn from(result: Result<GenerationSummary, FixtureError>) -> Self {
        match result {
            Ok(summary) => Outcome::Done(summary),
            Err(FixtureError::InvalidArgument(message)) => Outcome::Usage(message),
            Err(e) => Outcome::Failed(e),
        }
    }
}

#[must_use]
pub fn usage(kind: ShapeKind) -> String {
    format!("Usage: {} <output_file> <count>", kind.tool_name())
}

/// # Errors
/// Errors with `InvalidArgument` when an argument is missing or `count` is not a non-negative integer
pub fn parse_args<I, T>(kind: ShapeKind, args: I) -> Result<Cli, FixtureError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::command()
        .name(kind.tool_name())
        .try_get_matches_from(args)
        .and_then(|matches| Cli::from_arg_matches(&matches))
        .map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => FixtureError::InvalidArgument(e.to_string()),
        })
}

/// # Errors
/// Errors when the arguments are invalid or the fixture cannot be generated
pub fn run<I, T>(kind: ShapeKind, args: I) -> Result<GenerationSummary, FixtureError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = parse_args(kind, args)?;
    debug!("{cli:?}");
    let shape = kind.shape()?;
    let mut ctx = GenerationContext::new(thread_rng(), Faker::default());
    generate_file(&shape, cli.count, &cli.output_file, &mut ctx)
}

/// Entry point shared by the generator binaries.
///
/// Invalid arguments print the usage line and exit with status 1 before anything is written.
///
/// # Errors
/// Errors when the fixture cannot be generated
pub fn main_for(kind: ShapeKind) -> Result<(), Box<dyn Error>> {
    let outcome = Outcome::from(run(kind, std::env::args_os()));
    let code = outcome.exit_code();
    match outcome {
        Outcome::Done(summary) => {
            println!("{summary}");
            Ok(())
        }
        Outcome::Usage(message) => {
            eprint!("{message}");
            println!("{}", usage(kind));
            process::exit(code);
        }
        Outcome::Failed(e) => {
            error!("Generating {kind} failed: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = parse_args(ShapeKind::Contacts, ["generate_contacts", "out.csv", "12"]).unwrap();
        assert_eq!(cli.output_file, PathBuf::from("out.csv"));
        assert_eq!(cli.count, 12);
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let cli = parse_args(
            ShapeKind::Organizations,
            ["generate_organizations", "o.csv", "3", "extra", "more"],
        )
        .unwrap();
        assert_eq!(cli.output_file, PathBuf::from("o.csv"));
        assert_eq!(cli.count, 3);
    }

    #[test]
    fn test_missing_count() {
        let result = parse_args(ShapeKind::Organizations, ["generate_organizations", "out.csv"]);
        assert!(matches!(result, Err(FixtureError::InvalidArgument(_))));

        let result = parse_args(ShapeKind::Organizations, ["generate_organizations"]);
        assert!(matches!(result, Err(FixtureError::InvalidArgument(_))));
    }

    #[test]
    fn test_malformed_count() {
        for count in ["ten", "1.5", "-3"] {
            let result = parse_args(ShapeKind::Contacts, ["generate_contacts", "out.csv", count]);
            assert!(matches!(result, Err(FixtureError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_usage() {
        assert_eq!(
            usage(ShapeKind::Organizations),
            "Usage: generate_organizations <output_file> <count>"
        );
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.csv");
        let args = [
            OsString::from("generate_contacts"),
            path.clone().into_os_string(),
            OsString::from("5"),
        ];
        let summary = run(ShapeKind::Contacts, args).unwrap();
        assert_eq!(summary.count, 5);
        assert_eq!(
            summary.to_string(),
            format!("Done: '{}' generated with 5 unique contacts.", path.display())
        );
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 6);
    }

    #[test]
    fn test_run_with_bad_args_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("organizations.csv");
        let args = [
            OsString::from("generate_organizations"),
            path.clone().into_os_string(),
            OsString::from("many"),
        ];
        let outcome = Outcome::from(run(ShapeKind::Organizations, args));
        assert!(matches!(outcome, Outcome::Usage(_)));
        assert_eq!(outcome.exit_code(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_arguments_exit_with_usage() {
        let outcome = Outcome::from(run(ShapeKind::Contacts, ["generate_contacts", "out.csv"]));
        assert!(matches!(outcome, Outcome::Usage(_)));
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_outcomes() {
        let done = Outcome::from(Ok(GenerationSummary {
            path: PathBuf::from("out.csv"),
            count: 0,
            noun: "contacts",
        }));
        assert_eq!(done.exit_code(), 0);

        let failed = Outcome::from(Err(FixtureError::GenerationExhausted {
            field: "email".to_string(),
            attempts: 1000,
        }));
        assert!(matches!(failed, Outcome::Failed(_)));
        assert_eq!(failed.exit_code(), 1);
    }
}
