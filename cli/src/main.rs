use std::{env, ffi::OsString, io, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};

use nthash_core::ntlm_hex;

/// Printed on standard output when the arguments are wrong.
const USAGE: &str = "Usage: nthash <password>";

/// The environment variable used to set the log level.
const LOG_ENV: &str = "NTHASH_LOG";

/// Prints the NTLM hash of a password in uppercase hexadecimal.
// There are no flags: anything given, even "--help", is the password.
#[derive(Parser)]
#[clap(
    name = "nthash",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// The password to hash.
    #[clap(value_parser, allow_hyphen_values = true)]
    password: OsString,
}

/// Logs go to stderr so that stdout only contains the digest.
fn init_tracing() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

/// Returns the line to print for a parsed command line.
fn run(cli: Cli) -> Result<String> {
    let password = cli
        .password
        .to_str()
        .context("The password is not valid Unicode")?;

    debug!(chars = password.chars().count(), "hashing password");

    Ok(ntlm_hex(password))
}

/// The result of an invocation.
#[derive(Debug)]
enum Outcome {
    /// The digest, printed on stdout.
    Digest(String),
    /// The arguments are wrong, the usage is printed on stdout.
    Usage,
    /// The password could not be hashed, the error is printed on stderr.
    Error(anyhow::Error),
}

impl Outcome {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::Digest(_) => ExitCode::SUCCESS,
            Self::Usage | Self::Error(_) => ExitCode::FAILURE,
        }
    }

    /// The line to print, without its newline.
    fn message(&self) -> String {
        match self {
            Self::Digest(digest) => digest.clone(),
            Self::Usage => USAGE.to_owned(),
            Self::Error(err) => format!("Error: {err:#}"),
        }
    }

    fn print(&self) {
        match self {
            Self::Error(_) => eprintln!("{}", self.message()),
            _ => println!("{}", self.message()),
        }
    }
}

/// Handles a full command line, program name included.
fn execute<I, T>(args: I) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = args.into_iter().map(Into::into).collect::<Vec<OsString>>();

    // The count is checked on the raw arguments, since clap gives "--" a special meaning.
    let [program, password] = match <[OsString; 2]>::try_from(args) {
        Ok(args) => args,
        Err(args) => {
            debug!(count = args.len().saturating_sub(1), "wrong argument count");
            return Outcome::Usage;
        }
    };

    // everything after the escape is a value, "--" included
    let cli = match Cli::try_parse_from([program, OsString::from("--"), password]) {
        Ok(cli) => cli,
        Err(err) => {
            debug!(kind = ?err.kind(), "rejected command line");
            return Outcome::Usage;
        }
    };

    match run(cli) {
        Ok(digest) => Outcome::Digest(digest),
        Err(err) => Outcome::Error(err),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let outcome = execute(env::args_os());
    outcome.print();
    outcome.exit_code()
}
