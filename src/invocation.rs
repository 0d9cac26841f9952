//! Command-line parsing and the failure taxonomy.
//!
//! The argument grammar is three positionals, `<hookname> [exitcode]
//! [outputfile]`, and hooks are wired up in test fixtures by hand, so a
//! parsing library would be more surface than the grammar itself.

use super::sink::Sink;
use std::{io, num};

/// The ways an invocation can fail.
///
/// None of these are recovered: the binary prints the message to standard
/// error and exits non-zero without writing a hook line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The mandatory hook-name argument was missing.
	#[error("missing hook name (usage: hookenv <hookname> [exitcode] [outputfile])")]
	Usage,
	/// The exit-code argument wasn't an integer.
	#[error("invalid exit code: {0}")]
	ExitCode(#[from] num::ParseIntError),
	/// The output file couldn't be opened or written.
	#[error("cannot write hook output: {0}")]
	Io(#[from] io::Error),
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
	/// Hook name, echoed verbatim at the start of the output line.
	pub hook: String,
	/// Status to terminate the process with.
	pub exit_code: i32,
	/// Where the line is written.
	pub sink: Sink,
}

impl Invocation {
	/// Parses the argument list, exclusive of the program name.
	///
	/// The hook name is mandatory; the exit code defaults to `0` and the sink
	/// to standard output. Surplus arguments are ignored.
	pub fn from_args<I>(args: I) -> Result<Self, Error>
	where
		I: IntoIterator<Item = String>,
	{
		let mut args = args.into_iter();
		let hook = args.next().ok_or(Error::Usage)?;
		let exit_code = match args.next() {
			Some(code) => code.parse()?,
			None => 0,
		};
		let sink = match args.next() {
			Some(path) => Sink::File(path.into()),
			None => Sink::Stdout,
		};
		Ok(Invocation {
			hook,
			exit_code,
			sink,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn args(args: &[&str]) -> Vec<String> {
		args.iter().map(|&arg| arg.to_owned()).collect()
	}

	#[test]
	fn hook_name_alone_defaults() {
		let invocation = Invocation::from_args(args(&["changegroup"])).unwrap();
		assert_eq!(
			invocation,
			Invocation {
				hook: "changegroup".to_owned(),
				exit_code: 0,
				sink: Sink::Stdout,
			}
		);
	}

	#[test]
	fn exit_code_and_output_file() {
		let invocation = Invocation::from_args(args(&["commit", "3", "/tmp/out.log"])).unwrap();
		assert_eq!(invocation.hook, "commit");
		assert_eq!(invocation.exit_code, 3);
		assert_eq!(invocation.sink, Sink::File("/tmp/out.log".into()));
	}

	#[test]
	fn negative_exit_code_parses() {
		let invocation = Invocation::from_args(args(&["update", "-1"])).unwrap();
		assert_eq!(invocation.exit_code, -1);
	}

	#[test]
	fn missing_hook_name_is_a_usage_error() {
		match Invocation::from_args(args(&[])) {
			Err(Error::Usage) => (),
			other => panic!("{:?}", other),
		}
	}

	#[test]
	fn non_integer_exit_code_is_a_parse_error() {
		match Invocation::from_args(args(&["commit", "three"])) {
			Err(Error::ExitCode(_)) => (),
			other => panic!("{:?}", other),
		}
	}
}
