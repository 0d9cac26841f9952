//! The destination the hook line is written to.

use std::{
	fs, io::{self, Write}, path::PathBuf
};

/// Where the formatted hook line goes.
///
/// Hooks default to standard output; test suites that need to observe several
/// invocations in order pass a file path instead, which is appended to so
/// earlier lines survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
	/// The process's standard output.
	Stdout,
	/// The file at this path, opened for append and created if missing.
	File(PathBuf),
}

impl Sink {
	/// Writes `line` to the destination as raw bytes.
	///
	/// A file sink is held open only for the duration of this one write and
	/// closed on return; standard output is flushed instead.
	pub fn write(&self, line: &[u8]) -> io::Result<()> {
		match self {
			Sink::Stdout => {
				let stdout = io::stdout();
				let mut stdout = stdout.lock();
				stdout.write_all(line)?;
				stdout.flush()
			}
			Sink::File(path) => {
				let mut file = fs::OpenOptions::new().append(true).create(true).open(path)?;
				file.write_all(line)
			}
		}
	}
}
