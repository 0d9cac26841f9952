//! Test-support hook that echoes its environment.
//!
//! **[Crates.io](https://crates.io/crates/hookenv)**
//!
//! A version-control system's test suite wires this binary up as a hook, e.g.
//! in the repository's hgrc:
//!
//! ```text
//! [hooks]
//! changegroup = hookenv changegroup
//! ```
//!
//! On invocation it prints the `HG_`-prefixed environment variables the
//! invoking program set, sorted and on one line, then exits with the status
//! given as the second argument:
//!
//! ```text
//! changegroup hook: HG_NODE=02de3... HG_SOURCE=push HG_URL=file:...
//! ```
//!
//! The third argument redirects the line to a file opened for append, so
//! repeated hook firings accumulate rather than overwrite.
//!
//! The library half is pure: the environment table and the host's
//! path-separator convention are passed in by the binary, never read from
//! globals, which keeps every step deterministic under test.

#![doc(html_root_url = "https://docs.rs/hookenv/0.1.0")]
#![warn(
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	trivial_casts,
	trivial_numeric_casts,
	unused_import_braces,
	unused_qualifications,
	unused_results,
	clippy::pedantic
)] // from https://github.com/rust-unofficial/patterns/blob/master/anti_patterns/deny-warnings.md
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod env;
pub mod invocation;
pub mod sink;

pub use invocation::{Error, Invocation};

/// Parses `args`, renders the matching entries of `vars`, writes the line, and
/// returns the status the process should exit with.
///
/// `args` excludes the program name. `backslash_separators` says whether the
/// host's native path separator is the backslash; see
/// [`env::format_line`](env/fn.format_line.html).
pub fn run<A, E>(args: A, vars: E, backslash_separators: bool) -> Result<i32, Error>
where
	A: IntoIterator<Item = String>,
	E: IntoIterator<Item = (String, String)>,
{
	let invocation = Invocation::from_args(args)?;
	let entries = env::collect(vars);
	let line = env::format_line(&invocation.hook, &entries, backslash_separators);
	invocation.sink.write(&line)?;
	Ok(invocation.exit_code)
}
