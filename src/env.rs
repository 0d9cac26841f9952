//! Collect and render the hook's environment.
//!
//! The invoking program hands context to a hook as `HG_`-prefixed environment
//! variables. This module filters those out of an environment table and renders
//! them as the single line the test suites assert on.
//!
//! The table is passed in explicitly rather than read from the process globals,
//! so callers (and tests) control exactly what the hook sees.
//!
//! # Examples
//!
//! ```
//! use hookenv::env;
//!
//! let vars = vec![
//! 	("HG_NODE".to_owned(), "0123abcd".to_owned()),
//! 	("PATH".to_owned(), "/usr/bin".to_owned()),
//! ];
//! let entries = env::collect(vars);
//! assert_eq!(
//! 	env::format_line("commit", &entries, false),
//! 	&b"commit hook: HG_NODE=0123abcd\n"[..]
//! );
//! ```

/// Prefix marking the environment variables the invoking program sets for a hook.
pub const PREFIX: &str = "HG_";

/// Returns the `(name, value)` entries of `vars` whose name starts with
/// [`PREFIX`](constant.PREFIX.html) and whose value is non-empty, sorted by name
/// ascending.
///
/// Variables with empty values may not exist at all on some platforms, so they
/// are filtered out to keep hook output identical across platforms.
pub fn collect<I>(vars: I) -> Vec<(String, String)>
where
	I: IntoIterator<Item = (String, String)>,
{
	let mut entries = vars
		.into_iter()
		.filter(|(name, value)| name.starts_with(PREFIX) && !value.is_empty())
		.collect::<Vec<_>>();
	entries.sort();
	entries
}

/// Renders `entries` as the hook's output line:
/// `"<hook> hook: name1=value1 name2=value2 ...\n"` as UTF-8 bytes.
///
/// The space after the colon is always present; with no entries the line is
/// `"<hook> hook: \n"`. When `backslash_separators` is set (the host's native
/// path separator is the backslash), every `\` in values is rendered as `/` so
/// paths read the same on every platform.
pub fn format_line(
	hook: &str, entries: &[(String, String)], backslash_separators: bool,
) -> Vec<u8> {
	let mut line = format!("{} hook: ", hook);
	for (i, (name, value)) in entries.iter().enumerate() {
		if i != 0 {
			line.push(' ');
		}
		line.push_str(name);
		line.push('=');
		if backslash_separators {
			line.push_str(&value.replace('\\', "/"));
		} else {
			line.push_str(value);
		}
	}
	line.push('\n');
	line.into_bytes()
}
