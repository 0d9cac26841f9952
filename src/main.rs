//! `hookenv <hookname> [exitcode] [outputfile]`
//!
//! Everything interesting lives in the library; this binary only captures the
//! process environment and hands the verdict to `process::exit`.

use std::{env, process};

fn main() {
	match hookenv::run(env::args().skip(1), env::vars(), cfg!(windows)) {
		Ok(code) => process::exit(code),
		Err(err) => {
			eprintln!("hookenv: {}", err);
			process::exit(1);
		}
	}
}
