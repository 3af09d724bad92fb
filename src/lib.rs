#![allow(nonstandard_style)]

pub mod dispatching;
pub mod error_handling;
pub mod evaluating;
pub mod parsing;
pub mod scanning;
pub mod variables;

use dispatching::*;
use scanning::*;

use std::io;

/// Everything a session wrote while running a piece of source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub out: String,
    pub err: String,
}

/// Runs `source` through a fresh session.
pub fn run_str(source: &str) -> io::Result<Transcript> {
    let mut session = Session::new(Vec::new(), Vec::new());
    session.run(&mut CharScanner::new(source.chars()))?;

    let (out, err) = session.into_writers();
    Ok(Transcript {
        out: String::from_utf8_lossy(&out).into_owned(),
        err: String::from_utf8_lossy(&err).into_owned(),
    })
}
