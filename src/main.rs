// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `helix`: print the longest near-palindromic substring of a DNA sequence.
//!
//! Reads the whole sequence from the file named by the only argument, or from
//! stdin when no argument is given. Surrounding whitespace is trimmed and the
//! sequence is upper-cased before scanning.

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use helixscan::{HelixError, longest_near_palindrome};

const USAGE: &str = "usage: helix [SEQUENCE_FILE]";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let path = args.next();
    if args.next().is_some() || matches!(path.as_deref(), Some("-h" | "--help")) {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    }

    match run(path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("helix: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: Option<&str>) -> Result<(), HelixError> {
    let raw = read_input(path)?;
    let sequence = normalize(&raw);
    let answer = longest_near_palindrome(&sequence)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&answer)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>, HelixError> {
    match path {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().lock().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Trims surrounding whitespace and upper-cases.
fn normalize(raw: &[u8]) -> Vec<u8> {
    raw.trim_ascii().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_uppercases() {
        assert_eq!(normalize(b"  acgT\n"), b"ACGT");
        assert_eq!(normalize(b"\r\n"), b"");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        // interior whitespace is invalid input, not something to repair
        assert_eq!(normalize(b"AC GT\n"), b"AC GT");
        assert!(longest_near_palindrome(&normalize(b"AC GT\n")).is_err());
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some("/nonexistent/helix/input.txt")).unwrap_err();
        assert!(matches!(err, HelixError::Io(_)));
    }
}
