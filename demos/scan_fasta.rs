// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! FASTA scan example using the seq_io crate for parsing.
//!
//! Reports the longest near-palindrome (at most one mismatched base pair) of
//! every record in a FASTA file. Records containing bases other than ACGT are
//! reported and skipped.
//!
//! Run with: `cargo run --example scan_fasta [path/to/file.fasta]`
//! (defaults to `demos/palindromes.fasta`)

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use seq_io::fasta::{Reader, Record};

use helixscan::{HelixError, find_complement_palindrome, find_near_palindrome};

/// Statistics collected over all records.
#[derive(Default)]
struct ScanStats {
    records_scanned: usize,
    records_skipped: usize,
    total_bases: usize,
    longest_hit: usize,
    scan_time: Duration,
}

impl ScanStats {
    fn print_summary(&self) {
        println!("\n╔════════════════════════════════════════════════════════════════╗");
        println!("║                     Scan Summary                               ║");
        println!("╚════════════════════════════════════════════════════════════════╝\n");

        println!("Records scanned:         {:>10}", self.records_scanned);
        println!("Records skipped:         {:>10}", self.records_skipped);
        println!("Total bases:             {:>10}", self.total_bases);
        println!("Longest near-palindrome: {:>10}", self.longest_hit);

        let secs = self.scan_time.as_secs_f64();
        if secs > 0.0 {
            println!(
                "Throughput:              {:>10.2} MB/s",
                self.total_bases as f64 / secs / 1_000_000.0
            );
        }
    }
}

fn main() {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║        helixscan FASTA Example with seq_io Parsing             ║");
    println!("╚════════════════════════════════════════════════════════════════╝\n");

    let fasta_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demos/palindromes.fasta"));
    if !fasta_path.exists() {
        eprintln!("Error: FASTA file not found at {:?}", fasta_path);
        eprintln!("Please run this example from the project root directory.");
        std::process::exit(1);
    }

    let file = File::open(&fasta_path).expect("Failed to open FASTA file");
    let mut fasta_reader = Reader::new(BufReader::new(file));
    let mut stats = ScanStats::default();

    while let Some(result) = fasta_reader.next() {
        let record = result.expect("Failed to parse FASTA record");
        let id = record.id().unwrap_or("<non-utf8 id>").to_string();

        // Lines are joined and upper-cased: soft-masked bases still count
        let sequence = record.full_seq().to_ascii_uppercase();

        let start = Instant::now();
        let outcome = find_near_palindrome(&sequence)
            .and_then(|hit| Ok((hit, find_complement_palindrome(&sequence)?)));
        stats.scan_time += start.elapsed();

        match outcome {
            Ok((hit, exact)) => {
                stats.records_scanned += 1;
                stats.total_bases += sequence.len();
                stats.longest_hit = stats.longest_hit.max(hit.len);

                println!("{}", id);
                println!(
                    "  near-palindrome:  {:>5} bp at {:<5} {} ({} mismatch)",
                    hit.len,
                    hit.start,
                    String::from_utf8_lossy(hit.slice(&sequence)),
                    hit.mismatches
                );
                println!(
                    "  exact palindrome: {:>5} bp at {:<5} {}",
                    exact.len,
                    exact.start,
                    String::from_utf8_lossy(exact.slice(&sequence))
                );
            }
            Err(HelixError::InvalidSymbol { symbol, position }) => {
                stats.records_skipped += 1;
                println!("{}", id);
                println!("  skipped: '{}' at position {} is not ACGT", symbol, position);
            }
            Err(err) => {
                eprintln!("Error scanning {}: {}", id, err);
                std::process::exit(1);
            }
        }
    }

    stats.print_summary();
}
