// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for helixscan.

use thiserror::Error;

/// Result type alias for helixscan operations.
pub type Result<T> = std::result::Result<T, HelixError>;

/// Errors that can occur while scanning a sequence.
///
/// The core algorithm has exactly one failure mode, an input byte outside the
/// `A`/`C`/`G`/`T` alphabet. I/O failures only come from the CLI and demo
/// layers that read sequences from streams.
#[derive(Debug, Error)]
pub enum HelixError {
    /// Input contains a byte that is not `A`, `C`, `G`, or `T`.
    #[error("invalid base '{symbol}' at position {position} (expected A, C, G, or T)")]
    InvalidSymbol {
        /// The offending byte, as a character.
        symbol: char,
        /// Zero-based offset of the byte in the input.
        position: usize,
    },

    /// I/O error while reading a sequence.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
