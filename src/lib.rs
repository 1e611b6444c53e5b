//! # zfind - Z-array pattern search
//!
//! zfind finds every occurrence of a pattern inside a text in O(n + m)
//! time using the Z-array: for each position of a sequence, the length of
//! the longest substring starting there that matches a prefix of the
//! sequence. Joining `pattern + sentinel + text` into one probe sequence
//! turns exact search into a single Z-array pass.
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`zarray`] - Z-array construction (the Z-box technique)
//! - [`search`] - Pattern search over a sentinel-joined probe sequence
//! - [`output`] - Result formatting for the CLI
//!
//! ## Quick Start
//!
//! ```
//! use zfind::{search, zarray};
//!
//! // Every offset where the pattern occurs, overlaps included
//! let matches = search::find_all(b"123412341234", b"12341234").unwrap();
//! assert_eq!(matches, vec![0, 4]);
//!
//! // The Z-array itself
//! assert_eq!(zarray::z_array(b"aabaa"), vec![5, 1, 0, 2, 1]);
//! ```
//!
//! The search is pure and call-local: no shared state, so independent
//! inputs can be searched from multiple threads without synchronization.

pub mod output;
pub mod search;
pub mod zarray;
