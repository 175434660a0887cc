//! Run reports printed after the combined file is written.
//!
//! - [`terminal`]: colored summary box plus a table of libraries without a license;
//!   respects `--verbose` / `--quiet`.
//! - JSON output is the serialized [`LibraryReport`](crate::models::LibraryReport) list.

pub mod terminal;
