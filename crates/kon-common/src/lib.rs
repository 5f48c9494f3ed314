//! Common utilities for the KON toolchain.
//!
//! This crate provides shared infrastructure used outside the parser core:
//! - **Warning System** - colored, deduplicated terminal output for
//!   non-fatal parser issues
//! - **Network** - blocking fetch of documents served over HTTP

pub mod net;
pub mod warning;
