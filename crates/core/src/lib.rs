// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assertions confirming that a provisioning run produced the expected end
//! state on a host.
//!
//! Checks are independent: each takes a borrowed [`Host`](provcheck_host::Host)
//! handle, queries it, and either returns `Ok(())` or the first
//! [`CheckError`] it hits. [`run_checks`] evaluates a selection of checks
//! against one host and collects the outcomes into a [`HostReport`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod check;
pub mod checks;
mod error;
mod runner;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use check::{Check, CheckFn};
pub use checks::{all_checks, find_check};
pub use error::{CheckError, ensure};
pub use runner::{CheckOutcome, CheckStatus, HostReport, RunSummary, run_checks};
