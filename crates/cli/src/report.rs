// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt::Write;

use provcheck::{Check, CheckStatus, RunSummary};

/// Renders the registry for `--list`.
pub fn render_check_list(checks: &[Check]) -> String {
    let width: usize = checks.iter().map(|check| check.name.len()).max().unwrap_or(0);
    let mut out: String = String::new();
    for check in checks {
        let _ = writeln!(out, "{:width$}  {}", check.name, check.description);
    }
    out
}

/// Renders a run as one line per check, grouped by host, then a summary.
pub fn render_text(summary: &RunSummary) -> String {
    let mut out: String = String::new();

    for report in &summary.reports {
        let _ = writeln!(out, "{}", report.host);
        for outcome in &report.outcomes {
            match &outcome.status {
                CheckStatus::Passed => {
                    let _ = writeln!(
                        out,
                        "  PASS {} ({} ms)",
                        outcome.check, outcome.elapsed_ms
                    );
                }
                CheckStatus::Failed { message } => {
                    let _ = writeln!(out, "  FAIL {}: {message}", outcome.check);
                }
            }
        }
    }

    let checks: usize = summary.passed() + summary.failed();
    let hosts: usize = summary.reports.len();
    let _ = writeln!(
        out,
        "{checks} check(s) on {hosts} host(s): {} passed, {} failed",
        summary.passed(),
        summary.failed()
    );
    out
}
