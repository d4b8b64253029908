// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # provcheck
//!
//! Verifies that a provisioning run left each host in the expected state.
//!
//! Hosts come from an Ansible-style YAML inventory named by `--inventory` or
//! the `MOLECULE_INVENTORY_FILE` environment variable; without one, only
//! this machine is verified. Every selected check runs against every
//! selected host, one host at a time. The process exits with status 0 when
//! every check passed and 1 otherwise.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod report;
mod targets;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::Context, eyre::eyre};
use provcheck::{Check, HostReport, RunSummary, all_checks, find_check, run_checks};
use provcheck_host::{Host, PackageManager};
use provcheck_inventory::InventoryHost;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.log_level());

    match args.run() {
        Ok(true) => (),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Logs go to stderr so that `--format json` output stays parseable.
/// `RUST_LOG` overrides the level chosen with `-v`/`-q`.
fn init_tracing(level: LevelFilter) {
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// provcheck - verify the end state of a provisioned host
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Inventory file listing the hosts to verify. Without one, only this
    /// machine is verified.
    #[arg(short, long, env = "MOLECULE_INVENTORY_FILE", value_name = "PATH")]
    inventory: Option<PathBuf>,

    /// Inventory host pattern: a group, a host, or several joined with `:`
    #[arg(short, long, default_value = "all", value_name = "PATTERN")]
    limit: String,

    /// Run only the named check. May be repeated.
    #[arg(short, long = "check", value_name = "NAME")]
    checks: Vec<String>,

    /// Package manager to query instead of detecting one
    #[arg(long, value_name = "NAME")]
    package_manager: Option<PackageManager>,

    /// Output format for the results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// List the available checks and exit
    #[arg(long)]
    list: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per check followed by a summary
    Text,
    /// The full run summary as JSON
    Json,
}

impl Args {
    /// Runs the selected checks, returning whether all of them passed.
    fn run(&self) -> Result<bool> {
        if self.list {
            print!("{}", report::render_check_list(all_checks()));
            return Ok(true);
        }

        let checks: Vec<&'static Check> = select_checks(&self.checks)?;
        let targets: Vec<InventoryHost> =
            targets::resolve(self.inventory.as_deref(), &self.limit)?;
        tracing::info!(
            "verifying {} check(s) on {} host(s)",
            checks.len(),
            targets.len()
        );

        let mut summary: RunSummary = RunSummary::default();
        for target in &targets {
            let host: Box<dyn Host> = targets::connect(target, self.package_manager);
            let report: HostReport = run_checks(host.as_ref(), &checks);
            tracing::info!(
                "{}: {} passed, {} failed",
                report.host,
                report.passed(),
                report.failed()
            );
            summary.reports.push(report);
        }

        match self.format {
            OutputFormat::Text => print!("{}", report::render_text(&summary)),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&summary).wrap_err("failed to encode results")?
            ),
        }
        Ok(summary.is_success())
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Resolves check names to registry entries, keeping the given order and
/// dropping repeats. No names selects every check.
fn select_checks(names: &[String]) -> Result<Vec<&'static Check>> {
    if names.is_empty() {
        return Ok(all_checks().iter().collect());
    }

    let mut selected: Vec<&'static Check> = Vec::with_capacity(names.len());
    for name in names {
        let check: &'static Check = find_check(name)
            .ok_or_else(|| eyre!("unknown check {name:?}; use --list to see available checks"))?;
        if !selected.iter().any(|existing| existing.name == check.name) {
            selected.push(check);
        }
    }
    Ok(selected)
}
