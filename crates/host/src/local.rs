// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Host;
use crate::error::HostError;
use crate::package_manager::PackageManager;
use crate::runner::{CommandRunner, DuctRunner, render_command_line};
use crate::types::{CommandOutput, FileKind, FileState, PackageState, ServiceState, UserState};

/// The machine `provcheck` itself runs on.
///
/// Every query shells out to the host's own tools through a
/// [`CommandRunner`]: the package manager, `systemctl`, `stat`, `getent`
/// and `id`. Services are assumed to be managed by systemd.
#[derive(Debug)]
pub struct LocalHost<R: CommandRunner = DuctRunner> {
    name: String,
    runner: R,
    package_manager: Option<PackageManager>,
}

impl<R: CommandRunner> LocalHost<R> {
    /// Creates a host that executes through `runner`.
    ///
    /// When `package_manager` is `None` it is detected by probing the host.
    /// If detection fails, the host is still usable but every package query
    /// reports [`HostError::NoPackageManager`].
    #[must_use]
    pub fn with_runner(name: &str, runner: R, package_manager: Option<PackageManager>) -> Self {
        let package_manager: Option<PackageManager> =
            package_manager.or_else(|| match PackageManager::detect(&runner) {
                Ok(manager) => Some(manager),
                Err(err) => {
                    tracing::warn!("package queries on {name} will fail: {err}");
                    None
                }
            });
        Self {
            name: name.to_string(),
            runner,
            package_manager,
        }
    }

    /// The package manager packages are queried through, if one was found.
    #[must_use]
    pub const fn package_manager(&self) -> Option<PackageManager> {
        self.package_manager
    }

    fn systemctl_succeeds(&self, verb: &str, service: &str) -> Result<bool, HostError> {
        Ok(self
            .runner
            .run("systemctl", &[verb, "--quiet", service])?
            .succeeded())
    }

    fn current_user_name(&self) -> Result<String, HostError> {
        let output: CommandOutput = self.runner.run("id", &["-un"])?;
        let name: &str = output.stdout.trim();
        if !output.succeeded() || name.is_empty() {
            return Err(HostError::UnexpectedOutput {
                command: String::from("id -un"),
                output: output.stderr,
            });
        }
        Ok(name.to_string())
    }

    fn lookup_user(&self, name: &str) -> Result<UserState, HostError> {
        // getent exits 2 when the key is not found
        let passwd: CommandOutput = self.runner.run("getent", &["passwd", name])?;
        if !passwd.succeeded() {
            return Ok(UserState::absent(name));
        }
        let home: String = parse_passwd_home(&passwd.stdout).ok_or_else(|| {
            HostError::UnexpectedOutput {
                command: render_command_line("getent", &["passwd", name]),
                output: passwd.stdout.clone(),
            }
        })?;

        let primary: CommandOutput = self.runner.run("id", &["-gn", name])?;
        let all: CommandOutput = self.runner.run("id", &["-Gn", name])?;
        let group: Option<String> = Some(primary.stdout.trim())
            .filter(|group| primary.succeeded() && !group.is_empty())
            .map(str::to_string);
        let groups: Vec<String> = if all.succeeded() {
            all.stdout.split_whitespace().map(str::to_string).collect()
        } else {
            Vec::new()
        };

        Ok(UserState {
            name: name.to_string(),
            exists: true,
            group,
            groups,
            home: Some(home),
        })
    }
}

impl<R: CommandRunner> Host for LocalHost<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn package(&self, name: &str) -> Result<PackageState, HostError> {
        self.package_manager
            .ok_or(HostError::NoPackageManager)?
            .query(&self.runner, name)
    }

    fn service(&self, name: &str) -> Result<ServiceState, HostError> {
        Ok(ServiceState {
            name: name.to_string(),
            is_running: self.systemctl_succeeds("is-active", name)?,
            is_enabled: self.systemctl_succeeds("is-enabled", name)?,
        })
    }

    fn file(&self, path: &str) -> Result<FileState, HostError> {
        // The type is taken from the link target, the mode from the path
        // itself, so a symlink reports 777 like `stat -c %a` does.
        let kind_args: [&str; 5] = ["-L", "-c", "%F", "--", path];
        let kind: CommandOutput = self.runner.run("stat", &kind_args)?;
        if !kind.succeeded() {
            return Ok(FileState::missing(path));
        }

        let mode_args: [&str; 4] = ["-c", "%a", "--", path];
        let mode: CommandOutput = self.runner.run("stat", &mode_args)?;
        let bits: u32 = Some(mode.stdout.trim())
            .filter(|_| mode.succeeded())
            .and_then(|bits| u32::from_str_radix(bits, 8).ok())
            .ok_or_else(|| HostError::UnexpectedOutput {
                command: render_command_line("stat", &mode_args),
                output: mode.stdout.clone(),
            })?;

        Ok(FileState {
            path: path.to_string(),
            kind: FileKind::from_stat_type(kind.stdout.trim()),
            mode: Some(bits),
        })
    }

    fn user(&self, name: Option<&str>) -> Result<UserState, HostError> {
        match name {
            Some(name) => self.lookup_user(name),
            None => {
                let current: String = self.current_user_name()?;
                self.lookup_user(&current)
            }
        }
    }

    fn run(&self, command: &str) -> Result<CommandOutput, HostError> {
        let mut output: CommandOutput = self.runner.run("sh", &["-c", command])?;
        output.command = command.to_string();
        Ok(output)
    }
}

/// Extracts the home directory from a `passwd(5)` line.
fn parse_passwd_home(line: &str) -> Option<String> {
    let fields: Vec<&str> = line.trim_end().split(':').collect();
    if fields.len() != 7 {
        return None;
    }
    Some(fields[5].to_string())
}
