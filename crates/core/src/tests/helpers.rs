// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use provcheck_host::{
    CommandOutput, FileKind, FileState, Host, HostError, PackageState, ServiceState, UserState,
};

/// An in-memory host. Anything not configured is absent.
#[derive(Debug, Default, Clone)]
pub struct FakeHost {
    pub packages: HashMap<String, bool>,
    pub services: HashMap<String, (bool, bool)>,
    pub files: HashMap<String, (FileKind, u32)>,
    pub users: HashMap<String, UserState>,
    pub current_user: String,
    pub commands: HashMap<String, (i32, String)>,
}

impl FakeHost {
    pub fn with_package(mut self, name: &str, installed: bool) -> Self {
        self.packages.insert(name.to_string(), installed);
        self
    }

    pub fn with_service(mut self, name: &str, running: bool, enabled: bool) -> Self {
        self.services.insert(name.to_string(), (running, enabled));
        self
    }

    pub fn with_file(mut self, path: &str, kind: FileKind, mode: u32) -> Self {
        self.files.insert(path.to_string(), (kind, mode));
        self
    }

    pub fn without_file(mut self, path: &str) -> Self {
        self.files.remove(path);
        self
    }

    pub fn with_user(mut self, name: &str, group: &str, home: &str) -> Self {
        self.users.insert(
            name.to_string(),
            UserState {
                name: name.to_string(),
                exists: true,
                group: Some(group.to_string()),
                groups: vec![group.to_string()],
                home: Some(home.to_string()),
            },
        );
        self
    }

    pub fn with_command(mut self, command: &str, rc: i32, stdout: &str) -> Self {
        self.commands
            .insert(command.to_string(), (rc, stdout.to_string()));
        self
    }
}

impl Host for FakeHost {
    fn name(&self) -> &str {
        "fake"
    }

    fn package(&self, name: &str) -> Result<PackageState, HostError> {
        Ok(if self.packages.get(name).copied().unwrap_or(false) {
            PackageState::installed(name, None)
        } else {
            PackageState::absent(name)
        })
    }

    fn service(&self, name: &str) -> Result<ServiceState, HostError> {
        let (is_running, is_enabled) = self.services.get(name).copied().unwrap_or_default();
        Ok(ServiceState {
            name: name.to_string(),
            is_running,
            is_enabled,
        })
    }

    fn file(&self, path: &str) -> Result<FileState, HostError> {
        Ok(match self.files.get(path) {
            Some((kind, mode)) => FileState {
                path: path.to_string(),
                kind: *kind,
                mode: Some(*mode),
            },
            None => FileState::missing(path),
        })
    }

    fn user(&self, name: Option<&str>) -> Result<UserState, HostError> {
        let name: &str = name.unwrap_or(&self.current_user);
        Ok(self
            .users
            .get(name)
            .cloned()
            .unwrap_or_else(|| UserState::absent(name)))
    }

    fn run(&self, command: &str) -> Result<CommandOutput, HostError> {
        let (rc, stdout) = self
            .commands
            .get(command)
            .cloned()
            .unwrap_or((127, String::new()));
        Ok(CommandOutput {
            command: command.to_string(),
            rc,
            stdout,
            stderr: String::new(),
        })
    }
}

/// A host in the state a successful provisioning run leaves behind.
pub fn create_provisioned_host() -> FakeHost {
    let mut host: FakeHost = FakeHost {
        current_user: String::from("alice"),
        ..FakeHost::default()
    }
    .with_package("git", true)
    .with_package("vim", true)
    .with_package("firefox", true)
    .with_package("flatpak", true)
    .with_package("ufw", true)
    .with_service("NetworkManager", true, true)
    .with_service("ufw", true, true)
    .with_user("aur_builder", "wheel", "/home/aur_builder")
    .with_user("alice", "alice", "/home/alice")
    .with_file("/usr/local/bin/chezmoi", FileKind::RegularFile, 0o755)
    .with_command(
        "flatpak remotes",
        0,
        "Name    Options\nflathub system\n",
    )
    .with_command("command -v git", 0, "/usr/bin/git\n")
    .with_command("command -v python", 0, "/usr/bin/python\n")
    .with_command("command -v pip", 0, "/usr/bin/pip\n");

    for directory in ["Desktop", "Documents", "Downloads", "Pictures", "Videos", "Music"] {
        host = host.with_file(&format!("/home/alice/{directory}"), FileKind::Directory, 0o755);
    }
    host
}

/// Returns the failure message, panicking if the check passed.
pub fn failure_message(result: Result<(), crate::CheckError>) -> String {
    result.unwrap_err().message().to_string()
}
