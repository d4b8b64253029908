// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::tests::helpers::ScriptedRunner;
use crate::{HostError, PackageManager, PackageState};

#[test]
fn test_dpkg_installed() {
    let runner: ScriptedRunner = ScriptedRunner::new().respond(
        "dpkg-query -f ${Status} ${Version} -W vim",
        0,
        "install ok installed 2:9.1.0016-1",
    );

    let package: PackageState = PackageManager::Dpkg.query(&runner, "vim").unwrap();
    assert_eq!(
        package,
        PackageState::installed("vim", Some(String::from("2:9.1.0016-1")))
    );
}

#[test]
fn test_dpkg_config_files_only_counts_as_absent() {
    let runner: ScriptedRunner = ScriptedRunner::new().respond(
        "dpkg-query -f ${Status} ${Version} -W ufw",
        0,
        "deinstall ok config-files 0.36.2-1",
    );

    let package: PackageState = PackageManager::Dpkg.query(&runner, "ufw").unwrap();
    assert!(!package.is_installed);
}

#[test]
fn test_dpkg_unknown_package() {
    let runner: ScriptedRunner = ScriptedRunner::new().respond(
        "dpkg-query -f ${Status} ${Version} -W firefox",
        1,
        "",
    );

    let package: PackageState = PackageManager::Dpkg.query(&runner, "firefox").unwrap();
    assert_eq!(package, PackageState::absent("firefox"));
}

#[test]
fn test_dpkg_truncated_status_is_an_error() {
    let runner: ScriptedRunner =
        ScriptedRunner::new().respond("dpkg-query -f ${Status} ${Version} -W git", 0, "install");

    let err: HostError = PackageManager::Dpkg.query(&runner, "git").unwrap_err();
    assert!(matches!(err, HostError::UnexpectedOutput { .. }));
}

#[test]
fn test_rpm_installed() {
    let runner: ScriptedRunner =
        ScriptedRunner::new().respond("rpm -q --queryformat %{VERSION} git", 0, "2.45.2");

    let package: PackageState = PackageManager::Rpm.query(&runner, "git").unwrap();
    assert_eq!(package.version.as_deref(), Some("2.45.2"));
}

#[test]
fn test_detect_without_any_manager() {
    let runner: ScriptedRunner = ScriptedRunner::new();

    let err: HostError = PackageManager::detect(&runner).unwrap_err();
    assert!(matches!(err, HostError::NoPackageManager));
    assert_eq!(
        runner.calls(),
        vec![
            String::from("sh -c command -v pacman"),
            String::from("sh -c command -v dpkg-query"),
            String::from("sh -c command -v rpm"),
        ]
    );
}

#[test]
fn test_package_manager_from_str() {
    assert_eq!(PackageManager::from_str("pacman").unwrap(), PackageManager::Pacman);
    assert_eq!(PackageManager::from_str("apt").unwrap(), PackageManager::Dpkg);
    assert_eq!(PackageManager::from_str("dnf").unwrap(), PackageManager::Rpm);

    let err: HostError = PackageManager::from_str("brew").unwrap_err();
    assert_eq!(err.to_string(), "unknown package manager: brew");
}
