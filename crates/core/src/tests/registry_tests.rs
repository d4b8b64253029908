// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use crate::{Check, all_checks, find_check};

#[test]
fn test_registry_lists_every_check_once() {
    let names: Vec<&str> = all_checks().iter().map(|check| check.name).collect();
    assert_eq!(
        names,
        vec![
            "essential_packages_installed",
            "aur_builder_user_exists",
            "services_running",
            "chezmoi_installed",
            "flatpak_setup",
            "user_directories_exist",
            "firewall_configured",
            "development_tools_available",
        ]
    );
    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_find_check() {
    let check: &Check = find_check("firewall_configured").unwrap();
    assert_eq!(check.description, "UFW firewall is properly configured");
    assert!(find_check("kernel_hardened").is_none());
}
