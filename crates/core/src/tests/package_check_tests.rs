// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::checks::{ESSENTIAL_PACKAGES, essential_packages_installed};
use crate::tests::helpers::{FakeHost, create_provisioned_host, failure_message};

#[test]
fn test_essential_packages_all_installed() {
    let host: FakeHost = create_provisioned_host();
    assert!(essential_packages_installed(&host).is_ok());
}

#[test]
fn test_each_missing_essential_package_fails() {
    for missing in ESSENTIAL_PACKAGES {
        let host: FakeHost = create_provisioned_host().with_package(missing, false);
        assert_eq!(
            failure_message(essential_packages_installed(&host)),
            format!("Package {missing} should be installed")
        );
    }
}

#[test]
fn test_first_missing_package_is_reported() {
    let host: FakeHost = create_provisioned_host()
        .with_package("vim", false)
        .with_package("firefox", false);
    assert_eq!(
        failure_message(essential_packages_installed(&host)),
        "Package vim should be installed"
    );
}
