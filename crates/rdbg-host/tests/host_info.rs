//! Tests for POSIX host-information queries and install-directory derivation
#![cfg(unix)]

use std::path::PathBuf;

use rdbg_host::{FixedLocator, HostError, HostInfo, PosixHostInfo};

fn host_with_lib_dir(dir: &str) -> PosixHostInfo
{
    PosixHostInfo::with_locator(Box::new(FixedLocator::new(dir)))
}

#[test]
fn test_sibling_derivation_from_install_tree()
{
    let host = host_with_lib_dir("/opt/toolchain/lib");
    let derived = host.path_relative_to_library("bin").unwrap();
    assert_eq!(derived, PathBuf::from("/opt/toolchain/bin"));
}

#[test]
fn test_sibling_derivation_tolerates_leading_slash_in_suffix()
{
    let host = host_with_lib_dir("/opt/toolchain/lib");
    let derived = host.path_relative_to_library("/bin").unwrap();
    assert_eq!(derived, PathBuf::from("/opt/toolchain/bin"));
}

#[test]
fn test_sibling_derivation_does_not_require_lib_segment()
{
    // Any single-level-deep layout is accepted, not just */lib.
    let host = host_with_lib_dir("/opt/toolchain/lib64");
    let derived = host.path_relative_to_library("bin").unwrap();
    assert_eq!(derived, PathBuf::from("/opt/toolchain/bin"));
}

#[test]
fn test_root_level_library_dir_fails_derivation()
{
    let host = host_with_lib_dir("/lib");
    match host.path_relative_to_library("bin") {
        Err(HostError::NoParentPath { path }) => assert_eq!(path, PathBuf::from("/lib")),
        other => panic!("Expected NoParentPath, got {other:?}"),
    }
}

#[test]
fn test_relative_library_dir_without_parent_fails_derivation()
{
    let host = host_with_lib_dir("lib");
    assert!(matches!(
        host.path_relative_to_library("bin"),
        Err(HostError::NoParentPath { .. })
    ));
}

#[test]
fn test_unavailable_library_location_fails_derivation()
{
    let host = PosixHostInfo::with_locator(Box::new(FixedLocator::unavailable()));
    assert!(matches!(
        host.path_relative_to_library("bin"),
        Err(HostError::ShlibDirUnavailable)
    ));
}

#[test]
fn test_support_exe_dir_matches_bin_suffix_derivation()
{
    for dir in ["/opt/toolchain/lib", "/usr/local/lib", "/home/dev/.local/lib"] {
        let host = host_with_lib_dir(dir);
        assert_eq!(
            host.support_exe_dir().unwrap(),
            host.path_relative_to_library("bin").unwrap(),
            "mismatch for library dir {dir}"
        );
    }

    // Equivalence holds for the failure case too.
    let host = host_with_lib_dir("/lib");
    assert!(host.support_exe_dir().is_err());
    assert!(host.path_relative_to_library("bin").is_err());
}

#[test]
fn test_header_dir_is_fixed()
{
    let host = PosixHostInfo::new();
    assert_eq!(host.header_dir().unwrap(), PathBuf::from("/opt/local/include/rdbg"));
}

#[test]
fn test_default_shell()
{
    let host = PosixHostInfo::new();
    assert_eq!(host.default_shell(), PathBuf::from("/bin/sh"));
}

#[test]
fn test_page_size_is_power_of_two()
{
    let host = PosixHostInfo::new();
    let page_size = host.page_size();
    assert!(page_size.is_power_of_two(), "unexpected page size {page_size}");
}

#[test]
fn test_hostname_is_non_empty()
{
    let host = PosixHostInfo::new();
    let name = host.hostname().unwrap();
    assert!(!name.is_empty());
    assert!(!name.contains('\0'), "hostname carried interior NUL: {name:?}");
}

#[test]
fn test_identity_getters_are_stable()
{
    let host = PosixHostInfo::new();
    assert_eq!(host.user_id(), host.user_id());
    assert_eq!(host.group_id(), host.group_id());
    assert_eq!(host.effective_user_id(), host.effective_user_id());
    assert_eq!(host.effective_group_id(), host.effective_group_id());
}

#[test]
fn test_own_uid_resolution_is_idempotent()
{
    // The live account database may or may not know this uid (minimal
    // containers); either way the answer must not change between calls.
    let host = PosixHostInfo::new();
    let first = host.resolver().user_name(host.user_id());
    let second = host.resolver().user_name(host.user_id());
    assert_eq!(first, second);

    let first = host.resolver().group_name(host.group_id());
    let second = host.resolver().group_name(host.group_id());
    assert_eq!(first, second);
}

// The env tests mutate process-global state while the harness runs tests on
// parallel threads. They stay safe only because each test touches its own
// RDBG_HOST_TEST_* name and nothing else in this binary reads those names;
// keep any future env tests on the same disjoint-name convention.

#[test]
fn test_env_var_unset_returns_none()
{
    let host = PosixHostInfo::new();
    assert_eq!(host.env_var("RDBG_HOST_TEST_VARIABLE_THAT_IS_NEVER_SET"), None);
}

#[test]
fn test_env_var_set_returns_exact_value()
{
    let host = PosixHostInfo::new();
    let value = "rdbg host value with spaces and ünïcode";
    std::env::set_var("RDBG_HOST_TEST_VALUE", value);
    assert_eq!(host.env_var("RDBG_HOST_TEST_VALUE"), Some(value.to_string()));
}
