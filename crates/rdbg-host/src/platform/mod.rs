//! # Platform-Specific Implementations
//!
//! One submodule per host family, each implementing the
//! [`HostInfo`](crate::HostInfo) contract and the
//! [`NameLookup`](crate::NameLookup) capability with that platform's native
//! calls:
//!
//! - **POSIX** (Linux, macOS, *BSD): `sysconf`, `gethostname`/`getaddrinfo`,
//!   `getpwuid_r`/`getgrgid_r`
//! - **Windows**: Win32 equivalents (future)
//!
//! The caching and locking around identity resolution is shared code in
//! [`resolver`](crate::resolver); platform modules only supply the raw
//! lookup.

#[cfg(unix)]
pub mod posix;

// Future platform modules:
// #[cfg(windows)]
// pub mod windows;
