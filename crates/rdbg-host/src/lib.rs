//! # rdbg-host
//!
//! Host-information abstraction layer for the rdbg debugger.
//!
//! This crate insulates the rest of the toolchain from the platform-specific
//! system calls needed to answer basic environment questions:
//! - Memory page size
//! - Host name (fully-qualified when resolvable)
//! - Process user/group identity, and resolution of numeric IDs to names
//! - Default shell and environment variable lookup
//! - Derivation of auxiliary install directories (support executables,
//!   headers) relative to the location of the toolchain's own shared library
//!
//! ## Platform Support
//!
//! - **POSIX** (Linux, macOS, *BSD): [`PosixHostInfo`]
//! - Other host families implement the same [`HostInfo`] contract in their
//!   own platform modules (future)
//!
//! ## Why unsafe code is needed
//!
//! Page size, hostname, and identity queries are raw `libc` calls. Each call
//! is wrapped in a safe function that owns the buffers involved; no raw
//! pointer escapes this crate.

#![allow(unsafe_code)] // Required for libc host queries (sysconf, getpwuid_r, dladdr, etc.)

pub mod error;
pub mod host_info;
pub mod locator;
pub mod platform;
pub mod resolver;

// Re-export commonly used types
pub use error::{HostError, Result};
pub use host_info::HostInfo;
#[cfg(unix)]
pub use locator::DladdrLocator;
pub use locator::{FixedLocator, LibraryLocator};
#[cfg(unix)]
pub use platform::posix::{PosixHostInfo, PosixNameLookup};
pub use resolver::{NameLookup, UserIdResolver};
