//! # Error Types
//!
//! Error handling for host-information queries.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! Failure is rare in this crate: most host facts either exist or are
//! reported as absent (`Option`). `HostError` covers the cases where a query
//! has a genuine fault to report rather than a normal "not set" outcome.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for host-information operations
///
/// ## Error Categories
///
/// 1. **Host-fact errors**: HostnameUnavailable — a platform call failed
/// 2. **Layout errors**: ShlibDirUnavailable, NoParentPath — install
///    directory derivation cannot proceed
///
/// Callers are expected to treat any of these as "fact unknown" and apply
/// their own fallback (e.g. omit an optional directory, show a numeric ID
/// instead of a name). Nothing in this crate retries a failed query.
#[derive(Error, Debug)]
pub enum HostError
{
    /// The `gethostname(2)` call failed
    ///
    /// This is the only host-fact query with an OS error worth surfacing;
    /// the identity getters and page size cannot fail on supported hosts.
    #[error("Failed to query hostname: {source}")]
    HostnameUnavailable
    {
        /// The underlying OS error
        source: std::io::Error,
    },

    /// The location of the toolchain's own shared library is unknown
    ///
    /// Raised when the library locator cannot determine which on-disk image
    /// hosts this code (e.g. `dladdr` failed). Without that anchor, sibling
    /// install directories cannot be derived.
    #[error("Shared library location is unavailable")]
    ShlibDirUnavailable,

    /// The shared-library directory has no parent path segment
    ///
    /// Sibling directories are derived by replacing the last component of
    /// the library directory (e.g. `/opt/toolchain/lib` becomes
    /// `/opt/toolchain/bin`). A library directory sitting directly at a
    /// filesystem root (e.g. `/lib`) has nothing to hang the sibling off.
    #[error("No parent path segment in '{}'; cannot derive sibling directory", path.display())]
    NoParentPath
    {
        /// The shared-library directory that lacked a parent
        path: PathBuf,
    },
}

/// Convenience type alias for `Result<T, HostError>`
///
/// ```rust
/// use rdbg_host::error::Result;
/// fn foo() -> Result<()>
/// {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, HostError>;
