//! # HostInfo Trait
//!
//! The public contract for host-information queries, shared by all platform
//! variants.
//!
//! The rest of the toolchain asks questions through this trait without
//! knowing which host family it is running on. Each platform implements it
//! with its own system calls:
//!
//! - **POSIX** (Linux, macOS, *BSD): `platform::posix::PosixHostInfo`
//! - **Windows**: Win32 equivalents (future)
//!
//! Every operation is a stateless query; implementations hold no mutable
//! state beyond the identity-resolution cache they own, and all methods take
//! `&self` so a single instance can serve the whole process.

use std::path::PathBuf;

use crate::error::Result;

/// Host-information queries.
///
/// ## Failure semantics
///
/// Operations that can genuinely fail return [`Result`]; operations where
/// absence is a normal outcome (an unset environment variable) return
/// `Option`. Callers treat any failure as "fact unknown" — there is no retry
/// anywhere in this layer.
pub trait HostInfo
{
    /// The operating system's memory page size in bytes.
    fn page_size(&self) -> usize;

    /// The local host name.
    ///
    /// When the platform can resolve the bare name to a fully-qualified
    /// domain name, the FQDN is preferred; otherwise the bare name is
    /// returned. Fails only when the primary hostname syscall itself fails.
    ///
    /// ## Errors
    ///
    /// [`HostError::HostnameUnavailable`](crate::HostError::HostnameUnavailable)
    /// when `gethostname(2)` fails.
    fn hostname(&self) -> Result<String>;

    /// The real user ID of this process.
    fn user_id(&self) -> u32;

    /// The real group ID of this process.
    fn group_id(&self) -> u32;

    /// The effective user ID of this process.
    fn effective_user_id(&self) -> u32;

    /// The effective group ID of this process.
    fn effective_group_id(&self) -> u32;

    /// The conventional default shell for this host family.
    ///
    /// Fixed per platform; never probed at runtime.
    fn default_shell(&self) -> PathBuf;

    /// Look up an environment variable by name.
    ///
    /// Returns `None` when the variable is unset. Values that are not valid
    /// UTF-8 are also reported as unset — the contract is text-valued.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Derive an install directory that is a sibling of the directory
    /// holding the toolchain's own shared library.
    ///
    /// Takes the parent of the shared-library directory and appends
    /// `suffix` (a relative component such as `"bin"`; a leading `/` is
    /// tolerated and stripped). For a library at `/opt/toolchain/lib` and
    /// suffix `"bin"` this yields `/opt/toolchain/bin`.
    ///
    /// Known looseness, kept deliberately: any single-level-deep layout is
    /// accepted — the last segment of the library directory is not required
    /// to be literally `lib`. The derived path is never checked for
    /// existence on disk, and the derivation is recomputed on every call.
    ///
    /// ## Errors
    ///
    /// - [`HostError::ShlibDirUnavailable`](crate::HostError::ShlibDirUnavailable)
    ///   when the library locator cannot report a directory
    /// - [`HostError::NoParentPath`](crate::HostError::NoParentPath) when the
    ///   library directory has no usable parent segment (e.g. `/lib`)
    fn path_relative_to_library(&self, suffix: &str) -> Result<PathBuf>;

    /// The directory holding the toolchain's support executables.
    ///
    /// Equivalent to [`HostInfo::path_relative_to_library`] with suffix
    /// `"bin"`.
    ///
    /// ## Errors
    ///
    /// Same as [`HostInfo::path_relative_to_library`].
    fn support_exe_dir(&self) -> Result<PathBuf>
    {
        self.path_relative_to_library("bin")
    }

    /// The platform-conventional install directory for the toolchain's
    /// headers.
    ///
    /// A fixed path; not derived from the library location.
    ///
    /// ## Errors
    ///
    /// None on current platforms; the signature leaves room for variants
    /// that must derive the path.
    fn header_dir(&self) -> Result<PathBuf>;
}
