//! # POSIX Host Information
//!
//! [`HostInfo`] and [`NameLookup`] for the POSIX host family (Linux, macOS,
//! *BSD).
//!
//! ## Platform calls used
//!
//! - **sysconf(_SC_PAGESIZE)**: memory page size
//! - **gethostname(2)** + **getaddrinfo(3)** with `AI_CANONNAME`: host name,
//!   preferring the fully-qualified form when the resolver knows it
//! - **getuid/getgid/geteuid/getegid**: process identity
//! - **getpwuid_r(3)** / **getgrgid_r(3)**: identity-to-name resolution
//!   (re-entrant forms only; any failure yields an absent name)
//!
//! All unsafe blocks are confined to this module and own every buffer they
//! pass to libc.

use std::env;
use std::ffi::{CStr, CString};
use std::mem;
use std::path::{Path, PathBuf};
use std::ptr;

use tracing::{debug, trace};

use crate::error::{HostError, Result};
use crate::host_info::HostInfo;
use crate::locator::{DladdrLocator, LibraryLocator};
use crate::resolver::{NameLookup, UserIdResolver};

/// Size of the scratch buffers handed to `getpwuid_r`/`getgrgid_r`.
///
/// Large enough for any realistic account entry; an entry that does not fit
/// is reported as unresolvable rather than retried with a bigger buffer.
const ACCOUNT_BUFFER_SIZE: usize = 4096;

/// Size of the buffer handed to `gethostname`.
///
/// Matches the account buffers; far beyond any RFC 1035 host name, so a name
/// is never truncated in practice.
const HOSTNAME_BUFFER_SIZE: usize = 4096;

/// Identity-to-name lookup via the POSIX account database.
///
/// One uncached query per call; combine with
/// [`UserIdResolver`](crate::UserIdResolver) for memoization. Only the
/// re-entrant `_r` forms are used, so concurrent calls are safe even outside
/// the resolver's locking.
#[derive(Default)]
pub struct PosixNameLookup;

impl NameLookup for PosixNameLookup
{
    fn user_name(&self, uid: u32) -> Option<String>
    {
        let mut pwd: libc::passwd = unsafe { mem::zeroed() };
        let mut buf = [0_u8; ACCOUNT_BUFFER_SIZE];
        let mut result: *mut libc::passwd = ptr::null_mut();

        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr().cast(), buf.len(), &mut result)
        };
        if rc != 0 || result.is_null() {
            return None;
        }

        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        name.to_str().ok().map(str::to_owned)
    }

    fn group_name(&self, gid: u32) -> Option<String>
    {
        let mut grp: libc::group = unsafe { mem::zeroed() };
        let mut buf = [0_u8; ACCOUNT_BUFFER_SIZE];
        let mut result: *mut libc::group = ptr::null_mut();

        let rc = unsafe {
            libc::getgrgid_r(gid, &mut grp, buf.as_mut_ptr().cast(), buf.len(), &mut result)
        };
        if rc != 0 || result.is_null() {
            return None;
        }

        let name = unsafe { CStr::from_ptr(grp.gr_name) };
        name.to_str().ok().map(str::to_owned)
    }
}

/// Host information for POSIX systems.
///
/// Owns the identity-resolution cache and the library locator; construct one
/// at startup and share it by reference. All queries are stateless apart
/// from the resolver's memoization.
///
/// ## Example
///
/// ```rust
/// use rdbg_host::{HostInfo, PosixHostInfo};
///
/// let host = PosixHostInfo::new();
/// println!("page size: {}", host.page_size());
/// if let Some(name) = host.resolver().user_name(host.user_id()) {
///     println!("running as {name}");
/// }
/// ```
pub struct PosixHostInfo
{
    resolver: UserIdResolver<PosixNameLookup>,
    locator: Box<dyn LibraryLocator>,
}

impl PosixHostInfo
{
    /// Create a host-info instance anchored on the real library location.
    #[must_use]
    pub fn new() -> Self
    {
        Self::with_locator(Box::new(DladdrLocator::new()))
    }

    /// Create a host-info instance with an injected library locator.
    ///
    /// Used by tests and by embedders with a known install layout.
    #[must_use]
    pub fn with_locator(locator: Box<dyn LibraryLocator>) -> Self
    {
        Self {
            resolver: UserIdResolver::new(PosixNameLookup),
            locator,
        }
    }

    /// The identity-resolution cache owned by this instance.
    pub fn resolver(&self) -> &UserIdResolver<PosixNameLookup>
    {
        &self.resolver
    }
}

impl Default for PosixHostInfo
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl HostInfo for PosixHostInfo
{
    fn page_size(&self) -> usize
    {
        // _SC_PAGESIZE cannot fail on the hosts we support.
        let raw = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        usize::try_from(raw).unwrap_or(0)
    }

    fn hostname(&self) -> Result<String>
    {
        let mut buf = [0_u8; HOSTNAME_BUFFER_SIZE];
        let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len() - 1) };
        if rc != 0 {
            return Err(HostError::HostnameUnavailable {
                source: std::io::Error::last_os_error(),
            });
        }

        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        let bare = String::from_utf8_lossy(&buf[..end]).into_owned();
        Ok(canonical_hostname(&bare).unwrap_or(bare))
    }

    fn user_id(&self) -> u32
    {
        unsafe { libc::getuid() }
    }

    fn group_id(&self) -> u32
    {
        unsafe { libc::getgid() }
    }

    fn effective_user_id(&self) -> u32
    {
        unsafe { libc::geteuid() }
    }

    fn effective_group_id(&self) -> u32
    {
        unsafe { libc::getegid() }
    }

    fn default_shell(&self) -> PathBuf
    {
        PathBuf::from("/bin/sh")
    }

    fn env_var(&self, name: &str) -> Option<String>
    {
        env::var_os(name).and_then(|value| value.into_string().ok())
    }

    fn path_relative_to_library(&self, suffix: &str) -> Result<PathBuf>
    {
        let shlib_dir = self.locator.shlib_dir().ok_or(HostError::ShlibDirUnavailable)?;
        trace!(
            target: "host",
            dir = %shlib_dir.display(),
            suffix,
            "deriving install directory relative to the hosting library"
        );

        // Most POSIX layouts keep helper executables in */bin next to the
        // */lib holding this library. Any single-level-deep directory is
        // accepted; the last segment is not required to be literally "lib".
        let parent = match shlib_dir.parent() {
            Some(p) if !p.as_os_str().is_empty() && p != Path::new("/") => p,
            _ => {
                debug!(
                    target: "host",
                    dir = %shlib_dir.display(),
                    "library directory has no parent segment; bailing on sibling derivation"
                );
                return Err(HostError::NoParentPath { path: shlib_dir });
            }
        };

        let derived = parent.join(suffix.trim_start_matches('/'));
        debug!(target: "host", derived = %derived.display(), "derived sibling install directory");
        Ok(derived)
    }

    fn header_dir(&self) -> Result<PathBuf>
    {
        Ok(PathBuf::from("/opt/local/include/rdbg"))
    }
}

/// Resolve a bare host name to its canonical (fully-qualified) form.
///
/// Returns `None` when the resolver has no canonical name, in which case the
/// caller keeps the bare name.
fn canonical_hostname(bare: &str) -> Option<String>
{
    let node = CString::new(bare).ok()?;

    let mut hints: libc::addrinfo = unsafe { mem::zeroed() };
    hints.ai_flags = libc::AI_CANONNAME;
    hints.ai_family = libc::AF_UNSPEC;

    let mut res: *mut libc::addrinfo = ptr::null_mut();
    let rc = unsafe { libc::getaddrinfo(node.as_ptr(), ptr::null(), &hints, &mut res) };
    if rc != 0 || res.is_null() {
        return None;
    }

    let canonical = unsafe {
        let raw = (*res).ai_canonname;
        let name = if raw.is_null() {
            None
        } else {
            CStr::from_ptr(raw).to_str().ok().map(str::to_owned)
        };
        libc::freeaddrinfo(res);
        name
    };
    canonical
}
