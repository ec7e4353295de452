//! # Identity Resolution Cache
//!
//! Caching, thread-safe mapping from numeric user/group IDs to names.
//!
//! Resolving a numeric ID to a name means hitting the platform's account
//! database (`getpwuid_r` and friends), which can be slow — NIS/LDAP-backed
//! hosts may even touch the network. The debugger asks for the same handful
//! of IDs over and over (every stop, every thread list), so the resolver
//! performs each platform lookup exactly once per identity and memoizes the
//! answer for the lifetime of the process, negative answers included.
//!
//! ## Thread Safety
//!
//! [`UserIdResolver`] takes `&self` everywhere and is `Sync`; one instance is
//! shared across all debugger threads. Each cache partition (users, groups)
//! is guarded by its own mutex, held across the platform lookup itself. That
//! guarantees at most one in-flight platform query per partition: a second
//! thread asking for an ID that is currently being resolved blocks until the
//! first answer lands in the cache, then reads it.
//!
//! ## Platform seam
//!
//! The actual lookup is behind the [`NameLookup`] trait, one implementation
//! per host family (see `platform::posix::PosixNameLookup`). The caching and
//! locking logic lives here once and is shared by every implementation —
//! platform modules never reimplement it. Tests substitute an instrumented
//! lookup to observe exactly how many platform calls occur.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Platform capability for resolving numeric identities to names.
///
/// Implementations perform a single uncached lookup against the host's
/// account database. Returning `None` means the identity has no resolvable
/// name (unknown ID, deleted account, unsupported call); the resolver caches
/// that outcome and never asks again.
pub trait NameLookup
{
    /// Resolve a numeric user ID to a user name.
    fn user_name(&self, uid: u32) -> Option<String>;

    /// Resolve a numeric group ID to a group name.
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Caching resolver for user and group names.
///
/// Owns two independent cache partitions — one for user IDs, one for group
/// IDs — plus the platform lookup capability. Construct one at startup and
/// hand it (or a reference) to whatever needs identity information; there is
/// deliberately no process-wide global instance, so tests can build a fresh
/// resolver around a test double.
///
/// ## Example
///
/// ```rust
/// use rdbg_host::resolver::{NameLookup, UserIdResolver};
///
/// struct StaticLookup;
///
/// impl NameLookup for StaticLookup
/// {
///     fn user_name(&self, uid: u32) -> Option<String>
///     {
///         (uid == 0).then(|| "root".to_string())
///     }
///
///     fn group_name(&self, _gid: u32) -> Option<String>
///     {
///         None
///     }
/// }
///
/// let resolver = UserIdResolver::new(StaticLookup);
/// assert_eq!(resolver.user_name(0), Some("root".to_string()));
/// assert_eq!(resolver.user_name(4242), None);
/// ```
pub struct UserIdResolver<L>
{
    lookup: L,
    users: Mutex<HashMap<u32, Option<String>>>,
    groups: Mutex<HashMap<u32, Option<String>>>,
}

impl<L: NameLookup> UserIdResolver<L>
{
    /// Create a resolver with empty caches around the given platform lookup.
    pub fn new(lookup: L) -> Self
    {
        Self {
            lookup,
            users: Mutex::new(HashMap::new()),
            groups: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a user ID to a name, consulting the cache first.
    ///
    /// The first call for a given `uid` performs one platform lookup and
    /// stores the result; every later call returns the stored result without
    /// touching the platform, whether the lookup succeeded or not.
    pub fn user_name(&self, uid: u32) -> Option<String>
    {
        let mut cache = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        cache.entry(uid).or_insert_with(|| self.lookup.user_name(uid)).clone()
    }

    /// Resolve a group ID to a name, consulting the cache first.
    ///
    /// Same contract as [`UserIdResolver::user_name`], against the
    /// independent group partition.
    pub fn group_name(&self, gid: u32) -> Option<String>
    {
        let mut cache = self.groups.lock().unwrap_or_else(PoisonError::into_inner);
        cache.entry(gid).or_insert_with(|| self.lookup.group_name(gid)).clone()
    }

    /// Access the underlying platform lookup.
    ///
    /// Mostly useful for tests that instrument the lookup with counters.
    pub fn lookup(&self) -> &L
    {
        &self.lookup
    }
}
