//! # Library Locator
//!
//! Reports where the toolchain's own shared library lives on disk.
//!
//! Install-directory derivation (see [`HostInfo`](crate::HostInfo)) anchors
//! on the directory containing the shared library that hosts this code: a
//! library at `/opt/toolchain/lib/librdbg.so` implies support executables in
//! `/opt/toolchain/bin`. The locator is the seam that supplies that anchor,
//! so embedders and tests can substitute a fixed directory.

use std::path::PathBuf;

/// Source of the directory containing the toolchain's hosting shared
/// library.
///
/// `None` means the location could not be determined; path derivation
/// treats that as failure.
pub trait LibraryLocator: Send + Sync
{
    /// The directory holding the shared library (or executable image) that
    /// hosts this code.
    fn shlib_dir(&self) -> Option<PathBuf>;
}

/// Locator backed by `dladdr(3)`.
///
/// Asks the dynamic linker which image contains an address inside this
/// crate. When the toolchain is linked as a shared library this reports the
/// library's directory; in a statically linked binary it reports the
/// executable's directory, which anchors the same layout.
///
/// The image location cannot change within a process, so the answer is
/// resolved once and memoized — including a failed resolution.
#[cfg(unix)]
#[derive(Default)]
pub struct DladdrLocator
{
    dir: once_cell::sync::OnceCell<Option<PathBuf>>,
}

#[cfg(unix)]
impl DladdrLocator
{
    /// Create a locator; resolution happens lazily on first use.
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }
}

#[cfg(unix)]
impl LibraryLocator for DladdrLocator
{
    fn shlib_dir(&self) -> Option<PathBuf>
    {
        self.dir.get_or_init(resolve_hosting_image_dir).clone()
    }
}

/// Ask the dynamic linker for the image containing this function, and return
/// the directory part of its path.
#[cfg(unix)]
fn resolve_hosting_image_dir() -> Option<PathBuf>
{
    use std::ffi::{CStr, OsStr};
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;
    use std::ptr;

    let mut info = libc::Dl_info {
        dli_fname: ptr::null(),
        dli_fbase: ptr::null_mut(),
        dli_sname: ptr::null(),
        dli_saddr: ptr::null_mut(),
    };

    // Any address inside this crate identifies the hosting image; this
    // function's own entry point is as good as any.
    let anchor = resolve_hosting_image_dir as *const ();
    let rc = unsafe { libc::dladdr(anchor.cast(), &mut info) };
    if rc == 0 || info.dli_fname.is_null() {
        tracing::debug!(target: "host", "dladdr could not identify the hosting image");
        return None;
    }

    let fname = unsafe { CStr::from_ptr(info.dli_fname) };
    let image = Path::new(OsStr::from_bytes(fname.to_bytes()));
    image.parent().map(Path::to_path_buf)
}

/// Locator returning a preset directory.
///
/// Used by tests and by embedders that know their install layout up front.
pub struct FixedLocator
{
    dir: Option<PathBuf>,
}

impl FixedLocator
{
    /// A locator that always reports the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self
    {
        Self { dir: Some(dir.into()) }
    }

    /// A locator that reports no location at all.
    #[must_use]
    pub fn unavailable() -> Self
    {
        Self { dir: None }
    }
}

impl LibraryLocator for FixedLocator
{
    fn shlib_dir(&self) -> Option<PathBuf>
    {
        self.dir.clone()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_fixed_locator_reports_preset_dir()
    {
        let locator = FixedLocator::new("/opt/toolchain/lib");
        assert_eq!(locator.shlib_dir(), Some(PathBuf::from("/opt/toolchain/lib")));
    }

    #[test]
    fn test_unavailable_locator_reports_none()
    {
        assert_eq!(FixedLocator::unavailable().shlib_dir(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_dladdr_locator_finds_hosting_image()
    {
        // In a test binary the hosting image is the test executable itself;
        // either way a directory must come back.
        let locator = DladdrLocator::new();
        let dir = locator.shlib_dir().expect("dladdr should resolve the test binary");
        assert!(dir.is_absolute());
        // Memoized: the second answer is byte-identical.
        assert_eq!(locator.shlib_dir(), Some(dir));
    }
}
