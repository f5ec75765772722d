//! Scoped working-directory changes.
//!
//! The working directory is process-global state; every component that
//! needs "current directory" goes through [`WorkDir`] (or the
//! [`with_dir`] wrapper) so the prior directory is restored on every
//! exit path, including panics. Guards nest and restore LIFO.

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// RAII guard: switches the process working directory on construction
/// and restores the previous one on drop.
#[derive(Debug)]
pub struct WorkDir {
    prev: PathBuf,
}

impl WorkDir {
    /// Switch the working directory to `path`, remembering the current one.
    pub fn enter(path: impl AsRef<Path>) -> io::Result<Self> {
        let prev = env::current_dir()?;
        env::set_current_dir(path.as_ref())?;
        Ok(WorkDir { prev })
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        // Cannot propagate from drop; log and move on.
        if let Err(e) = env::set_current_dir(&self.prev) {
            warn!(
                prev = %self.prev.display(),
                error = %e,
                "failed to restore working directory"
            );
        }
    }
}

/// Run `body` with the working directory set to `path`, restoring the
/// prior directory afterwards (also when `body` panics).
pub fn with_dir<T, F>(path: impl AsRef<Path>, body: F) -> io::Result<T>
where
    F: FnOnce() -> T,
{
    let _guard = WorkDir::enter(path)?;
    Ok(body())
}
