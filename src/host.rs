//! Local host sink — hostname file and kernel apply.

use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::propagate::HostSink;

/// Well-known hostname file, read back by `hostname -F` during apply.
pub const HOSTNAME_PATH: &str = "/etc/hostname";

const HOSTNAME_BIN: &str = "/bin/hostname";

/// The running machine: writes the hostname file and execs the apply.
pub struct LocalHost {
    path: PathBuf,
}

impl LocalHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HostSink for LocalHost {
    /// Single full-file write, owner-only permissions, no trailing newline.
    /// The handle closes before this returns, error paths included.
    fn write_hostname(&self, hostname: &str) -> Result<(), String> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&self.path)
            .map_err(|e| format!("cannot open {}: {}", self.path.display(), e))?;
        file.write_all(hostname.as_bytes())
            .map_err(|e| format!("cannot write {}: {}", self.path.display(), e))?;
        Ok(())
    }

    fn apply_hostname(&self) -> Result<(), String> {
        // exec(2) replaces the process image; reaching the line below it
        // means the invocation itself failed.
        let err = Command::new(HOSTNAME_BIN).arg("-F").arg(&self.path).exec();
        Err(format!("cannot exec {}: {}", HOSTNAME_BIN, err))
    }
}
