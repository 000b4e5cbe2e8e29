//! Stand-in for the curl binary used by integration tests.
//!
//! Writes a small `/bin/sh` script into a temp dir. When run it records its
//! arguments (one per line) to `argv`, prints the canned stdout and stderr,
//! then exits with the configured code (or kills itself with a signal).

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static SERIAL: Mutex<()> = Mutex::new(());

/// Serialize tests that write and then exec a script: a fork in another
/// test thread while the script is still open for writing makes exec fail
/// with ETXTBSY.
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

pub enum Exit {
    Code(i32),
    Signal(&'static str),
}

pub struct StubCurl {
    dir: TempDir,
    pub binary: PathBuf,
}

impl StubCurl {
    pub fn new(stdout: &[u8], stderr: &str, exit: Exit) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("stdout");
        let err = dir.path().join("stderr");
        fs::write(&out, stdout).unwrap();
        fs::write(&err, stderr).unwrap();
        let finish = match exit {
            Exit::Code(code) => format!("exit {code}"),
            Exit::Signal(sig) => format!("kill -{sig} $$"),
        };
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{argv}'\ncat '{out}'\ncat '{err}' >&2\n{finish}\n",
            argv = dir.path().join("argv").display(),
            out = out.display(),
            err = err.display(),
        );
        let binary = dir.path().join("curl-stub");
        fs::write(&binary, script).unwrap();
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir, binary }
    }

    pub fn ok(stdout: &[u8]) -> Self {
        Self::new(stdout, "", Exit::Code(0))
    }

    /// Arguments the stub was last invoked with.
    pub fn argv(&self) -> Vec<String> {
        let raw = fs::read_to_string(self.dir.path().join("argv")).expect("stub was not run");
        raw.lines().map(str::to_string).collect()
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
