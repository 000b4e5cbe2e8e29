//! Run the curl binary and collect its output.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::RequestError;

/// Run `binary` with `args` (no shell) and return stdout on a zero exit.
///
/// Blocks until the process exits; timeouts are curl's own (`--max-time`).
pub(crate) fn run_tool(binary: &Path, args: &[String]) -> Result<Vec<u8>, RequestError> {
    let output = Command::new(binary)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| RequestError::Execution {
            message: e.to_string(),
            stderr: String::new(),
        })?;

    if output.status.success() {
        return Ok(output.stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    match output.status.code() {
        Some(exit_code) => {
            tracing::warn!(exit_code, stderr = %stderr, "curl exited with an error");
            Err(RequestError::Tool { exit_code })
        }
        None => Err(RequestError::Execution {
            message: format!("curl terminated without an exit code ({})", output.status),
            stderr,
        }),
    }
}
