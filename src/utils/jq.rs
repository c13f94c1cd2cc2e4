use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use frentes::error::JqError;

fn spawn_error(err: std::io::Error) -> JqError {
    match err.kind() {
        ErrorKind::NotFound => JqError::NotFound,
        _ => JqError::Spawn(err),
    }
}

/// Run a report through an external `jq` filter and return its stdout
pub(crate) fn filter_json(json: &str, filter: &str) -> Result<String, JqError> {
    let mut jq = Command::new("jq")
        .arg(filter)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_error)?;

    // stdin is dropped at the end of this block so jq sees EOF
    {
        let Some(mut stdin) = jq.stdin.take() else {
            return Err(JqError::Stdin(std::io::Error::from(ErrorKind::BrokenPipe)));
        };
        stdin.write_all(json.as_bytes()).map_err(JqError::Stdin)?;
    }

    let output = jq.wait_with_output().map_err(JqError::Wait)?;
    if !output.status.success() {
        let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(JqError::Filter(message));
    }
    String::from_utf8(output.stdout).map_err(JqError::Utf8)
}
