//! One engine invocation: spawn, feed stdin once, collect output, bounded
//! by a timeout.

use std::io::ErrorKind;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use kundali_config::EngineSettings;

use crate::error::EngineFailure;

/// Longest stderr excerpt kept in an [`EngineFailure::Exit`].
const STDERR_EXCERPT_CHARS: usize = 500;

/// Run the engine described by `settings` with `payload` on stdin and
/// return its stdout if it exits successfully.
///
/// On timeout the child is killed (the future owning it is dropped with
/// `kill_on_drop` set).
pub async fn invoke(settings: &EngineSettings, payload: &[u8]) -> Result<String, EngineFailure> {
    let mut child = Command::new(&settings.program)
        .args(&settings.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| EngineFailure::Spawn {
            program: settings.program.clone(),
            source,
        })?;
    debug!(engine = %settings.label, pid = ?child.id(), "Engine spawned");

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| std::io::Error::other("engine stdin was not captured"))?;

    let feed = async move {
        let written = stdin.write_all(payload).await;
        // Dropping stdin closes the pipe so the engine sees EOF.
        drop(stdin);
        match written {
            // The engine may exit without reading its input; its exit status
            // is the interesting part.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    };
    let run = async move {
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        fed?;
        output
    };

    let output = match timeout(settings.timeout(), run).await {
        Ok(result) => result?,
        Err(_) => {
            warn!(
                engine = %settings.label,
                timeout_ms = settings.timeout_ms,
                "Engine timed out; killing"
            );
            return Err(EngineFailure::Timeout(settings.timeout_ms));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(EngineFailure::Exit {
            code: output.status.code(),
            stderr: stderr.trim().chars().take(STDERR_EXCERPT_CHARS).collect(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
