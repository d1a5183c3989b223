//! AWS CLI command execution.
//!
//! Runs `aws` commands with a bounded wait and returns their stdout.

use crate::error::InventoryError;
use colored::Colorize;
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;
use tokio::process::Command;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Limits applied to every command.
#[derive(Debug, Clone, Copy)]
pub struct RunLimits {
    /// Kill the command if it has not finished by then.
    pub timeout: Duration,
    /// Reject stdout larger than this.
    pub max_output_bytes: usize,
}

/// Run a command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
/// The child is killed when `limits.timeout` elapses.
pub async fn run(cmd: &str, limits: RunLimits) -> Result<String, InventoryError> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let Some((program, args)) = cmds.split_first() else {
        return Err(InventoryError::Spawn {
            cmd: cmd.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
        });
    };

    let mut command = Command::new(program);
    command.args(args).kill_on_drop(true);

    let output = match tokio::time::timeout(limits.timeout, command.output()).await {
        Ok(result) => result.map_err(|e| {
            log::error!("Command execution failed: {}", e);
            InventoryError::Spawn {
                cmd: cmd.to_string(),
                source: e,
            }
        })?,
        Err(_elapsed) => {
            log::warn!(
                "{timeout} after {secs}s {cmd}",
                timeout = "timeout".on_red(),
                secs = limits.timeout.as_secs(),
                cmd = cmd.on_blue()
            );
            return Err(InventoryError::Timeout {
                cmd: cmd.to_string(),
                secs: limits.timeout.as_secs(),
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(InventoryError::Command {
            cmd: cmd.to_string(),
            code: output.status.code(),
            stderr,
        });
    }

    log::debug!("Success cmd: {cmd}");
    log::debug!("Success output.stdout.len(): {}", output.stdout.len());

    if output.stdout.len() > limits.max_output_bytes {
        return Err(InventoryError::OutputTooLarge {
            cmd: cmd.to_string(),
            len: output.stdout.len(),
            limit: limits.max_output_bytes,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .filter(|s| !s.is_empty())
        .collect()
}
