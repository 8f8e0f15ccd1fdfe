use crate::raw::{parse_raw_output, RawAuditOutput};
use std::process::Command;
use thiserror::Error;

/// Errors from one audit engine invocation. Each scan is a single attempt;
/// nothing here is retried automatically.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to launch audit engine '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("audit engine exited with {status}: {stderr}")]
    Engine { status: String, stderr: String },
    #[error("failed to parse audit engine output: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Narrow port to the external accessibility audit engine.
///
/// Implementations inspect a live page however they like; the core only sees
/// the raw output. Tests substitute an in-memory fixture.
pub trait AuditEngine {
    fn audit(&self, url: &str) -> Result<RawAuditOutput, AuditError>;
}

/// Adapter that runs the engine as a subprocess emitting JSON on stdout
/// (pa11y-style invocation by default).
#[derive(Clone, Debug)]
pub struct CommandAuditEngine {
    program: String,
    args: Vec<String>,
}

impl CommandAuditEngine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandAuditEngine {
            program: program.into(),
            args,
        }
    }
}

impl Default for CommandAuditEngine {
    fn default() -> Self {
        CommandAuditEngine::new(
            "pa11y",
            vec![
                "--reporter".to_string(),
                "json".to_string(),
                "--include-notices".to_string(),
                "--include-warnings".to_string(),
            ],
        )
    }
}

impl AuditEngine for CommandAuditEngine {
    fn audit(&self, url: &str) -> Result<RawAuditOutput, AuditError> {
        log::debug!("spawning audit engine: {} {:?} {url}", self.program, self.args);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .output()
            .map_err(|source| AuditError::Launch {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);

        // Engines signal "issues found" via non-zero exit while still
        // printing a valid report, so parseable stdout always wins.
        match parse_raw_output(&stdout) {
            Ok(raw) => Ok(raw),
            Err(parse_err) if output.status.success() => Err(AuditError::Parse(parse_err)),
            Err(parse_err) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                if stderr.is_empty() {
                    log::warn!("audit engine produced no stderr; stdout was unparseable");
                    Err(AuditError::Parse(parse_err))
                } else {
                    Err(AuditError::Engine {
                        status: output.status.to_string(),
                        stderr,
                    })
                }
            }
        }
    }
}
