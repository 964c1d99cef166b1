use super::{LocationError, LocationOptions, LocationProvider};
use crate::models::Geolocation;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs a user-configured shell command and reads a JSON fix from its
/// stdout: `{"latitude": .., "longitude": .., "accuracy": ..}`.
///
/// Request options are exported to the command as `ABSENCELOG_HIGH_ACCURACY`,
/// `ABSENCELOG_TIMEOUT_MS` and `ABSENCELOG_MAX_AGE_MS`.
#[derive(Debug, Clone)]
pub struct CommandProvider {
    command: String,
}

impl CommandProvider {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn shell(&self) -> Command {
        if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.command);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(&self.command);
            c
        }
    }
}

#[async_trait]
impl LocationProvider for CommandProvider {
    fn is_supported(&self) -> bool {
        !self.command.trim().is_empty()
    }

    async fn locate(&self, options: &LocationOptions) -> Result<Geolocation, LocationError> {
        debug!(command = %self.command, "requesting location");

        let output = self
            .shell()
            .env(
                "ABSENCELOG_HIGH_ACCURACY",
                if options.high_accuracy { "1" } else { "0" },
            )
            .env(
                "ABSENCELOG_TIMEOUT_MS",
                options.timeout.as_millis().to_string(),
            )
            .env(
                "ABSENCELOG_MAX_AGE_MS",
                options.max_cached_age.as_millis().to_string(),
            )
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| LocationError::Unavailable(format!("cannot run location command: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            // Exit code 77 (EX_NOPERM) is how the command reports a denied request.
            if output.status.code() == Some(77) {
                return Err(LocationError::PermissionDenied(stderr));
            }
            return Err(LocationError::Unavailable(if stderr.is_empty() {
                format!("location command exited with {}", output.status)
            } else {
                stderr
            }));
        }

        let reading: Geolocation = serde_json::from_slice(&output.stdout)
            .map_err(|e| LocationError::Unavailable(format!("invalid location output: {e}")))?;

        super::validate(reading)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parses_json_from_stdout() {
        let p = CommandProvider::new(
            r#"echo '{"latitude": 45.5, "longitude": 9.2, "accuracy": 15}'"#,
        );
        let geo = p.locate(&LocationOptions::default()).await.unwrap();
        assert_eq!(geo, Geolocation::new(45.5, 9.2, 15.0));
    }

    #[tokio::test]
    async fn non_zero_exit_is_unavailable() {
        let p = CommandProvider::new("echo 'no fix' >&2; exit 3");
        let err = p.locate(&LocationOptions::default()).await.unwrap_err();
        assert_eq!(err, LocationError::Unavailable("no fix".into()));
    }

    #[tokio::test]
    async fn exit_77_is_permission_denied() {
        let p = CommandProvider::new("exit 77");
        let err = p.locate(&LocationOptions::default()).await.unwrap_err();
        assert!(matches!(err, LocationError::PermissionDenied(_)));
    }

    #[test]
    fn empty_command_is_unsupported() {
        assert!(!CommandProvider::new("  ").is_supported());
    }
}
