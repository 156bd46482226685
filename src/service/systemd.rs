use std::ffi::OsString;

use tokio::process::Command;
use tracing::debug;

use super::{exit_code_of, Operation, ServiceManager};
use crate::error::InstallError;

/// Drives systemd through the `systemctl` binary.
#[derive(Debug, Clone)]
pub struct Systemctl {
    program: OsString,
}

impl Default for Systemctl {
    fn default() -> Self {
        Self::with_program("systemctl")
    }
}

impl Systemctl {
    /// Use a different executable in place of `systemctl`
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }
}

impl ServiceManager for Systemctl {
    async fn invoke(&self, op: &Operation) -> Result<i32, InstallError> {
        debug!(command = %op, "running service manager");

        let status = Command::new(&self.program)
            .args(op.args())
            .status()
            .await
            .map_err(|source| InstallError::Spawn {
                command: op.to_string(),
                source,
            })?;

        let code = exit_code_of(status);
        debug!(command = %op, code, "service manager exited");

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    #[tokio::test]
    async fn successful_program_reports_zero() {
        let manager = Systemctl::with_program("true");
        assert_eq!(manager.invoke(&Operation::DaemonReload).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn failing_program_becomes_external_command_error() {
        let manager = Systemctl::with_program("false");
        let err = manager
            .run(&Operation::Start("nerv-dashboard".to_string()))
            .await
            .unwrap_err();

        match err {
            InstallError::ExternalCommand { command, code } => {
                assert_eq!(command, "systemctl start nerv-dashboard");
                assert_eq!(code, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn killed_program_exits_with_128_plus_signal() {
        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("systemctl");
        fs::write(&script, "#!/bin/sh\nkill -9 $$\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let manager = Systemctl::with_program(&script);
        let err = manager.run(&Operation::DaemonReload).await.unwrap_err();

        assert!(matches!(err, InstallError::ExternalCommand { code: 137, .. }));
        assert_eq!(err.exit_code(), 137);
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let manager = Systemctl::with_program("/nonexistent/systemctl");
        let err = manager.invoke(&Operation::DaemonReload).await.unwrap_err();
        assert!(matches!(err, InstallError::Spawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
