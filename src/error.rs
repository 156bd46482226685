use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("this command must be run as root (try: sudo {0})")]
    Permission(String),

    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("{} is already the installed unit file", .path.display())]
    SameFile { path: PathBuf },

    #[error("`{command}` failed with exit code {code}")]
    ExternalCommand { command: String, code: i32 },

    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl InstallError {
    /// Process exit code for this failure. Failed commands pass their own code through.
    pub fn exit_code(&self) -> i32 {
        match self {
            InstallError::ExternalCommand { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_command_propagates_its_code() {
        let err = InstallError::ExternalCommand {
            command: "systemctl enable nerv-dashboard".to_string(),
            code: 4,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn precondition_failures_exit_with_one() {
        assert_eq!(InstallError::Permission("nerv-installer".into()).exit_code(), 1);
        let err = InstallError::NotFound { path: PathBuf::from("nerv-dashboard.service") };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn zero_code_never_reads_as_success() {
        let err = InstallError::ExternalCommand { command: "systemctl start x".into(), code: 0 };
        assert_eq!(err.exit_code(), 1);
    }
}
