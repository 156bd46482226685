mod systemd;

use std::fmt;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use crate::error::InstallError;

pub use systemd::Systemctl;

/// A single service-manager request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    DaemonReload,
    Enable(String),
    Disable(String),
    Start(String),
    Stop(String),
    Restart(String),
    Status(String),
}

impl Operation {
    /// `systemctl` arguments for this operation
    pub fn args(&self) -> Vec<&str> {
        match self {
            Operation::DaemonReload => vec!["daemon-reload"],
            Operation::Enable(service) => vec!["enable", service],
            Operation::Disable(service) => vec!["disable", service],
            Operation::Start(service) => vec!["start", service],
            Operation::Stop(service) => vec!["stop", service],
            Operation::Restart(service) => vec!["restart", service],
            // Status must never block on a pager
            Operation::Status(service) => vec!["status", service, "--no-pager"],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "systemctl {}", self.args().join(" "))
    }
}

/// Exit code of a finished command. A signal death reads as `128 + signal`,
/// the way a shell reports it.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

/// The OS service manager, driven one operation at a time.
#[allow(async_fn_in_trait)]
pub trait ServiceManager {
    /// Runs `op` to completion and returns its exit code.
    async fn invoke(&self, op: &Operation) -> Result<i32, InstallError>;

    /// Runs `op`, treating any non-zero exit as an error.
    async fn run(&self, op: &Operation) -> Result<(), InstallError> {
        match self.invoke(op).await? {
            0 => Ok(()),
            code => Err(InstallError::ExternalCommand {
                command: op.to_string(),
                code,
            }),
        }
    }
}
