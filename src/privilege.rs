use nix::unistd::Uid;

use crate::error::InstallError;

/// Whether the process may touch system-level service configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    Superuser,
    Unprivileged,
}

impl Privilege {
    /// Privilege of the running process, from its effective UID
    pub fn current() -> Self {
        if Uid::effective().is_root() {
            Privilege::Superuser
        } else {
            Privilege::Unprivileged
        }
    }

    /// Fails with a `sudo` hint naming `program` unless running as root.
    pub fn require_superuser(self, program: &str) -> Result<(), InstallError> {
        match self {
            Privilege::Superuser => Ok(()),
            Privilege::Unprivileged => Err(InstallError::Permission(program.to_string())),
        }
    }
}
