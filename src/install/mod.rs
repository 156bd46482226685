pub mod hints;
mod install;
mod uninstall;

use std::fmt::Display;
use std::io::Write;

use crate::config::InstallConfig;
use crate::error::InstallError;

/// Runs the install and uninstall sequences against a service manager.
///
/// Every step either succeeds or ends the sequence with its error; nothing
/// already done is rolled back.
pub struct Installer<M> {
    config: InstallConfig,
    manager: M,
}

impl<M> Installer<M> {
    pub fn new(config: InstallConfig, manager: M) -> Self {
        Self { config, manager }
    }
}

/// Write one progress line
pub(crate) fn say(out: &mut impl Write, line: impl Display) -> Result<(), InstallError> {
    writeln!(out, "{line}")
        .and_then(|_| out.flush())
        .map_err(|source| InstallError::Io {
            context: "failed to write to standard output".to_string(),
            source,
        })
}
