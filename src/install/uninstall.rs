use std::io::Write;

use tracing::{info, warn};

use super::{say, Installer};
use crate::config::PROGRAM;
use crate::error::InstallError;
use crate::privilege::Privilege;
use crate::service::{Operation, ServiceManager};

impl<M: ServiceManager> Installer<M> {
    /// Stop and disable the service, remove its unit file and reload systemd.
    ///
    /// Stop and disable failures are only warnings since the service may
    /// already be stopped or disabled. The final reload is fatal.
    pub async fn uninstall(
        &self,
        privilege: Privilege,
        out: &mut impl Write,
    ) -> Result<(), InstallError> {
        privilege.require_superuser(PROGRAM)?;

        let service = &self.config.service_name;
        say(out, format_args!("Uninstalling {service} service..."))?;

        for op in [Operation::Stop(service.clone()), Operation::Disable(service.clone())] {
            match self.manager.run(&op).await {
                Ok(()) => say(out, format_args!("Ran {op}"))?,
                Err(e) => warn!("{e}, continuing"),
            }
        }

        let destination = self.config.destination();
        if destination.exists() {
            tokio::fs::remove_file(&destination)
                .await
                .map_err(|source| InstallError::Io {
                    context: format!("failed to remove {}", destination.display()),
                    source,
                })?;
            info!(destination = %destination.display(), "unit file removed");
            say(out, format_args!("Removed {}", destination.display()))?;
        } else {
            say(out, format_args!("Unit file not installed ({} not found)", destination.display()))?;
        }

        self.manager.run(&Operation::DaemonReload).await?;
        say(out, "Reloaded systemd daemon")?;

        say(out, format_args!("{service} uninstalled"))?;
        Ok(())
    }
}
