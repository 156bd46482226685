use std::io::Write;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use tracing::{info, warn};

use super::{hints, say, Installer};
use crate::config::PROGRAM;
use crate::error::InstallError;
use crate::privilege::Privilege;
use crate::service::{Operation, ServiceManager};

impl<M: ServiceManager> Installer<M> {
    /// Copy the unit into place, then reload, enable and start the service.
    ///
    /// Privilege and the source file are both checked before anything is
    /// written. The status query and the hint block never change the outcome.
    pub async fn install(
        &self,
        privilege: Privilege,
        out: &mut impl Write,
    ) -> Result<(), InstallError> {
        privilege.require_superuser(PROGRAM)?;

        let source = &self.config.unit_file;
        if !source.is_file() {
            return Err(InstallError::NotFound { path: source.clone() });
        }

        let service = &self.config.service_name;
        let destination = self.config.destination();
        if is_same_file(source, &destination).await {
            return Err(InstallError::SameFile { path: destination });
        }
        say(out, format_args!("Installing {service} service..."))?;

        // Overwrites any unit already installed there
        tokio::fs::copy(source, &destination)
            .await
            .map_err(|source_err| InstallError::Io {
                context: format!(
                    "failed to copy {} to {}",
                    source.display(),
                    destination.display()
                ),
                source: source_err,
            })?;
        info!(destination = %destination.display(), "unit file installed");
        say(out, format_args!("Copied {} to {}", source.display(), destination.display()))?;

        self.manager.run(&Operation::DaemonReload).await?;
        say(out, "Reloaded systemd daemon")?;

        self.manager.run(&Operation::Enable(service.clone())).await?;
        say(out, format_args!("Enabled {service} to start on boot"))?;

        self.manager.run(&Operation::Start(service.clone())).await?;
        say(out, format_args!("Started {service}"))?;

        say(out, "")?;
        say(out, "Service status:")?;
        match self.manager.invoke(&Operation::Status(service.clone())).await {
            Ok(0) => {}
            Ok(code) => warn!(code, "status query exited non-zero"),
            Err(e) => warn!("status query failed: {e}"),
        }

        say(out, "")?;
        hints::write(out, service)?;

        Ok(())
    }
}

/// True when both paths name the same inode. Copying a file onto itself
/// truncates it.
async fn is_same_file(a: &Path, b: &Path) -> bool {
    match (tokio::fs::metadata(a).await, tokio::fs::metadata(b).await) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}
