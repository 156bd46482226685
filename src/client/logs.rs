use tokio::process::Command;
use tracing::debug;

use crate::error::InstallError;
use crate::service::exit_code_of;

/// `journalctl` arguments for tailing `service`
pub fn journal_args(service: &str, lines: usize, follow: bool) -> Vec<String> {
    let mut args = vec![
        "-u".to_string(),
        service.to_string(),
        "-n".to_string(),
        lines.to_string(),
        "--no-pager".to_string(),
    ];
    if follow {
        args.push("-f".to_string());
    }
    args
}

pub async fn run(service: &str, lines: usize, follow: bool) -> Result<(), InstallError> {
    let args = journal_args(service, lines, follow);
    let command = format!("journalctl {}", args.join(" "));
    debug!(%command, "tailing service logs");

    let status = Command::new("journalctl")
        .args(&args)
        .status()
        .await
        .map_err(|source| InstallError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !status.success() {
        return Err(InstallError::ExternalCommand {
            command,
            code: exit_code_of(status),
        });
    }

    Ok(())
}
