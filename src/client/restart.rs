use std::io::Write;

use crate::config::PROGRAM;
use crate::error::InstallError;
use crate::install::say;
use crate::privilege::Privilege;
use crate::service::{Operation, ServiceManager};

pub async fn run<M: ServiceManager>(
    manager: &M,
    service: &str,
    privilege: Privilege,
    out: &mut impl Write,
) -> Result<(), InstallError> {
    privilege.require_superuser(PROGRAM)?;

    manager.run(&Operation::Restart(service.to_string())).await?;
    say(out, format_args!("Restarted {service}"))
}
