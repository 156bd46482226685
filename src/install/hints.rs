use std::io::Write;

use super::say;
use crate::error::InstallError;

/// Follow-up commands for checking on, restarting and tailing the service
pub fn follow_up_commands(service: &str) -> [String; 3] {
    [
        format!("sudo systemctl status {service}"),
        format!("sudo systemctl restart {service}"),
        format!("sudo journalctl -u {service} -f"),
    ]
}

pub fn write(out: &mut impl Write, service: &str) -> Result<(), InstallError> {
    say(out, "Useful commands:")?;
    for command in follow_up_commands(service) {
        say(out, format_args!("  {command}"))?;
    }
    Ok(())
}
