use crate::error::InstallError;
use crate::service::{Operation, ServiceManager};

/// Show `systemctl status` for the service, passing its exit code through.
pub async fn run<M: ServiceManager>(manager: &M, service: &str) -> Result<(), InstallError> {
    manager.run(&Operation::Status(service.to_string())).await
}
