use std::cell::RefCell;

use nerv_installer::client;
use nerv_installer::error::InstallError;
use nerv_installer::privilege::Privilege;
use nerv_installer::service::{Operation, ServiceManager};

struct FixedManager {
    code: i32,
    calls: RefCell<Vec<Operation>>,
}

impl FixedManager {
    fn exiting(code: i32) -> Self {
        Self { code, calls: RefCell::new(Vec::new()) }
    }
}

impl ServiceManager for FixedManager {
    async fn invoke(&self, op: &Operation) -> Result<i32, InstallError> {
        self.calls.borrow_mut().push(op.clone());
        Ok(self.code)
    }
}

#[tokio::test]
async fn test_status_propagates_exit_code() {
    let manager = FixedManager::exiting(3);

    let err = client::status::run(&manager, "nerv-dashboard").await.unwrap_err();

    assert_eq!(err.exit_code(), 3);
    assert_eq!(
        *manager.calls.borrow(),
        vec![Operation::Status("nerv-dashboard".to_string())]
    );
}

#[tokio::test]
async fn test_restart_requires_root() {
    let manager = FixedManager::exiting(0);

    let err = client::restart::run(&manager, "nerv-dashboard", Privilege::Unprivileged, &mut Vec::<u8>::new())
        .await
        .unwrap_err();

    assert!(matches!(err, InstallError::Permission(_)));
    assert!(manager.calls.borrow().is_empty());
}

#[tokio::test]
async fn test_restart_reports_success() {
    let manager = FixedManager::exiting(0);
    let mut out = Vec::<u8>::new();

    client::restart::run(&manager, "nerv-dashboard", Privilege::Superuser, &mut out)
        .await
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Restarted nerv-dashboard\n");
    assert_eq!(
        *manager.calls.borrow(),
        vec![Operation::Restart("nerv-dashboard".to_string())]
    );
}
