//! Lifecycle error types

use std::fmt;
use tabintent_store::StoreError;
use thiserror::Error;

/// External collaborator the core calls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Alarms,
    Notifications,
    Tabs,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Service::Alarms => "alarm scheduler",
            Service::Notifications => "notification surface",
            Service::Tabs => "tab source",
        })
    }
}

#[derive(Debug, Error)]
#[error("{service} failed: {message}")]
pub struct ServiceError {
    pub service: Service,
    pub message: String,
}

impl ServiceError {
    pub fn new(service: Service, message: impl Into<String>) -> Self {
        Self {
            service,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Rejected before any state was touched
    #[error("invalid request: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub type Result<T> = std::result::Result<T, LifecycleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_message() {
        let err = ServiceError::new(Service::Notifications, "permission denied");
        assert_eq!(
            err.to_string(),
            "notification surface failed: permission denied"
        );
    }

    #[test]
    fn test_lifecycle_error_wraps_service() {
        let err: LifecycleError = ServiceError::new(Service::Tabs, "gone").into();
        assert!(matches!(err, LifecycleError::Service(_)));
        assert_eq!(err.to_string(), "tab source failed: gone");
    }
}
