use std::sync::Arc;

use thiserror::Error;

pub mod access_scope;
pub mod category_map;
pub mod clock;
pub mod config;
pub mod daily_performance;
pub mod eligibility;
pub mod nsh;
pub mod permission;
pub mod report;
pub mod user_service;
pub mod user_set;
pub mod worklog;

pub use permission::{Authentication, MockPermissionService, PermissionService};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] dao::DaoError),

    #[error("Forbidden")]
    Forbidden,

    #[error("Requesting user has no region assignment")]
    NoRegionAssigned,

    #[error("Validation error: {0:?}")]
    ValidationError(Arc<[ValidationFailureItem]>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailureItem {
    #[error("{0}: {1}")]
    InvalidValue(Arc<str>, Arc<str>),
}

impl ValidationFailureItem {
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidValue(field, _) => field,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidValue(_, message) => message,
        }
    }
}
