use std::fmt;

use thiserror::Error;

use crate::model::EmployeeId;

/// Shared result type for repository operations.
pub type HrResult<T> = Result<T, HrError>;

/// How a missing employee was looked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmployeeLookup {
    Id(EmployeeId),
    Name(String),
}

impl fmt::Display for EmployeeLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeLookup::Id(id) => write!(f, "id={id}"),
            EmployeeLookup::Name(name) => write!(f, "name '{name}'"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HrError {
    #[error("an employee named '{name}' already exists")]
    NameAlreadyExists { name: String },
    #[error("no employee with {0}")]
    NoSuchEmployee(EmployeeLookup),
    #[error("no employee ids left to assign")]
    IdsExhausted,
}

impl HrError {
    /// Stable machine-readable code, mirrored in console output.
    pub fn code(&self) -> &'static str {
        match self {
            HrError::NameAlreadyExists { .. } => "NAME_ALREADY_EXISTS",
            HrError::NoSuchEmployee(_) => "NO_SUCH_EMPLOYEE",
            HrError::IdsExhausted => "IDS_EXHAUSTED",
        }
    }

    pub(crate) fn name_taken(name: &str) -> Self {
        Self::NameAlreadyExists {
            name: name.to_string(),
        }
    }

    pub(crate) fn missing_id(id: EmployeeId) -> Self {
        Self::NoSuchEmployee(EmployeeLookup::Id(id))
    }

    pub(crate) fn missing_name(name: &str) -> Self {
        Self::NoSuchEmployee(EmployeeLookup::Name(name.to_string()))
    }
}
