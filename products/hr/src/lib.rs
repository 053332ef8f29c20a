//! HR vertical slice: employee records, salary policy and the in-memory
//! repository that owns them.

mod error;
mod model;
mod repository;
mod shared;

pub use error::{EmployeeLookup, HrError, HrResult};
pub use model::{Compensation, Employee, EmployeeId, EmployeeUpdate, EmploymentKind, NewEmployee};
pub use repository::{EmployeeManager, EmployeeRepository};
pub use shared::SharedEmployeeManager;
