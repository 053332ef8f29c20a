use tracing::{debug, info};

use crate::error::{HrError, HrResult};
use crate::model::{Compensation, Employee, EmployeeId, EmployeeUpdate, NewEmployee, names_match};

/// Storage-agnostic employee operations used by the console.
pub trait EmployeeRepository {
    /// Insert a new record and return the id assigned to it.
    fn add(&mut self, employee: NewEmployee) -> HrResult<EmployeeId>;

    /// Case-insensitive exact match on the name.
    fn get(&self, name: &str) -> HrResult<&Employee>;

    fn get_by_id(&self, id: EmployeeId) -> HrResult<&Employee>;

    /// Overwrite name, pay amount and hours of the record with `id`. The id and
    /// employment kind never change.
    fn update(&mut self, id: EmployeeId, changes: EmployeeUpdate) -> HrResult<()>;

    /// Live employees in insertion order.
    fn get_all(&self) -> impl Iterator<Item = &Employee>;

    fn remove(&mut self, id: EmployeeId) -> HrResult<Employee>;
}

/// In-memory repository. Ids come from a counter that only moves forward, so
/// a removed employee's id is never handed out again.
#[derive(Debug)]
pub struct EmployeeManager {
    employees: Vec<Employee>,
    next_id: EmployeeId,
}

impl Default for EmployeeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeManager {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn position(&self, id: EmployeeId) -> HrResult<usize> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| HrError::missing_id(id))
    }

    fn ensure_name_free(&self, name: &str, except: Option<EmployeeId>) -> HrResult<()> {
        let taken = self
            .employees
            .iter()
            .any(|e| Some(e.id) != except && names_match(&e.name, name));
        if taken {
            debug!(name, "employee name already taken");
            return Err(HrError::name_taken(name));
        }
        Ok(())
    }
}

impl EmployeeRepository for EmployeeManager {
    fn add(&mut self, employee: NewEmployee) -> HrResult<EmployeeId> {
        self.ensure_name_free(&employee.name, None)?;

        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or(HrError::IdsExhausted)?;
        self.next_id = next_id;
        info!(employee_id = id, name = %employee.name, kind = employee.compensation.kind().as_str(), "employee added");
        self.employees.push(employee.into_employee(id));
        Ok(id)
    }

    fn get(&self, name: &str) -> HrResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.has_name(name))
            .ok_or_else(|| HrError::missing_name(name))
    }

    fn get_by_id(&self, id: EmployeeId) -> HrResult<&Employee> {
        let idx = self.position(id)?;
        Ok(&self.employees[idx])
    }

    fn update(&mut self, id: EmployeeId, changes: EmployeeUpdate) -> HrResult<()> {
        let idx = self.position(id)?;
        self.ensure_name_free(&changes.name, Some(id))?;

        let existing = &mut self.employees[idx];
        existing.name = changes.name;
        existing.compensation = Compensation::new(existing.kind(), changes.amount);
        existing.hours_worked = changes.hours_worked;
        info!(employee_id = id, name = %existing.name, "employee updated");
        Ok(())
    }

    fn get_all(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    fn remove(&mut self, id: EmployeeId) -> HrResult<Employee> {
        let idx = self.position(id)?;
        let removed = self.employees.remove(idx);
        info!(employee_id = id, name = %removed.name, "employee removed");
        Ok(removed)
    }
}
