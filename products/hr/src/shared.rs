use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::HrResult;
use crate::model::{Employee, EmployeeId, EmployeeUpdate, NewEmployee};
use crate::repository::{EmployeeManager, EmployeeRepository};

/// Cloneable handle that serialises access to one [`EmployeeManager`].
///
/// Reads hand back owned copies so no lock outlives the call.
#[derive(Clone, Debug, Default)]
pub struct SharedEmployeeManager {
    inner: Arc<Mutex<EmployeeManager>>,
}

impl SharedEmployeeManager {
    pub fn new(manager: EmployeeManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    // Every operation validates before it mutates, so a poisoned lock still
    // guards a consistent collection.
    fn lock(&self) -> MutexGuard<'_, EmployeeManager> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, employee: NewEmployee) -> HrResult<EmployeeId> {
        self.lock().add(employee)
    }

    pub fn get(&self, name: &str) -> HrResult<Employee> {
        self.lock().get(name).cloned()
    }

    pub fn get_by_id(&self, id: EmployeeId) -> HrResult<Employee> {
        self.lock().get_by_id(id).cloned()
    }

    pub fn update(&self, id: EmployeeId, changes: EmployeeUpdate) -> HrResult<()> {
        self.lock().update(id, changes)
    }

    pub fn get_all(&self) -> Vec<Employee> {
        self.lock().get_all().cloned().collect()
    }

    pub fn remove(&self, id: EmployeeId) -> HrResult<Employee> {
        self.lock().remove(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::*;

    #[test]
    fn concurrent_adds_get_distinct_ids() {
        let shared = SharedEmployeeManager::default();
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|n| {
                            shared
                                .add(NewEmployee::hourly(format!("w{worker}-{n}"), 100.0, 8))
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<EmployeeId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 200);
        assert_eq!(shared.len(), 200);
    }

    #[test]
    fn racing_same_name_admits_one() {
        let shared = SharedEmployeeManager::default();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.add(NewEmployee::hourly("Solo", 100.0, 1)))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(shared.get("solo").unwrap().name, "Solo");
    }
}
