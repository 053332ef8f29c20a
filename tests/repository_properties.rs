use std::collections::HashSet;

use anyhow::Result;
use products_hr::{
    EmployeeId, EmployeeManager, EmployeeRepository, EmployeeUpdate, HrError, NewEmployee,
    SharedEmployeeManager,
};

fn hourly(name: &str) -> NewEmployee {
    NewEmployee::hourly(name, 150.0, 20)
}

#[test]
fn churn_never_reuses_ids() -> Result<()> {
    let mut repo = EmployeeManager::new();
    let mut seen: HashSet<EmployeeId> = HashSet::new();
    let mut last = 0;

    for round in 0..50 {
        let id = repo.add(hourly(&format!("worker-{round}")))?;
        assert!(id > last, "id {id} not above {last}");
        assert!(seen.insert(id));
        last = id;

        // drop every other record straight away
        if round % 2 == 0 {
            repo.remove(id)?;
        }
    }

    assert_eq!(repo.len(), 25);
    assert_eq!(last, 50);
    Ok(())
}

#[test]
fn failed_operations_leave_collection_untouched() -> Result<()> {
    let mut repo = EmployeeManager::new();
    repo.add(hourly("Ann"))?;
    repo.add(NewEmployee::salaried("Ben", 5_000.0, 40))?;
    let before: Vec<_> = repo.get_all().cloned().collect();

    assert!(matches!(
        repo.add(hourly("BEN")),
        Err(HrError::NameAlreadyExists { .. })
    ));
    assert!(matches!(
        repo.update(1, EmployeeUpdate::new("ben", 150.0, 20)),
        Err(HrError::NameAlreadyExists { .. })
    ));
    assert!(matches!(
        repo.update(99, EmployeeUpdate::new("Zed", 150.0, 20)),
        Err(HrError::NoSuchEmployee(_))
    ));
    assert!(matches!(repo.remove(99), Err(HrError::NoSuchEmployee(_))));
    assert!(matches!(repo.get("Zed"), Err(HrError::NoSuchEmployee(_))));

    let after: Vec<_> = repo.get_all().cloned().collect();
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn shared_handle_sees_one_collection() -> Result<()> {
    let shared = SharedEmployeeManager::new(EmployeeManager::new());
    let other = shared.clone();

    let id = shared.add(NewEmployee::hourly("Dana", 250.0, 40))?;
    assert_eq!(other.get_by_id(id)?.salary(), 10_000.0);

    other.update(id, EmployeeUpdate::new("Dana", 250.0, 8))?;
    assert_eq!(shared.get("dana")?.hours_worked, 8);

    other.remove(id)?;
    assert!(shared.is_empty());
    assert!(shared.get_all().is_empty());
    Ok(())
}
