use proptest::prelude::*;
use roster::{DataError, Employee, EmployeeStore};

fn employee(id: u32, salary: f64) -> Employee {
    Employee::new(id, &format!("E{}", id), "X", 30, "Staff", salary).unwrap()
}

fn ids(store: &EmployeeStore) -> Vec<u32> {
    store.list_all().map(|e| e.id()).collect()
}

#[test]
fn documented_sort_example() {
    let mut store = EmployeeStore::init();
    store.add(Employee::new(1, "A", "F", 30, "Dev", 5000.0).unwrap()).unwrap();
    store.add(Employee::new(2, "B", "M", 40, "Lead", 9000.0).unwrap()).unwrap();
    store.add(Employee::new(3, "C", "F", 22, "Intern", 1000.0).unwrap()).unwrap();

    store.sort_by_salary_descending();

    assert_eq!(ids(&store), vec![2, 1, 3]);
}

proptest! {
    #[test]
    fn distinct_adds_are_all_findable(
        entries in prop::collection::btree_map(1u32..10_000, 0.0f64..1_000_000.0, 0..60)
    ) {
        let mut store = EmployeeStore::init();
        for (&id, &salary) in &entries {
            store.add(employee(id, salary)).unwrap();
        }

        prop_assert_eq!(store.len(), entries.len());
        for (&id, &salary) in &entries {
            prop_assert_eq!(store.find_by_id(id), Some(&employee(id, salary)));
        }
    }

    #[test]
    fn duplicate_add_leaves_store_unchanged(
        salaries in prop::collection::vec(0.0f64..1_000.0, 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = EmployeeStore::init();
        for (i, &salary) in salaries.iter().enumerate() {
            store.add(employee(i as u32 + 1, salary)).unwrap();
        }
        let before: Vec<Employee> = store.list_all().cloned().collect();
        let id = pick.index(salaries.len()) as u32 + 1;

        prop_assert_eq!(store.add(employee(id, 1.0)), Err(DataError::DuplicateId(id)));

        let after: Vec<Employee> = store.list_all().cloned().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn sort_leaves_salaries_non_increasing(
        salaries in prop::collection::vec(0.0f64..1_000_000.0, 0..80)
    ) {
        let mut store = EmployeeStore::init();
        for (i, &salary) in salaries.iter().enumerate() {
            store.add(employee(i as u32 + 1, salary)).unwrap();
        }

        store.sort_by_salary_descending();

        let sorted: Vec<f64> = store.list_all().map(|e| e.salary()).collect();
        prop_assert_eq!(sorted.len(), salaries.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn deleted_id_is_never_found(
        count in 1usize..40,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = EmployeeStore::init();
        for id in 1..=count as u32 {
            store.add(employee(id, id as f64)).unwrap();
        }
        let id = pick.index(count) as u32 + 1;

        prop_assert_eq!(store.delete(id).map(|e| e.id()), Ok(id));
        prop_assert!(store.find_by_id(id).is_none());
        prop_assert_eq!(store.len(), count - 1);
        prop_assert_eq!(store.delete(id), Err(DataError::NotFound(id)));
        prop_assert_eq!(store.len(), count - 1);

        let expected: Vec<u32> = (1..=count as u32).filter(|&i| i != id).collect();
        prop_assert_eq!(ids(&store), expected);
    }

    #[test]
    fn rename_touches_only_target(
        count in 1usize..20,
        pick in any::<prop::sample::Index>(),
        new_name in "[A-Za-z ]{0,12}",
    ) {
        let mut store = EmployeeStore::init();
        for id in 1..=count as u32 {
            store.add(employee(id, id as f64 * 10.0)).unwrap();
        }
        let target = pick.index(count) as u32 + 1;

        store.rename(target, &new_name).unwrap();

        for current in store.list_all() {
            let original = employee(current.id(), current.id() as f64 * 10.0);
            if current.id() == target {
                prop_assert_eq!(current.name(), new_name.as_str());
                prop_assert_eq!(current.salary(), original.salary());
                prop_assert_eq!(current.age(), original.age());
                prop_assert_eq!(current.gender(), original.gender());
                prop_assert_eq!(current.position(), original.position());
            } else {
                prop_assert_eq!(current, &original);
            }
        }
    }
}
