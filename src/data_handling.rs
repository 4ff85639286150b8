use crate::personnel::{Employee, RecordError};

use log::{debug, warn};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

/// Maximum number of employees a single session can hold.
pub const MAX_EMPLOYEES: usize = 1000;

/// EmployeeStore and its related methods represent the main API for managing employee records.
/// Records are kept in insertion order until explicitly sorted, and every id is unique.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
}

impl EmployeeStore {
    /// initialize an empty store.
    pub fn init() -> Self {
        EmployeeStore {
            employees: Vec::new(),
        }
    }

    /// Append an employee to the end of the store.  Fails without touching the store when the id
    /// is already in use or the store is full.
    pub fn add(&mut self, employee: Employee) -> Result<()> {
        if self.position_of(employee.id()).is_some() {
            warn!("rejected add: duplicate id {}", employee.id());
            return Err(DataError::DuplicateId(employee.id()));
        }

        if self.employees.len() >= MAX_EMPLOYEES {
            warn!("rejected add of id {}: store is full", employee.id());
            return Err(DataError::CapacityExceeded(MAX_EMPLOYEES));
        }

        debug!(
            "added employee {} ({} of {})",
            employee.id(),
            self.employees.len() + 1,
            MAX_EMPLOYEES
        );
        self.employees.push(employee);

        Ok(())
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    pub fn rename(&mut self, id: u32, new_name: &str) -> Result<()> {
        let index = self.position_of(id).ok_or(DataError::NotFound(id))?;

        debug!("renaming employee {}", id);
        self.employees[index].rename(new_name);

        Ok(())
    }

    /// Remove the employee with the given id, returning it.  Later records shift left by one so
    /// the remaining order is preserved.
    pub fn delete(&mut self, id: u32) -> Result<Employee> {
        let index = self.position_of(id).ok_or(DataError::NotFound(id))?;

        debug!("deleting employee {} at position {}", id, index);
        Ok(self.employees.remove(index))
    }

    /// Selection sort on salary, highest first.  Each pass swaps the largest salary of the
    /// unsorted suffix into place, so employees with equal salaries may change relative order.
    pub fn sort_by_salary_descending(&mut self) {
        let count = self.employees.len();

        for i in 0..count.saturating_sub(1) {
            let mut max_index = i;
            for j in (i + 1)..count {
                if self.employees[j].salary() > self.employees[max_index].salary() {
                    max_index = j;
                }
            }

            if max_index != i {
                self.employees.swap(i, max_index);
            }
        }

        debug!("sorted {} employees by salary", count);
    }

    pub fn list_all(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn capacity(&self) -> usize {
        MAX_EMPLOYEES
    }

    /// Number of free slots left before the store is full.
    pub fn remaining(&self) -> usize {
        MAX_EMPLOYEES - self.employees.len()
    }

    fn position_of(&self, id: u32) -> Option<usize> {
        self.employees.iter().position(|e| e.id() == id)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("invalid employee record: {0}")]
    InvalidRecord(#[from] RecordError),
    #[error("employee with ID {0} already exists")]
    DuplicateId(u32),
    #[error("maximum capacity of {0} employees reached")]
    CapacityExceeded(usize),
    #[error("employee with ID {0} not found")]
    NotFound(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: u32, name: &str, salary: f64) -> Employee {
        Employee::new(id, name, "F", 30, "Clerk", salary).unwrap()
    }

    fn ids(store: &EmployeeStore) -> Vec<u32> {
        store.list_all().map(|e| e.id()).collect()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = EmployeeStore::init();
        store.add(employee(3, "C", 1.0)).unwrap();
        store.add(employee(1, "A", 2.0)).unwrap();
        store.add(employee(2, "B", 3.0)).unwrap();

        assert_eq!(ids(&store), vec![3, 1, 2]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.remaining(), store.capacity() - 3);
    }

    #[test]
    fn duplicate_id_leaves_store_unchanged() {
        let mut store = EmployeeStore::init();
        store.add(employee(1, "A", 10.0)).unwrap();

        let err = store.add(employee(1, "Other", 20.0)).unwrap_err();

        assert_eq!(err, DataError::DuplicateId(1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(1).unwrap().name(), "A");
    }

    #[test]
    fn add_beyond_capacity_is_rejected() {
        let mut store = EmployeeStore::init();
        for id in 1..=MAX_EMPLOYEES as u32 {
            store.add(employee(id, "E", 1.0)).unwrap();
        }
        assert_eq!(store.remaining(), 0);

        let err = store.add(employee(5000, "Late", 1.0)).unwrap_err();

        assert_eq!(err, DataError::CapacityExceeded(MAX_EMPLOYEES));
        assert_eq!(store.len(), MAX_EMPLOYEES);
        assert!(store.find_by_id(5000).is_none());
    }

    #[test]
    fn delete_shifts_later_records_left() {
        let mut store = EmployeeStore::init();
        for id in 1..=4 {
            store.add(employee(id, "E", id as f64)).unwrap();
        }

        let removed = store.delete(2).unwrap();

        assert_eq!(removed.id(), 2);
        assert_eq!(ids(&store), vec![1, 3, 4]);
        assert!(store.find_by_id(2).is_none());
    }

    #[test]
    fn delete_missing_id_reports_not_found() {
        let mut store = EmployeeStore::init();
        store.add(employee(1, "A", 1.0)).unwrap();

        assert_eq!(store.delete(9).unwrap_err(), DataError::NotFound(9));
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn rename_changes_only_target_name() {
        let mut store = EmployeeStore::init();
        store.add(employee(1, "A", 1.0)).unwrap();
        store.add(employee(2, "B", 2.0)).unwrap();

        store.rename(2, "X").unwrap();

        assert_eq!(store.find_by_id(2).unwrap(), &employee(2, "X", 2.0));
        assert_eq!(store.find_by_id(1).unwrap(), &employee(1, "A", 1.0));
        assert_eq!(store.rename(3, "Y").unwrap_err(), DataError::NotFound(3));
    }

    #[test]
    fn sort_orders_salaries_descending() {
        let mut store = EmployeeStore::init();
        store.add(employee(1, "A", 5000.0)).unwrap();
        store.add(employee(2, "B", 9000.0)).unwrap();
        store.add(employee(3, "C", 1000.0)).unwrap();

        store.sort_by_salary_descending();

        assert_eq!(ids(&store), vec![2, 1, 3]);
        let salaries: Vec<f64> = store.list_all().map(|e| e.salary()).collect();
        assert_eq!(salaries, vec![9000.0, 5000.0, 1000.0]);
    }

    #[test]
    fn sort_and_list_on_empty_store() {
        let mut store = EmployeeStore::init();
        store.sort_by_salary_descending();

        assert!(store.is_empty());
        assert_eq!(store.list_all().count(), 0);
    }
}
