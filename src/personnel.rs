use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single employee record.  Every field is fixed at construction except the name, which can be
/// changed through `rename`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeFields")]
pub struct Employee {
    id: u32,
    name: String,
    gender: String,
    age: u32,
    position: String,
    salary: f64,
}

impl Employee {
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::new()
    }

    /// Construct a fully populated employee.  Fails with `RecordError` when the id or age is zero,
    /// or when the salary is negative or not a finite number.
    pub fn new(
        id: u32,
        name: &str,
        gender: &str,
        age: u32,
        position: &str,
        salary: f64,
    ) -> Result<Employee, RecordError> {
        let employee = Employee {
            id,
            name: String::from(name),
            gender: String::from(gender),
            age,
            position: String::from(position),
            salary,
        };

        employee.validate()?;
        Ok(employee)
    }

    fn validate(&self) -> Result<(), RecordError> {
        if self.id == 0 {
            return Err(RecordError::NonPositiveId);
        }

        if self.age == 0 {
            return Err(RecordError::NonPositiveAge);
        }

        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(RecordError::InvalidSalary(self.salary));
        }

        Ok(())
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Replace the employee's name.  No other field is touched.
    pub fn rename(&mut self, new_name: &str) {
        self.name = String::from(new_name);
    }

    /// Human readable single line description, salary shown to two decimal places.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Gender: {}, Age: {}, Position: {}, Salary: ${:.2}",
            self.id, self.name, self.gender, self.age, self.position, self.salary
        )
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("id must be a positive integer")]
    NonPositiveId,
    #[error("age must be a positive integer")]
    NonPositiveAge,
    #[error("salary must be a non-negative number, got {0}")]
    InvalidSalary(f64),
}

// Deserialized records pass through the same checks as `Employee::new`.
#[derive(Deserialize)]
struct EmployeeFields {
    id: u32,
    name: String,
    gender: String,
    age: u32,
    position: String,
    salary: f64,
}

impl TryFrom<EmployeeFields> for Employee {
    type Error = RecordError;

    fn try_from(fields: EmployeeFields) -> Result<Self, Self::Error> {
        Employee::new(
            fields.id,
            &fields.name,
            &fields.gender,
            fields.age,
            &fields.position,
            fields.salary,
        )
    }
}

/// Collects the fields of an `Employee` one at a time, the way the text interface gathers them
/// from the user.
#[derive(Debug, Default)]
pub struct EmployeeBuilder {
    id: Option<u32>,
    name: Option<String>,
    gender: Option<String>,
    age: Option<u32>,
    position: Option<String>,
    salary: Option<f64>,
}

impl EmployeeBuilder {
    fn new() -> Self {
        EmployeeBuilder::default()
    }

    pub fn id(&mut self, id: u32) -> &mut Self {
        self.id = Some(id);
        self
    }

    pub fn name(&mut self, name: &str) -> &mut Self {
        self.name = Some(String::from(name));
        self
    }

    pub fn gender(&mut self, gender: &str) -> &mut Self {
        self.gender = Some(String::from(gender));
        self
    }

    pub fn age(&mut self, age: u32) -> &mut Self {
        self.age = Some(age);
        self
    }

    pub fn position(&mut self, position: &str) -> &mut Self {
        self.position = Some(String::from(position));
        self
    }

    pub fn salary(&mut self, salary: f64) -> &mut Self {
        self.salary = Some(salary);
        self
    }

    /// Construct an `Employee` from the collected values.  Every field is required; the first
    /// missing one is reported as `RecordError::MissingField`.  Function consumes self.
    pub fn build(self) -> Result<Employee, RecordError> {
        let id = self.id.ok_or(RecordError::MissingField("id"))?;
        let name = self.name.ok_or(RecordError::MissingField("name"))?;
        let gender = self.gender.ok_or(RecordError::MissingField("gender"))?;
        let age = self.age.ok_or(RecordError::MissingField("age"))?;
        let position = self.position.ok_or(RecordError::MissingField("position"))?;
        let salary = self.salary.ok_or(RecordError::MissingField("salary"))?;

        Employee::new(id, &name, &gender, age, &position, salary)
    }
}
