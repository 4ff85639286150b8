pub mod config;
pub mod data_handling;
pub mod input;
pub mod logging;
pub mod personnel;
pub mod textinterface;

pub use data_handling::{DataError, EmployeeStore, MAX_EMPLOYEES};
pub use personnel::{Employee, EmployeeBuilder, RecordError};
