use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use log::{debug, info};
use thiserror::Error;

use crate::config::Config;
use crate::data_handling::{self, DataError, EmployeeStore};
use crate::input;
use crate::personnel::Employee;

pub type Result<T> = std::result::Result<T, TextInterfaceError>;

/// What the main loop should do after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// How the batch-add loop proceeds after one attempt to store an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddOutcome {
    Added,
    Retry,
    Stop,
}

type Operation<R, W> = fn(&mut TextInterface<R, W>) -> Result<Flow>;

struct Command<R, W> {
    number: Option<u32>,
    keyword: &'static str,
    short_desc: &'static str,
    operation: Operation<R, W>,
}

/// Console menu over an `EmployeeStore`.  Reads commands and field values line by line from
/// `R` and writes everything meant for the user to `W`.
pub struct TextInterface<R, W> {
    reader: R,
    writer: W,
    data: EmployeeStore,
    config: Config,
    commands: Vec<Command<R, W>>,
}

impl TextInterface<StdinLock<'static>, Stdout> {
    pub fn init(config: Config) -> Self {
        let stdin: Stdin = io::stdin();
        TextInterface::with_io(stdin.lock(), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> TextInterface<R, W> {
    pub fn with_io(reader: R, writer: W, config: Config) -> Self {
        let commands: Vec<Command<R, W>> = vec![
            Command {
                number: Some(1),
                keyword: "add",
                short_desc: "Add Employees",
                operation: Self::add_employees,
            },
            Command {
                number: Some(2),
                keyword: "list",
                short_desc: "Show All Employees",
                operation: Self::list,
            },
            Command {
                number: Some(3),
                keyword: "find",
                short_desc: "Find Employee by ID",
                operation: Self::find,
            },
            Command {
                number: Some(4),
                keyword: "rename",
                short_desc: "Update Employee Name by ID",
                operation: Self::rename,
            },
            Command {
                number: Some(5),
                keyword: "delete",
                short_desc: "Delete Employee by ID",
                operation: Self::delete,
            },
            Command {
                number: Some(6),
                keyword: "sort",
                short_desc: "Sort Employees by Salary (Descending)",
                operation: Self::sort,
            },
            Command {
                number: Some(7),
                keyword: "quit",
                short_desc: "Exit",
                operation: Self::quit,
            },
            Command {
                number: None,
                keyword: "help",
                short_desc: "Print this list of commands",
                operation: Self::help,
            },
            Command {
                number: None,
                keyword: "json",
                short_desc: "Print all employees as JSON",
                operation: Self::json,
            },
        ];

        TextInterface {
            reader,
            writer,
            data: EmployeeStore::init(),
            config,
            commands,
        }
    }

    pub fn data(&self) -> &EmployeeStore {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut EmployeeStore {
        &mut self.data
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Run the menu loop until the user quits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");

        loop {
            if self.config.quiet {
                self.prompt("> ")?;
            } else {
                self.show_menu()?;
            }

            let line = match self.read_line() {
                Ok(line) => line,
                Err(TextInterfaceError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let choice = line.trim().to_lowercase();
            let op = self.lookup(&choice);

            let flow = match op {
                Some(operation) => {
                    debug!("dispatching command \"{}\"", choice);
                    operation(self)
                }
                None => {
                    writeln!(
                        self.writer,
                        "Invalid choice. Please enter a number between 1 and 7, or HELP for a list of commands."
                    )?;
                    Ok(Flow::Continue)
                }
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) | Err(TextInterfaceError::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }

        info!("session ended with {} employees", self.data.len());
        Ok(())
    }

    fn lookup(&self, choice: &str) -> Option<Operation<R, W>> {
        let number = choice.parse::<u32>().ok();

        self.commands
            .iter()
            .find(|c| c.keyword == choice || (number.is_some() && c.number == number))
            .map(|c| c.operation)
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.writer, "\n--- Employee Management System ---")?;
        for comm in &self.commands {
            if let Some(number) = comm.number {
                writeln!(self.writer, "{}. {}", number, comm.short_desc)?;
            }
        }
        self.prompt("Enter your choice (1-7): ")
    }

    fn help(&mut self) -> Result<Flow> {
        writeln!(self.writer, "Enter a number or a command name.")?;
        writeln!(self.writer)?;

        for comm in &self.commands {
            let number = comm.number.map(|n| n.to_string()).unwrap_or_default();
            writeln!(self.writer, "{:>2} {:<8} {}", number, comm.keyword, comm.short_desc)?;
        }
        Ok(Flow::Continue)
    }

    fn quit(&mut self) -> Result<Flow> {
        writeln!(self.writer, "Exiting program...")?;
        Ok(Flow::Quit)
    }

    fn add_employees(&mut self) -> Result<Flow> {
        let remaining = self.data.remaining();
        if remaining == 0 {
            writeln!(self.writer, "Maximum capacity reached. Cannot add more employees.")?;
            return Ok(Flow::Continue);
        }

        let question = format!("How many employees do you want to add? (0-{}): ", remaining);
        let count = self.ask(&question, |line| input::parse_count(line, remaining))?;

        if count == 0 {
            writeln!(self.writer, "No employees added.")?;
            return Ok(Flow::Continue);
        }

        let target = self.data.len() + count;
        let mut added = 0;

        while added < count {
            writeln!(
                self.writer,
                "\nEntering details for employee {} of {}:",
                self.data.len() + 1,
                target
            )?;

            let result = match self.read_employee()? {
                Ok(employee) => self.data.add(employee),
                Err(e) => Err(e),
            };

            match self.report_add(result)? {
                AddOutcome::Added => added += 1,
                AddOutcome::Retry => {}
                AddOutcome::Stop => break,
            }
        }

        Ok(Flow::Continue)
    }

    /// Tell the user how an add went.  Every store error is reported here rather than ending the
    /// session.
    fn report_add(&mut self, result: data_handling::Result<()>) -> Result<AddOutcome> {
        match result {
            Ok(()) => {
                writeln!(
                    self.writer,
                    "Employee added successfully ({}/{} slots used).",
                    self.data.len(),
                    self.data.capacity()
                )?;
                Ok(AddOutcome::Added)
            }
            Err(DataError::DuplicateId(id)) => {
                writeln!(
                    self.writer,
                    "Employee with ID {} already exists. Skipping this employee.",
                    id
                )?;
                Ok(AddOutcome::Retry)
            }
            Err(DataError::CapacityExceeded(_)) => {
                writeln!(self.writer, "Maximum capacity reached. Cannot add more employees.")?;
                Ok(AddOutcome::Stop)
            }
            Err(e) => {
                writeln!(self.writer, "Could not add employee: {}", e)?;
                Ok(AddOutcome::Retry)
            }
        }
    }

    /// Prompt for every field of a new employee.  The outer `Result` carries I/O and end of
    /// input; the inner one a record the builder refused.
    fn read_employee(&mut self) -> Result<data_handling::Result<Employee>> {
        let mut builder = Employee::builder();

        let id = self.ask("Enter Employee ID: ", |line| input::parse_positive(line, "id"))?;
        builder.id(id);

        let name = self.ask("Enter Name: ", |line| Ok(input::parse_text(line)))?;
        builder.name(&name);

        let gender = self.ask("Enter Gender: ", |line| Ok(input::parse_text(line)))?;
        builder.gender(&gender);

        let age = self.ask("Enter Age: ", |line| input::parse_positive(line, "age"))?;
        builder.age(age);

        let position = self.ask("Enter Position: ", |line| Ok(input::parse_text(line)))?;
        builder.position(&position);

        let salary = self.ask("Enter Salary: ", input::parse_salary)?;
        builder.salary(salary);

        Ok(builder.build().map_err(DataError::from))
    }

    fn list(&mut self) -> Result<Flow> {
        if self.data.is_empty() {
            writeln!(self.writer, "No employees available.")?;
            return Ok(Flow::Continue);
        }

        if self.config.json {
            return self.json();
        }

        writeln!(self.writer, "\nAll Employees ({}):", self.data.len())?;
        for employee in self.data.list_all() {
            writeln!(self.writer, "{}", employee)?;
        }

        Ok(Flow::Continue)
    }

    fn json(&mut self) -> Result<Flow> {
        let employees: Vec<&Employee> = self.data.list_all().collect();
        let text = serde_json::to_string_pretty(&employees)?;

        writeln!(self.writer, "{}", text)?;
        Ok(Flow::Continue)
    }

    fn find(&mut self) -> Result<Flow> {
        if self.data.is_empty() {
            writeln!(self.writer, "No employees available to search.")?;
            return Ok(Flow::Continue);
        }

        let id = self.ask("Enter ID to find: ", input::parse_id)?;

        match self.data.find_by_id(id) {
            Some(employee) => {
                writeln!(self.writer, "Employee found:")?;
                writeln!(self.writer, "{}", employee)?;
            }
            None => writeln!(self.writer, "Employee with ID {} not found.", id)?,
        }

        Ok(Flow::Continue)
    }

    fn rename(&mut self) -> Result<Flow> {
        if self.data.is_empty() {
            writeln!(self.writer, "No employees available to update.")?;
            return Ok(Flow::Continue);
        }

        let id = self.ask("Enter ID to update name: ", input::parse_id)?;

        if self.data.find_by_id(id).is_none() {
            writeln!(self.writer, "Employee with ID {} not found.", id)?;
            return Ok(Flow::Continue);
        }

        let new_name = self.ask("Enter new name: ", |line| Ok(input::parse_text(line)))?;

        match self.data.rename(id, &new_name) {
            Ok(()) => writeln!(self.writer, "Name updated successfully.")?,
            Err(e) => writeln!(self.writer, "Could not update name: {}", e)?,
        }

        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        if self.data.is_empty() {
            writeln!(self.writer, "No employees available to delete.")?;
            return Ok(Flow::Continue);
        }

        let id = self.ask("Enter ID to delete: ", input::parse_id)?;

        match self.data.delete(id) {
            Ok(_) => writeln!(self.writer, "Employee deleted successfully.")?,
            Err(DataError::NotFound(_)) => writeln!(self.writer, "Employee with ID {} not found.", id)?,
            Err(e) => writeln!(self.writer, "Could not delete employee: {}", e)?,
        }

        Ok(Flow::Continue)
    }

    fn sort(&mut self) -> Result<Flow> {
        if self.data.is_empty() {
            writeln!(self.writer, "No employees available to sort.")?;
            return Ok(Flow::Continue);
        }

        self.data.sort_by_salary_descending();

        if !self.config.json {
            writeln!(self.writer, "Employees sorted by salary (descending order):")?;
        }
        self.list()
    }

    /// Keep asking until `parse` accepts the answer.  Input ending mid-question surfaces as
    /// `TextInterfaceError::EndOfInput`.
    fn ask<T, F>(&mut self, question: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> input::Result<T>,
    {
        loop {
            self.prompt(question)?;
            let line = self.read_line()?;

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("rejected input for \"{}\": {}", question.trim(), e);
                    writeln!(self.writer, "Invalid input: {}. Please try again.", e)?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    // Bytes that aren't valid UTF-8 become U+FFFD instead of failing the read.
    fn read_line(&mut self) -> Result<String> {
        let mut buffer = Vec::new();

        if self.reader.read_until(b'\n', &mut buffer)? == 0 {
            return Err(TextInterfaceError::EndOfInput);
        }

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[derive(Debug, Error)]
pub enum TextInterfaceError {
    #[error("end of input")]
    EndOfInput,
    #[error("{0}")]
    Data(#[from] DataError),
    #[error("could not encode employees: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO Error({0})")]
    IOError(#[from] io::Error),
}
