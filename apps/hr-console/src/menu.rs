use std::io::{self, BufRead, Write};

use products_hr::{
    Compensation, Employee, EmployeeRepository, EmployeeUpdate, EmploymentKind, HrError,
    NewEmployee,
};
use tracing::debug;

use crate::config::{AppConfig, ListFormat};
use crate::input::{self, PromptError, Prompter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    List,
    Salary,
    Remove,
    Find,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::List,
        MenuChoice::Salary,
        MenuChoice::Remove,
        MenuChoice::Find,
        MenuChoice::Exit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::Add => "1",
            MenuChoice::Update => "2",
            MenuChoice::List => "3",
            MenuChoice::Salary => "4",
            MenuChoice::Remove => "5",
            MenuChoice::Find => "6",
            MenuChoice::Exit => "0",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add employee",
            MenuChoice::Update => "Update employee",
            MenuChoice::List => "List employees",
            MenuChoice::Salary => "Compute salary",
            MenuChoice::Remove => "Remove employee",
            MenuChoice::Find => "Find employee by name",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == raw)
    }
}

fn amount_prompt(kind: EmploymentKind) -> &'static str {
    match kind {
        EmploymentKind::FullTime => "Base salary: ",
        EmploymentKind::PartTime => "Hourly rate: ",
    }
}

fn describe(employee: &Employee) -> String {
    let pay = match employee.compensation {
        Compensation::Salaried { base_salary } => format!("base salary {base_salary:.2}"),
        Compensation::Hourly { hourly_rate } => format!("hourly rate {hourly_rate:.2}"),
    };
    format!(
        "{}. {} ({}), {}, hours worked: {}",
        employee.id,
        employee.name,
        employee.kind().as_str(),
        pay,
        employee.hours_worked
    )
}

/// Interactive menu loop over a repository it owns.
pub struct Console<R, W, E> {
    prompter: Prompter<R, W>,
    repo: E,
    config: AppConfig,
}

impl<R: BufRead, W: Write, E: EmployeeRepository> Console<R, W, E> {
    pub fn new(input: R, output: W, repo: E, config: AppConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            repo,
            config,
        }
    }

    pub fn repository(&self) -> &E {
        &self.repo
    }

    pub fn into_parts(self) -> (W, E) {
        (self.prompter.into_output(), self.repo)
    }

    /// Run until the user exits or input ends. Only console I/O failures are
    /// returned; rejected operations are reported and the menu comes back.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) | Err(PromptError::EndOfInput) => return Ok(()),
                Err(PromptError::Io(err)) => return Err(err),
            }
        }
    }

    fn step(&mut self) -> Result<bool, PromptError> {
        self.show_menu()?;
        let raw = self.prompter.read_line("Choose an option: ")?;
        let Some(choice) = MenuChoice::parse(&raw) else {
            debug!(choice = %raw.trim(), "unknown menu choice");
            writeln!(self.out(), "Unknown option '{}'. Try again.", raw.trim())?;
            return Ok(true);
        };

        match choice {
            MenuChoice::Add => self.add()?,
            MenuChoice::Update => self.update()?,
            MenuChoice::List => self.list()?,
            MenuChoice::Salary => self.salary()?,
            MenuChoice::Remove => self.remove()?,
            MenuChoice::Find => self.find()?,
            MenuChoice::Exit => {
                writeln!(self.out(), "Goodbye.")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn out(&mut self) -> &mut W {
        self.prompter.output()
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let out = self.out();
        writeln!(out)?;
        writeln!(out, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(out, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    fn report(&mut self, err: &HrError) -> io::Result<()> {
        debug!(code = err.code(), %err, "operation rejected");
        writeln!(self.out(), "Error: {err}.")
    }

    fn ask_details(&mut self, kind: EmploymentKind) -> Result<EmployeeUpdate, PromptError> {
        let min_rate = self.config.min_rate;
        let max_hours = self.config.max_hours;

        let name = self.prompter.ask("Name: ", input::parse_name)?;
        let amount = self
            .prompter
            .ask(amount_prompt(kind), |raw| input::parse_amount(raw, min_rate))?;
        let hours_worked = self
            .prompter
            .ask("Hours worked: ", |raw| input::parse_hours(raw, max_hours))?;

        Ok(EmployeeUpdate {
            name,
            amount,
            hours_worked,
        })
    }

    fn add(&mut self) -> Result<(), PromptError> {
        let kind = self.prompter.ask(
            "Employment type (1 = full-time salaried, 2 = part-time hourly): ",
            input::parse_kind,
        )?;
        let details = self.ask_details(kind)?;
        let name = details.name.clone();
        let employee = NewEmployee {
            name: details.name,
            compensation: Compensation::new(kind, details.amount),
            hours_worked: details.hours_worked,
        };

        match self.repo.add(employee) {
            Ok(id) => writeln!(self.out(), "Employee '{name}' added with id {id}.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn update(&mut self) -> Result<(), PromptError> {
        let id = self.prompter.ask("Employee id to update: ", input::parse_id)?;
        let current = match self.repo.get_by_id(id) {
            Ok(employee) => employee.clone(),
            Err(err) => return Ok(self.report(&err)?),
        };
        writeln!(self.out(), "Current: {}", describe(&current))?;

        let changes = self.ask_details(current.kind())?;
        match self.repo.update(id, changes) {
            Ok(()) => writeln!(self.out(), "Employee {id} updated.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn list(&mut self) -> Result<(), PromptError> {
        let employees: Vec<&Employee> = self.repo.get_all().collect();
        let out = self.prompter.output();

        if employees.is_empty() {
            writeln!(out, "No employees.")?;
            return Ok(());
        }

        match self.config.list_format {
            ListFormat::Table => {
                for employee in employees {
                    writeln!(out, "{}", describe(employee))?;
                }
            }
            ListFormat::Json => {
                let json = serde_json::to_string_pretty(&employees).map_err(io::Error::from)?;
                writeln!(out, "{json}")?;
            }
        }
        Ok(())
    }

    fn salary(&mut self) -> Result<(), PromptError> {
        let id = self
            .prompter
            .ask("Employee id for salary: ", input::parse_id)?;
        match self.repo.get_by_id(id) {
            Ok(employee) => {
                let line = format!("Salary of '{}': {:.2}", employee.name, employee.salary());
                writeln!(self.out(), "{line}")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<(), PromptError> {
        let id = self.prompter.ask("Employee id to remove: ", input::parse_id)?;
        match self.repo.remove(id) {
            Ok(removed) => writeln!(
                self.out(),
                "Employee '{}' (id {}) removed.",
                removed.name,
                removed.id
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn find(&mut self) -> Result<(), PromptError> {
        let name = self.prompter.ask("Name to find: ", input::parse_name)?;
        match self.repo.get(&name) {
            Ok(employee) => {
                let line = describe(employee);
                writeln!(self.out(), "{line}")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }
}
