use serde::{Deserialize, Serialize};

/// Repository-assigned employee identifier. Starts at 1.
pub type EmployeeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentKind {
    FullTime,
    PartTime,
}

impl EmploymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentKind::FullTime => "full-time",
            EmploymentKind::PartTime => "part-time",
        }
    }
}

/// Pay terms for an employee. Full-time staff are salaried, part-time staff
/// are paid by the hour.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Compensation {
    Salaried { base_salary: f64 },
    Hourly { hourly_rate: f64 },
}

impl Compensation {
    pub fn new(kind: EmploymentKind, amount: f64) -> Self {
        match kind {
            EmploymentKind::FullTime => Compensation::Salaried {
                base_salary: amount,
            },
            EmploymentKind::PartTime => Compensation::Hourly {
                hourly_rate: amount,
            },
        }
    }

    pub fn kind(&self) -> EmploymentKind {
        match self {
            Compensation::Salaried { .. } => EmploymentKind::FullTime,
            Compensation::Hourly { .. } => EmploymentKind::PartTime,
        }
    }

    /// Base salary or hourly rate, depending on the variant.
    pub fn amount(&self) -> f64 {
        match *self {
            Compensation::Salaried { base_salary } => base_salary,
            Compensation::Hourly { hourly_rate } => hourly_rate,
        }
    }

    /// Pay for a period in which `hours_worked` hours were logged.
    ///
    /// Salaried pay is the flat base salary regardless of hours.
    pub fn salary(&self, hours_worked: u32) -> f64 {
        match *self {
            Compensation::Salaried { base_salary } => base_salary,
            Compensation::Hourly { hourly_rate } => hourly_rate * f64::from(hours_worked),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub compensation: Compensation,
    pub hours_worked: u32,
}

impl Employee {
    pub fn kind(&self) -> EmploymentKind {
        self.compensation.kind()
    }

    pub fn salary(&self) -> f64 {
        self.compensation.salary(self.hours_worked)
    }

    pub(crate) fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Field values for an employee that has not been assigned an id, or the
/// replacement values for an update.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub compensation: Compensation,
    pub hours_worked: u32,
}

impl NewEmployee {
    pub fn hourly(name: impl Into<String>, hourly_rate: f64, hours_worked: u32) -> Self {
        Self {
            name: name.into(),
            compensation: Compensation::Hourly { hourly_rate },
            hours_worked,
        }
    }

    pub fn salaried(name: impl Into<String>, base_salary: f64, hours_worked: u32) -> Self {
        Self {
            name: name.into(),
            compensation: Compensation::Salaried { base_salary },
            hours_worked,
        }
    }

    pub(crate) fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            compensation: self.compensation,
            hours_worked: self.hours_worked,
        }
    }
}

/// Replacement values for an existing record. The employment kind is fixed at
/// creation, so only the amount is carried: it is read as a base salary or an
/// hourly rate according to the stored record.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EmployeeUpdate {
    pub name: String,
    pub amount: f64,
    pub hours_worked: u32,
}

impl EmployeeUpdate {
    pub fn new(name: impl Into<String>, amount: f64, hours_worked: u32) -> Self {
        Self {
            name: name.into(),
            amount,
            hours_worked,
        }
    }
}

/// Case-insensitive name comparison used for uniqueness and lookup.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
