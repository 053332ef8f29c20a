use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use products_hr::{Compensation, EmployeeId, EmploymentKind};
use thiserror::Error;

use crate::config::AppConfig;

/// Raw console text that could not be turned into a usable value. The user is
/// asked again.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a valid number")]
    NotANumber(String),
    #[error("amount must be at least {min}")]
    BelowMinimum { min: f64 },
    #[error("hours must be between 0 and {max}")]
    HoursOutOfRange { max: u32 },
    #[error("name must not be empty")]
    EmptyName,
    #[error("unknown employment type '{0}'")]
    UnknownKind(String),
    #[error("line is not valid UTF-8")]
    NotUtf8,
    #[error("hours are required for hourly pay")]
    HoursRequired,
}

/// Reasons a prompt gave up without a value.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input ended")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub fn parse_name(raw: &str) -> Result<String, InputError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn parse_id(raw: &str) -> Result<EmployeeId, InputError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| InputError::NotANumber(raw.to_string()))
}

/// Parses a salary or hourly rate. Accepts `,` as the decimal separator.
pub fn parse_amount(raw: &str, min: f64) -> Result<f64, InputError> {
    let raw = raw.trim();
    let amount = raw
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::NotANumber(raw.to_string()))?;
    check_amount(amount, min)
}

pub fn check_amount(amount: f64, min: f64) -> Result<f64, InputError> {
    if !amount.is_finite() {
        return Err(InputError::NotANumber(amount.to_string()));
    }
    if amount < min {
        return Err(InputError::BelowMinimum { min });
    }
    Ok(amount)
}

pub fn parse_hours(raw: &str, max: u32) -> Result<u32, InputError> {
    let raw = raw.trim();
    let hours = raw.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::HoursOutOfRange { max }
        }
        _ => InputError::NotANumber(raw.to_string()),
    })?;
    let hours = u32::try_from(hours).map_err(|_| InputError::HoursOutOfRange { max })?;
    check_hours(hours, max)
}

pub fn check_hours(hours: u32, max: u32) -> Result<u32, InputError> {
    if hours > max {
        return Err(InputError::HoursOutOfRange { max });
    }
    Ok(hours)
}

/// Salary for a one-off quote, checked against the same limits as the menu.
/// Salaried pay ignores hours; hourly pay cannot be quoted without them.
pub fn quote_salary(
    kind: EmploymentKind,
    amount: f64,
    hours: Option<u32>,
    config: &AppConfig,
) -> Result<f64, InputError> {
    let amount = check_amount(amount, config.min_rate)?;
    let hours = match (kind, hours) {
        (_, Some(hours)) => check_hours(hours, config.max_hours)?,
        (EmploymentKind::FullTime, None) => 0,
        (EmploymentKind::PartTime, None) => return Err(InputError::HoursRequired),
    };
    Ok(Compensation::new(kind, amount).salary(hours))
}

pub fn parse_kind(raw: &str) -> Result<EmploymentKind, InputError> {
    let raw = raw.trim();
    match raw.to_lowercase().as_str() {
        "1" | "full" | "full-time" | "salaried" => Ok(EmploymentKind::FullTime),
        "2" | "part" | "part-time" | "hourly" => Ok(EmploymentKind::PartTime),
        _ => Err(InputError::UnknownKind(raw.to_string())),
    }
}

/// Line-oriented prompt reader over any input/output pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line without its terminator. Lines that are
    /// not UTF-8 are rejected and the prompt is repeated.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        loop {
            match self.read_raw(prompt)? {
                Ok(line) => return Ok(line),
                Err(err) => self.reject(&err)?,
            }
        }
    }

    fn read_raw(&mut self, prompt: &str) -> Result<Result<String, InputError>, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(String::from_utf8(buf).map_err(|_| InputError::NotUtf8))
    }

    fn reject(&mut self, err: &InputError) -> io::Result<()> {
        tracing::debug!(%err, "rejected console input");
        writeln!(self.output, "Invalid input: {err}. Try again.")
    }

    /// Keep prompting until `parse` accepts the line.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, PromptError> {
        loop {
            let raw = self.read_line(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => self.reject(&err)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_required() {
        assert_eq!(parse_name("  Ann Lee \t").unwrap(), "Ann Lee");
        assert_eq!(parse_name("   "), Err(InputError::EmptyName));
    }

    #[test]
    fn amounts_respect_minimum() {
        assert_eq!(parse_amount("250", 100.0), Ok(250.0));
        assert_eq!(parse_amount("99,5", 50.0), Ok(99.5));
        assert_eq!(
            parse_amount("99.99", 100.0),
            Err(InputError::BelowMinimum { min: 100.0 })
        );
        assert_eq!(
            parse_amount("lots", 100.0),
            Err(InputError::NotANumber("lots".into()))
        );
        assert!(matches!(
            parse_amount("NaN", 0.0),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn hours_are_bounded() {
        assert_eq!(parse_hours("0", 168), Ok(0));
        assert_eq!(parse_hours(" 168 ", 168), Ok(168));
        assert_eq!(
            parse_hours("-1", 168),
            Err(InputError::HoursOutOfRange { max: 168 })
        );
        assert_eq!(
            parse_hours("169", 168),
            Err(InputError::HoursOutOfRange { max: 168 })
        );
        assert!(matches!(
            parse_hours("4.5", 168),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn kinds_accept_numbers_and_words() {
        assert_eq!(parse_kind("1"), Ok(EmploymentKind::FullTime));
        assert_eq!(parse_kind("Hourly"), Ok(EmploymentKind::PartTime));
        assert!(parse_kind("contractor").is_err());
    }

    #[test]
    fn ask_reprompts_until_valid() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new("abc\n-3\n12\n".as_bytes(), &mut output);
        let hours = prompter.ask("Hours: ", |raw| parse_hours(raw, 168)).unwrap();
        assert_eq!(hours, 12);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Hours: ").count(), 3);
        assert!(text.contains("Invalid input: 'abc' is not a valid number. Try again."));
        assert!(text.contains("Invalid input: hours must be between 0 and 168. Try again."));
    }

    #[test]
    fn end_of_input_stops_prompting() {
        let mut prompter = Prompter::new("".as_bytes(), Vec::new());
        let err = prompter.ask("Id: ", parse_id).unwrap_err();
        assert!(matches!(err, PromptError::EndOfInput));
    }

    #[test]
    fn windows_line_endings_are_stripped() {
        let mut prompter = Prompter::new("Ann\r\n".as_bytes(), Vec::new());
        assert_eq!(prompter.read_line("> ").unwrap(), "Ann");
    }

    #[test]
    fn overflowing_hours_are_out_of_range() {
        assert_eq!(
            parse_hours("99999999999999999999", 168),
            Err(InputError::HoursOutOfRange { max: 168 })
        );
        assert_eq!(
            parse_hours("-99999999999999999999", 168),
            Err(InputError::HoursOutOfRange { max: 168 })
        );
    }

    #[test]
    fn non_utf8_line_is_rejected_and_reprompted() {
        let mut script = b"7".to_vec();
        script.extend_from_slice(&[0xff, 0xfe]);
        script.extend_from_slice(b"\n3\n");

        let mut output = Vec::new();
        let mut prompter = Prompter::new(script.as_slice(), &mut output);
        assert_eq!(prompter.ask("Id: ", parse_id).unwrap(), 3);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Id: ").count(), 2);
        assert!(text.contains("Invalid input: line is not valid UTF-8. Try again."));
    }

    #[test]
    fn hourly_quote_needs_hours() {
        let config = AppConfig::default();
        assert_eq!(
            quote_salary(EmploymentKind::PartTime, 250.0, Some(40), &config),
            Ok(10_000.0)
        );
        assert_eq!(
            quote_salary(EmploymentKind::PartTime, 250.0, None, &config),
            Err(InputError::HoursRequired)
        );
        assert_eq!(
            quote_salary(EmploymentKind::FullTime, 4_200.0, None, &config),
            Ok(4_200.0)
        );
        assert_eq!(
            quote_salary(EmploymentKind::PartTime, 50.0, Some(10), &config),
            Err(InputError::BelowMinimum { min: 100.0 })
        );
        assert_eq!(
            quote_salary(EmploymentKind::FullTime, 4_200.0, Some(200), &config),
            Err(InputError::HoursOutOfRange { max: 168 })
        );
    }
}
