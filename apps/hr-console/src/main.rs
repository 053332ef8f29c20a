use std::io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hr_console::{AppConfig, Console, ListFormat, input};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{EmployeeManager, EmploymentKind};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hr-console", version, about = "Employee records console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive menu (default).
    Run(RunCommand),
    /// Compute one salary without starting the menu.
    Salary(SalaryCommand),
}

#[derive(Args, Debug, Default)]
struct RunCommand {
    #[arg(long, help = "Smallest accepted base salary or hourly rate")]
    min_rate: Option<f64>,
    #[arg(long, help = "Largest accepted hours worked")]
    max_hours: Option<u32>,
    #[arg(long, value_enum)]
    format: Option<ListFormat>,
}

#[derive(Args, Debug)]
struct SalaryCommand {
    #[arg(long, value_enum)]
    kind: KindArg,
    #[arg(long, help = "Base salary or hourly rate")]
    amount: f64,
    #[arg(long, help = "Hours worked; required for part-time")]
    hours: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    FullTime,
    PartTime,
}

impl From<KindArg> for EmploymentKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::FullTime => EmploymentKind::FullTime,
            KindArg::PartTime => EmploymentKind::PartTime,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    init_tracing(ObsConfig {
        env_filter: config.log_filter.clone(),
        ..ObsConfig::default()
    })?;

    match cli.command.unwrap_or(Command::Run(RunCommand::default())) {
        Command::Run(cmd) => run_console(cmd, config),
        Command::Salary(cmd) => compute_salary(cmd, &config),
    }
}

fn run_console(cmd: RunCommand, mut config: AppConfig) -> Result<()> {
    if let Some(min_rate) = cmd.min_rate {
        config = config.with_min_rate(min_rate)?;
    }
    if let Some(max_hours) = cmd.max_hours {
        config = config.with_max_hours(max_hours)?;
    }
    if let Some(format) = cmd.format {
        config.list_format = format;
    }
    info!(
        min_rate = config.min_rate,
        max_hours = config.max_hours,
        "starting console session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), EmployeeManager::new(), config);
    console.run().context("console I/O failed")?;
    info!("console session ended");
    Ok(())
}

fn compute_salary(cmd: SalaryCommand, config: &AppConfig) -> Result<()> {
    let salary = input::quote_salary(cmd.kind.into(), cmd.amount, cmd.hours, config)?;
    println!("{salary:.2}");
    Ok(())
}
