use crate::generator::ProblemGenerator;
use crate::problem::Operation;
use crate::settings::{GeneratorSettings, LawsMode};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Operations selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OperationArg {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationArg {
    pub fn to_operation(self) -> Operation {
        match self {
            OperationArg::Add => Operation::Add,
            OperationArg::Subtract => Operation::Subtract,
            OperationArg::Multiply => Operation::Multiply,
            OperationArg::Divide => Operation::Divide,
        }
    }
}

/// Digit-pairing rules selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LawsArg {
    None,
    Five,
    Ten,
    Both,
}

impl LawsArg {
    pub fn to_laws_mode(self) -> LawsMode {
        match self {
            LawsArg::None => LawsMode::None,
            LawsArg::Five => LawsMode::Five,
            LawsArg::Ten => LawsMode::Ten,
            LawsArg::Both => LawsMode::Both,
        }
    }
}

/// Abacus drill - print mental-arithmetic practice problems
#[derive(Parser, Debug)]
#[command(name = "abacus-drill")]
#[command(about = "Generate mental-arithmetic drill problems for abacus practice")]
#[command(version)]
pub struct CliArgs {
    /// How many problems to print
    #[arg(short, long, default_value_t = 10)]
    pub problems: usize,

    /// Operands per problem
    #[arg(long, default_value_t = 2)]
    pub operands: usize,

    /// Largest operand value
    #[arg(long, default_value_t = 10)]
    pub max: i64,

    /// Smallest operand value
    #[arg(long, default_value_t = 1)]
    pub min: i64,

    /// Operations to draw from (repeatable)
    #[arg(short, long = "operation", value_enum, default_values = ["add"])]
    pub operations: Vec<OperationArg>,

    /// Digit-pairing rule for addition and subtraction drills
    #[arg(long, value_enum, default_value = "none")]
    pub laws: LawsArg,

    /// Seed for a reproducible problem sheet
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the answer key instead of question marks
    #[arg(short, long)]
    pub answers: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub settings: GeneratorSettings,
    pub problems: usize,
    pub seed: Option<u64>,
    pub answers: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    Ok(config_from_args(args))
}

fn config_from_args(args: CliArgs) -> CliConfig {
    let operations = args
        .operations
        .iter()
        .map(|operation| operation.to_operation())
        .collect();
    let settings = GeneratorSettings::new(args.operands, args.max, operations)
        .with_range_min(args.min)
        .with_laws_mode(args.laws.to_laws_mode());

    CliConfig {
        settings,
        problems: args.problems,
        seed: args.seed,
        answers: args.answers,
        log_level: args.log_level,
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let mut generator = match config.seed {
        Some(seed) => ProblemGenerator::seeded(config.settings, seed),
        None => ProblemGenerator::new(config.settings),
    }
    .context("Invalid drill settings")?;

    info!("Printing {} problems", config.problems);

    for problem in generator.problems(config.problems) {
        if config.answers {
            println!("{} = {}", problem, problem.correct_answer);
        } else {
            println!("{} = ?", problem);
        }
    }
    Ok(())
}
