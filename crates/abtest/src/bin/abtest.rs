//! Command-line A/B test analysis.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a session file with the default columns group_id,session_result
//! abtest csv sessions.csv
//!
//! # Tab-separated file with custom column names
//! abtest csv sessions.tsv --delimiter tab --group-column arm --result-column converted
//!
//! # Pre-aggregated counts, machine-readable output
//! abtest counts --a 31357/42429 --b 34676/45623 --json
//!
//! # Also solve for the sample size reaching 80% power
//! abtest csv sessions.csv --target-power 0.8
//! ```

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use abtest::output::{format_report, to_json_pretty};
use abtest::{logging, AbTest, Alternative, AnalysisReport, Config, GroupSummary};

/// Two-group conversion experiment analysis
#[derive(Parser, Debug)]
#[command(name = "abtest")]
#[command(about = "Compute z-test, confidence interval, effect size and power for an A/B test")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    input: Input,

    /// Significance level of the z-test and the confidence interval
    #[arg(long, global = true, default_value = "0.05", value_parser = parse_probability)]
    alpha_test: f64,

    /// Significance level used by the power calculation
    #[arg(long, global = true, default_value = "0.08", value_parser = parse_probability)]
    alpha_power: f64,

    /// Nominal confidence level of the interval
    #[arg(long, global = true, default_value = "0.95", value_parser = parse_probability)]
    confidence: f64,

    /// Ratio of second to first sample size assumed by the power calculation
    #[arg(long, global = true, default_value = "1.0", value_parser = parse_ratio)]
    power_ratio: f64,

    /// Alternative hypothesis for rate A minus rate B: two-sided, larger, smaller
    #[arg(long, global = true, default_value = "two-sided")]
    alternative: Alternative,

    /// Also report the sample size needed to reach this power
    #[arg(long, global = true, value_parser = parse_probability)]
    target_power: Option<f64>,

    /// Label of group A
    #[arg(long, global = true, default_value = "A")]
    group_a: String,

    /// Label of group B
    #[arg(long, global = true, default_value = "B")]
    group_b: String,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Show debug logging on stderr (overridden by ABTEST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Input {
    /// Analyze a delimited file with one row per session
    Csv {
        /// Path to the input file
        path: PathBuf,

        /// Column holding group labels
        #[arg(long, default_value = "group_id")]
        group_column: String,

        /// Column holding the 0/1 conversion indicator
        #[arg(long, default_value = "session_result")]
        result_column: String,

        /// Field delimiter: a single character, or "tab"
        #[arg(long, default_value = ",", value_parser = parse_delimiter)]
        delimiter: u8,
    },

    /// Analyze pre-aggregated counts given as CONVERSIONS/SESSIONS
    Counts {
        /// Counts for group A
        #[arg(long, value_parser = parse_counts)]
        a: (u64, u64),

        /// Counts for group B
        #[arg(long, value_parser = parse_counts)]
        b: (u64, u64),
    },
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(format!("must be in (0, 1), got {}", value))
    }
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("must be > 0, got {}", value))
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("delimiter must be a single ASCII character, got '{}'", s)),
    }
}

fn parse_counts(s: &str) -> Result<(u64, u64), String> {
    let (conversions, sessions) = s
        .split_once('/')
        .ok_or_else(|| format!("expected CONVERSIONS/SESSIONS, got '{}'", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u64>()
            .map_err(|_| format!("'{}' is not a non-negative integer", part))
    };
    Ok((parse(conversions)?, parse(sessions)?))
}

/// Checks across arguments that clap cannot express per value.
fn validate(args: &Args) -> Result<(), clap::Error> {
    if args.group_a == args.group_b {
        return Err(Args::command().error(
            ErrorKind::ArgumentConflict,
            format!("--group-a and --group-b must differ, got '{}' twice", args.group_a),
        ));
    }
    Ok(())
}

fn config_from_args(args: &Args) -> Config {
    let mut config = Config {
        alpha_test: args.alpha_test,
        alpha_power: args.alpha_power,
        confidence: args.confidence,
        power_ratio: args.power_ratio,
        alternative: args.alternative,
        target_power: args.target_power,
        group_a: args.group_a.clone(),
        group_b: args.group_b.clone(),
        ..Config::default()
    };
    if let Input::Csv {
        group_column,
        result_column,
        delimiter,
        ..
    } = &args.input
    {
        config.group_column = group_column.clone();
        config.result_column = result_column.clone();
        config.delimiter = *delimiter;
    }
    config
}

fn run(args: &Args) -> abtest::Result<AnalysisReport> {
    let test = AbTest::with_config(config_from_args(args));

    match &args.input {
        Input::Csv { path, .. } => test.run_csv(path),
        Input::Counts { a, b } => {
            let summaries = [
                GroupSummary::new(args.group_a.clone(), a.0, a.1),
                GroupSummary::new(args.group_b.clone(), b.0, b.1),
            ];
            test.run_summaries(&summaries)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = validate(&args) {
        e.exit();
    }
    logging::init(args.verbose);

    let report = match run(&args) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match to_json_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", abtest::Error::from(e));
                return ExitCode::FAILURE;
            }
        }
    } else {
        let styled = !args.no_color && std::io::stdout().is_terminal();
        print!("{}", format_report(&report, styled));
    }

    ExitCode::SUCCESS
}
