//! battery-vampire - print the binary expansion of 1/101 forever
//!
//! With no arguments the output is the header followed by an endless
//! stream of digits, a space after every fourth and a newline after every
//! eightieth. Pass `--flush-every-digit` to force a flush per digit.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use binfrac::{BinaryFractionPrinter, Cycle, FlushPolicy, Fraction, PrinterConfig};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Print the infinite binary expansion of 1/101")]
struct Cli {
    /// Flush stdout after every digit (keeps the terminal and CPU busy)
    #[arg(long)]
    flush_every_digit: bool,

    /// Stop after this many digits instead of running forever
    #[arg(long, value_name = "DIGITS")]
    limit: Option<u64>,

    /// JSON printer config; command line flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn printer_config(&self) -> binfrac::Result<PrinterConfig> {
        let mut config = match &self.config {
            Some(path) => PrinterConfig::from_file(path)?,
            None => PrinterConfig::default(),
        };
        if self.flush_every_digit {
            config = config.with_flush(FlushPolicy::EveryDigit);
        }
        if let Some(limit) = self.limit {
            config = config.with_digit_limit(limit);
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away (e.g. piped into `head`)
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> binfrac::Result<()> {
    let config = cli.printer_config()?;
    let fraction = Fraction::ONE_OVER_101;

    if cli.verbose {
        report_setup(fraction, &config);
    }

    let start_time = Instant::now();
    let stdout = std::io::stdout().lock();

    let flush = config.flush;
    let report = match flush {
        FlushPolicy::EveryDigit => BinaryFractionPrinter::new(stdout, fraction, config).run()?,
        FlushPolicy::Buffered => {
            let writer = std::io::BufWriter::new(stdout);
            BinaryFractionPrinter::new(writer, fraction, config).run()?
        }
    };

    if cli.verbose {
        let elapsed = start_time.elapsed();
        eprintln!();
        eprintln!(
            "Printed {} digits in {elapsed:.2?} (final remainder {})",
            report.digits, report.remainder
        );
    }
    Ok(())
}

fn report_setup(fraction: Fraction, config: &PrinterConfig) {
    eprintln!("Fraction: {fraction}");
    eprintln!(
        "Layout: space every {} digits, newline every {}",
        config.layout.group_size(),
        config.layout.line_width()
    );
    eprintln!("Flush policy: {:?}", config.flush);
    match config.digit_limit {
        Some(limit) => eprintln!("Digit limit: {limit}"),
        None => eprintln!("Digit limit: none (runs until killed)"),
    }

    match Cycle::detect(fraction, fraction.denominator()) {
        Some(cycle) => eprintln!(
            "Expansion repeats every {} digits after a preperiod of {}",
            cycle.period, cycle.preperiod
        ),
        None => eprintln!("No repeat found within {} digits", fraction.denominator()),
    }
}
