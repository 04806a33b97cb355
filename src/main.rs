//! Negabinary calculator - CLI Entry Point
//!
//! Commands:
//! - `negabin encode <int>` - Show the base −2 bits of an integer
//! - `negabin decode <bits>` - Convert a bit string back to an integer
//! - `negabin add|sub <a> <b>` - Add or subtract two values
//! - `negabin neg <a>` - Negate a value
//! - `negabin cmp <a> <b>` - Compare two values
//! - `negabin test` - Built-in self-test

use clap::{Args, Parser, Subcommand};
use negabinary::{CarryStep, NegabinaryInteger};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Parser)]
#[command(name = "negabin")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Arbitrary-precision integer arithmetic in base -2")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a decimal integer as negabinary bits (low-order first)
    #[command(allow_negative_numbers = true)]
    Encode {
        /// Integer to encode
        value: i64,
    },
    /// Decode negabinary bits (low-order first) to a decimal integer
    Decode {
        /// Bit string, e.g. 11011
        bits: String,
    },
    /// Add two values
    #[command(allow_negative_numbers = true)]
    Add {
        #[command(flatten)]
        operands: Binary,
        /// Show each carry step
        #[arg(short, long)]
        trace: bool,
    },
    /// Subtract the second value from the first
    #[command(allow_negative_numbers = true)]
    Sub {
        #[command(flatten)]
        operands: Binary,
        /// Show each borrow step
        #[arg(short, long)]
        trace: bool,
    },
    /// Negate a value
    #[command(allow_negative_numbers = true)]
    Neg {
        /// Operand
        a: String,
        /// Treat the operand as a negabinary bit string
        #[arg(short, long)]
        bits: bool,
    },
    /// Compare two values
    #[command(allow_negative_numbers = true)]
    Cmp {
        #[command(flatten)]
        operands: Binary,
    },
    /// Run the built-in self-test
    Test,
}

#[derive(Args)]
struct Binary {
    /// First operand
    a: String,
    /// Second operand
    b: String,
    /// Treat operands as negabinary bit strings instead of decimal integers
    #[arg(short, long)]
    bits: bool,
}

/// Machine-readable output for `--json`.
#[derive(Serialize)]
struct Report {
    operation: &'static str,
    operands: Vec<NegabinaryInteger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<NegabinaryInteger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ordering: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<CarryStep>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Encode { value }) => {
            let n = NegabinaryInteger::from_i64(value);
            emit(cli.json, "encode", vec![], Some(n), None, Vec::new());
        }
        Some(Commands::Decode { bits }) => {
            let n = operand(&bits, true);
            decode(cli.json, n);
        }
        Some(Commands::Add { operands, trace }) => {
            let (a, b) = operands.resolve();
            let (result, steps) = a.add_traced(&b);
            if trace && !cli.json {
                print_steps("carry", &steps);
            }
            let steps = if trace { steps } else { Vec::new() };
            emit(cli.json, "add", vec![a, b], Some(result), None, steps);
        }
        Some(Commands::Sub { operands, trace }) => {
            let (a, b) = operands.resolve();
            let (result, steps) = a.subtract_traced(&b);
            if trace && !cli.json {
                print_steps("borrow", &steps);
            }
            let steps = if trace { steps } else { Vec::new() };
            emit(cli.json, "sub", vec![a, b], Some(result), None, steps);
        }
        Some(Commands::Neg { a, bits }) => {
            let a = operand(&a, bits);
            let result = a.negate();
            emit(cli.json, "neg", vec![a], Some(result), None, Vec::new());
        }
        Some(Commands::Cmp { operands }) => {
            let (a, b) = operands.resolve();
            let ordering = match a.compare_to(&b) {
                Ordering::Less => "less",
                Ordering::Equal => "equal",
                Ordering::Greater => "greater",
            };
            emit(cli.json, "cmp", vec![a, b], None, Some(ordering), Vec::new());
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("Negabinary Calculator v0.1.0");
            println!("Arbitrary-precision integers in base -2");
            println!();
            println!("Use --help for available commands");
        }
    }
}

impl Binary {
    fn resolve(&self) -> (NegabinaryInteger, NegabinaryInteger) {
        (operand(&self.a, self.bits), operand(&self.b, self.bits))
    }
}

/// Parse a command-line operand, exiting on malformed input.
fn operand(raw: &str, bits: bool) -> NegabinaryInteger {
    if bits {
        match NegabinaryInteger::parse(raw) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("❌ Invalid bit string '{}': {}", raw, e);
                std::process::exit(1);
            }
        }
    } else {
        match raw.trim().parse::<i64>() {
            Ok(v) => NegabinaryInteger::from_i64(v),
            Err(e) => {
                eprintln!("❌ Invalid integer '{}': {} (use --bits for bit strings)", raw, e);
                std::process::exit(1);
            }
        }
    }
}

/// Render a value as "bits (decimal)", or note when it exceeds i64.
fn describe(n: &NegabinaryInteger) -> String {
    let bits = if n.is_empty() { "0".to_string() } else { n.to_bit_string() };
    match n.to_i64() {
        Ok(v) => format!("{} ({})", bits, v),
        Err(_) => format!("{} (beyond i64, {} bits)", bits, n.significant_len()),
    }
}

fn decode(json: bool, n: NegabinaryInteger) {
    if let Err(e) = n.to_i64() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    emit(json, "decode", vec![], Some(n), None, Vec::new());
}

fn print_steps(label: &str, steps: &[CarryStep]) {
    println!("━━━ Steps ━━━");
    for step in steps {
        println!("  {} @ {:>3}: {:?}", label, step.position, step.kind);
    }
    println!();
}

fn emit(
    json: bool,
    operation: &'static str,
    operands: Vec<NegabinaryInteger>,
    result: Option<NegabinaryInteger>,
    ordering: Option<&'static str>,
    steps: Vec<CarryStep>,
) {
    let value = result.as_ref().and_then(|r| r.to_i64().ok());
    let report = Report { operation, operands, result, value, ordering, steps };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ Failed to encode JSON: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    for (i, op) in report.operands.iter().enumerate() {
        println!("Operand {}: {}", i + 1, describe(op));
    }
    if let Some(result) = &report.result {
        println!("Result:    {}", describe(result));
    }
    if let Some(ordering) = report.ordering {
        println!("Ordering:  {}", ordering);
    }
}

fn run_self_test() {
    println!("━━━ Negabinary Self-Test ━━━");
    println!();

    let samples: [i64; 11] = [i64::MIN, -9841, -100, -5, -1, 0, 1, 5, 100, 9841, i64::MAX];
    let nb = NegabinaryInteger::from_i64;

    let mut passed = 0;
    let mut failed = 0;

    let mut check = |name: &str, ok: bool| {
        print!("{}... ", name);
        if ok { println!("✓"); passed += 1; }
        else { println!("✗"); failed += 1; }
    };

    check(
        "Conversion roundtrip",
        samples.iter().all(|&v| nb(v).to_i64() == Ok(v)),
    );
    check(
        "Negation involution",
        samples.iter().all(|&v| nb(v).negate().negate() == nb(v)),
    );
    check(
        "Additive inverse (a + -a = 0)",
        samples.iter().all(|&v| nb(v).add(&nb(v).negate()).is_empty()),
    );
    check(
        "Subtraction is adding the negation",
        samples.iter().zip(samples.iter().rev()).all(|(&a, &b)| {
            nb(a).subtract(&nb(b)) == nb(a).add(&nb(b).negate())
        }),
    );
    check(
        "Ordering agrees with i64",
        samples.iter().all(|&a| samples.iter().all(|&b| nb(a).compare_to(&nb(b)) == a.cmp(&b))),
    );
    check("Known pattern 5 = 101", nb(5).to_bit_string() == "101");
    check("7 + 7 = 14", nb(7).add(&nb(7)).to_i64() == Ok(14));
    check("i64::MAX + i64::MIN = -1", nb(i64::MAX).add(&nb(i64::MIN)).to_i64() == Ok(-1));
    check("-i64::MIN is out of range", nb(i64::MIN).negate().to_i64().is_err());

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
