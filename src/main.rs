use clap::Parser;
use cmpmode::{try_compare, CmpMode, Complex64};
use serde_json::Value;
use tracing::{debug, Level};

/// Compare two values: `cmpx 3 10 --mode lt` prints `true`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Left operand as JSON. Anything that is not valid JSON is taken as a string.
    left: String,
    /// Right operand, read the same way as the left one.
    right: String,
    /// Relation to test: <, <=, ==, >, >= or lt, le, eq, gt, ge
    #[arg(long, short, default_value = "eq")]
    mode: CmpMode,
    /// Read both operands as complex literals such as 1.5-2i
    #[arg(long)]
    complex: bool,
    /// Fail with exit status 2 instead of printing false for unsupported comparisons
    #[arg(long)]
    strict: bool,
    /// Log dispatch decisions to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let outcome = if args.complex {
        let left = parse_complex(&args.left);
        let right = parse_complex(&args.right);
        try_compare(&left, &right, args.mode)
    } else {
        let left = parse_json(&args.left);
        let right = parse_json(&args.right);
        debug!(%left, %right, mode = %args.mode, "comparing operands");
        try_compare(&left, &right, args.mode)
    };

    match outcome {
        Ok(holds) => println!("{holds}"),
        Err(e) if args.strict => {
            eprintln!("{e}");
            std::process::exit(2);
        }
        Err(e) => {
            debug!(error = %e, "unsupported comparison");
            println!("false");
        }
    }
}

// Plain words like `apple` are not JSON; treat them as strings.
fn parse_json(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn parse_complex(raw: &str) -> Complex64 {
    match raw.parse() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
