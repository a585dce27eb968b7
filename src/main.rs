use clap::Parser;
use opsplit::{
    report, solve_word, ByteExclusionSet, Operation, SolutionSequence, SolverLimits, SplitOptions,
};

/// Split a value into two bad-character-free operands that recombine
/// with add, subtract or xor.
#[derive(Debug, Parser)]
#[command(name = "opsplit", version, about, long_about = None)]
struct Cli {
    /// String or hex value to convert.
    value: String,

    /// Bad characters as a packed hex list (e.g. "000a0d").
    /// Default is bytes 0x00-0x2f plus '?'.
    #[arg(long, value_name = "HEX")]
    bad_chars: Option<String>,

    /// The combining operation: add, subtract or xor.
    #[arg(long, default_value = "add")]
    operation: Operation,

    /// Fold word bytes big-endian instead of little-endian.
    #[arg(long)]
    big_endian: bool,

    /// Treat the value as a single hex integer rather than text.
    #[arg(long)]
    is_hex: bool,

    /// Trim surrounding whitespace from the value before splitting.
    #[arg(long)]
    strip_space: bool,

    /// Per-word solver timeout in milliseconds; a timeout reports the
    /// word as unknown. Unset means the solver runs until it decides.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    // Default to `info` when `RUST_LOG` is unset or invalid; logs go to
    // stderr so the report on stdout stays pipeable.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exclusions = match &cli.bad_chars {
        Some(list) => ByteExclusionSet::from_hex_list(list)?,
        None => ByteExclusionSet::default_policy(),
    };

    let options = SplitOptions {
        is_hex: cli.is_hex,
        big_endian: cli.big_endian,
        strip_space: cli.strip_space,
    };
    let words = opsplit::split(&cli.value, &options)?;
    if !cli.is_hex {
        for word in &words {
            tracing::info!("[SPLIT] word {}", word);
        }
    }

    let limits = SolverLimits {
        timeout_ms: cli.timeout_ms,
    };

    // Words are independent; solved in order for deterministic output.
    let mut sequence: SolutionSequence = Vec::with_capacity(words.len());
    for word in words {
        let result = solve_word(word, cli.operation, &exclusions, &limits)?;
        sequence.push((word, result));
    }

    print!("{}", report::render(&sequence, cli.operation));
    Ok(())
}
