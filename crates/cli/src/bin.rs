use std::io::Write;

use clap::{Args, CommandFactory, Parser, Subcommand};
use eyre::Result;
use fibseq_cli::{render, Format, LogLevel};
use log::{debug, info};

#[derive(Parser)]
#[command(name = "fibseq", version)]
/// Print the leading terms of the Fibonacci sequence
struct FibseqCli {
    #[command(subcommand)]
    nested: FibseqSubcommand,

    /// log level (trace, debug, info, warn, error, off)
    #[arg(short = 'l', long, global = true, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Subcommand)]
enum FibseqSubcommand {
    Terms(Terms),
    Completions(Completions),
}

#[derive(Args)]
/// print the first N terms
struct Terms {
    /// number of terms to print
    #[arg(default_value_t = 10, allow_negative_numbers = true)]
    count: i64,

    /// output format
    #[arg(short, long, value_enum, default_value_t = Format::List)]
    format: Format,

    /// use 64-bit terms and fail instead of overflowing
    #[arg(long)]
    u64: bool,
}

#[derive(Args)]
/// print a shell completion script
struct Completions {
    /// shell to generate completions for
    shell: clap_complete::Shell,
}

fn main() -> Result<()> {
    let args = FibseqCli::parse();
    pretty_env_logger::formatted_builder().filter_level(args.log_level.into()).init();

    match args.nested {
        FibseqSubcommand::Terms(Terms { count, format, u64 }) => {
            debug!("count: {count}, format: {format:?}, u64: {u64}");

            let out = match u64 {
                true => render(&fibseq::fib_u64(count)?, format)?,
                false => render(&fibseq::fib(count)?, format)?,
            };

            let mut stdout = anstream::stdout().lock();
            stdout.write_all(out.as_bytes())?;
            stdout.flush()?;
            info!("printed {count} terms");
        }
        FibseqSubcommand::Completions(Completions { shell }) => {
            let mut cmd = FibseqCli::command();
            clap_complete::generate(shell, &mut cmd, "fibseq", &mut anstream::stdout());
        }
    }

    Ok(())
}
