//! Rendering for the `fibseq` command line tool.

use core::fmt::Display;

use eyre::Result;

mod args;
pub use args::LogLevel;

/// How a sequence is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// `[0, 1, 1, 2]` on a single line
    #[default]
    List,
    /// one term per line
    Lines,
    /// a JSON array of decimal strings
    Json,
}

/// Render `terms` in the given format, including the trailing newline.
pub fn render<T: Display>(terms: &[T], format: Format) -> Result<String> {
    let out = match format {
        Format::List => {
            let terms: Vec<String> = terms.iter().map(ToString::to_string).collect();
            format!("[{}]\n", terms.join(", "))
        }
        Format::Lines => terms.iter().map(|t| format!("{t}\n")).collect(),
        Format::Json => {
            // terms can exceed what JSON consumers read back as a number
            let terms: Vec<String> = terms.iter().map(ToString::to_string).collect();
            format!("{}\n", serde_json::to_string(&terms)?)
        }
    };

    Ok(out)
}
