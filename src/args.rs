use super::*;
use clap::ArgAction;
use clap::Parser;
use std::path::PathBuf;

/// Compute a Bray-Curtis dissimilarity matrix from an OTU abundance table.
#[derive(Debug, Clone, Parser)]
#[command(name = "braycurtis", version)]
pub struct Args {
    /// Abundance table: a label row, then one row per OTU, one column per site.
    pub input: PathBuf,
    /// Where to write the labeled distance matrix.
    pub output: PathBuf,
    /// Field separator for both files (`,`, `;`, `tab`, ...). Defaults by extension.
    #[arg(long, short, value_parser = separator)]
    pub delimiter: Option<u8>,
    /// Label for the top-left cell of the matrix.
    #[arg(long, default_value = CORNER)]
    pub corner: String,
    /// Significant digits kept by the Bray-Curtis quotient.
    #[arg(long, default_value_t = PRECISION)]
    pub precision: u32,
    /// Treat the first column as a site instead of OTU identifiers.
    #[arg(long)]
    pub no_taxa: bool,
    /// Report 0 for two sites that are both empty instead of failing.
    #[arg(long)]
    pub zero_as_identical: bool,
    /// More output (-v debug, -vv trace).
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn reader(&self) -> Reader {
        let reader = Reader::for_path(&self.input).taxa(!self.no_taxa);
        match self.delimiter {
            Some(d) => reader.delimiter(d),
            None => reader,
        }
    }
    pub fn writer(&self) -> Writer {
        let writer = Writer::for_path(&self.output);
        match self.delimiter {
            Some(d) => writer.delimiter(d),
            None => writer,
        }
    }
    pub fn builder(&self) -> Builder {
        Builder::new(BrayCurtis::new(self.precision))
            .corner(self.corner.as_str())
            .policy(match self.zero_as_identical {
                true => Policy::Zero,
                false => Policy::Fail,
            })
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn separator(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(TAB),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("expected a single ascii character, got {:?}", s)),
    }
}
