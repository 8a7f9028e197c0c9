//! Exact-decimal Bray-Curtis dissimilarity matrices.
//!
//! Community abundance tables (one column per sampling site, one row per OTU)
//! are reduced to a square, symmetric matrix of pairwise dissimilarities with
//! a zero diagonal, the usual input to PCoA and clustering.
//!
//! ## Core Types
//!
//! - [`Abundance`] — Non-negative decimal counts for one site
//! - [`Site`] — A labeled abundance column
//! - [`Table`] — Ordered collection of sites sharing one OTU ordering
//! - [`Matrix`] — Labeled pairwise dissimilarities
//!
//! ## Computation
//!
//! - [`Measure`] — Pairwise dissimilarity between two abundance vectors
//! - [`BrayCurtis`] — `1 - 2·Σmin / (ΣA + ΣB)` at a fixed decimal precision
//! - [`Builder`] — Sweeps every ordered pair of sites into a [`Matrix`]
//!
//! ## Collaborators
//!
//! - [`Reader`] — Delimited text → [`Table`]
//! - [`Writer`] — [`Matrix`] → delimited text
//!
//! All arithmetic happens in [`Decimal`]; counts never pass through binary
//! floating point between the source file and the output cell.
mod abundance;
#[cfg(feature = "cli")]
mod args;
mod bray;
mod builder;
mod error;
mod matrix;
mod measure;
mod policy;
mod reader;
mod site;
mod table;
mod writer;

pub use abundance::*;
#[cfg(feature = "cli")]
pub use args::*;
pub use bray::*;
pub use builder::*;
pub use error::*;
pub use matrix::*;
pub use measure::*;
pub use policy::*;
pub use reader::*;
pub use site::*;
pub use table::*;
pub use writer::*;

pub use rust_decimal::Decimal;

// ============================================================================
// PARAMETERS
// ============================================================================
/// Significant digits kept by the Bray-Curtis quotient.
pub const PRECISION: u32 = 10;
/// Most significant digits a [`Decimal`] mantissa can hold.
pub const MAX_PRECISION: u32 = 28;
/// Label written in the top-left cell of the output matrix.
pub const CORNER: &str = "x1";
/// Field separator for comma-delimited tables.
pub const COMMA: u8 = b',';
/// Field separator for tab-delimited tables.
pub const TAB: u8 = b'\t';

/// Initialize terminal logging at the given verbosity.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    // a second init (tests, embedding) keeps the first logger
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}
