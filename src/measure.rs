use super::*;

/// Pairwise dissimilarity between two sites.
///
/// Implementations are pure: the result depends only on the two vectors, so
/// a [`Builder`] may evaluate pairs in any order.
pub trait Measure {
    fn distance(&self, a: &Abundance, b: &Abundance) -> Result<Decimal, Error>;
}
