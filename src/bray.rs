use super::*;
use rust_decimal::RoundingStrategy;

/// Bray-Curtis dissimilarity at a fixed decimal precision.
///
/// ```text
/// d(A, B) = 1 - 2 · Σ min(aᵢ, bᵢ) / (Σ aᵢ + Σ bᵢ)
/// ```
///
/// The sums are exact. Only the quotient is rounded, to `precision`
/// significant digits with ties away from zero, before it is doubled and
/// subtracted from one. Identical inputs therefore give identical digits on
/// every platform.
///
/// Two all-zero sites have no defined dissimilarity and yield
/// [`Error::DivisionByZero`]; see [`Policy`] for treating them as identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrayCurtis {
    precision: u32,
}

impl Default for BrayCurtis {
    fn default() -> Self {
        Self::new(PRECISION)
    }
}

impl BrayCurtis {
    /// Creates a measure keeping `precision` significant digits, clamped to
    /// what [`Decimal`] can represent.
    pub fn new(precision: u32) -> Self {
        Self {
            precision: precision.clamp(1, MAX_PRECISION),
        }
    }
    pub fn precision(&self) -> u32 {
        self.precision
    }
    /// Shared abundance and per-site totals.
    fn sums(a: &Abundance, b: &Abundance) -> Result<(Decimal, Decimal, Decimal), Error> {
        a.zip(b).try_fold(
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            |(shared, sum_a, sum_b), (x, y)| {
                Ok((add(shared, x.min(y))?, add(sum_a, x)?, add(sum_b, y)?))
            },
        )
    }
    /// Rounds the quotient to the configured significant digits.
    fn round(&self, quotient: Decimal) -> Result<Decimal, Error> {
        if quotient.is_zero() {
            return Ok(quotient);
        }
        quotient
            .round_sf_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero)
            .ok_or_else(|| Error::InvalidInput(format!("cannot round {} to {} digits", quotient, self.precision)))
    }
}

impl Measure for BrayCurtis {
    fn distance(&self, a: &Abundance, b: &Abundance) -> Result<Decimal, Error> {
        if a.len() != b.len() {
            return Err(Error::InvalidInput(format!(
                "mismatched vector lengths: {} and {}",
                a.len(),
                b.len()
            )));
        }
        let (shared, sum_a, sum_b) = Self::sums(a, b)?;
        let total = add(sum_a, sum_b)?;
        if total.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let quotient = shared
            .checked_div(total)
            .ok_or_else(|| Error::InvalidInput(format!("cannot divide {} by {}", shared, total)))?;
        let quotient = self.round(quotient)?;
        Ok(Decimal::ONE - Decimal::from(2) * quotient)
    }
}

fn add(x: Decimal, y: Decimal) -> Result<Decimal, Error> {
    x.checked_add(y)
        .ok_or_else(|| Error::InvalidInput("abundance sum exceeds decimal range".to_string()))
}
