use super::*;
use std::str::FromStr;

/// Counts of every OTU observed at one site.
///
/// Position is the only correspondence between two vectors: index `i` of one
/// site is compared with index `i` of another, with no alignment by taxon
/// name. Counts are exact decimals and never negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Abundance(Vec<Decimal>);

impl Abundance {
    /// Number of OTUs.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Counts in OTU order.
    pub fn counts(&self) -> &[Decimal] {
        &self.0
    }
    /// Counts paired position by position with another site's.
    pub fn zip<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = (Decimal, Decimal)> + 'a {
        self.0.iter().copied().zip(other.0.iter().copied())
    }
    /// Parses one count as written in a table cell.
    ///
    /// Accepts plain (`12`, `0.5`) and scientific (`1.2e3`) notation, straight
    /// from text to decimal. Anything else, digit separators like `1_000`
    /// included, is rejected rather than repaired. A cell must fit a
    /// [`Decimal`] exactly: more than 28 significant digits is an error, never
    /// a rounding.
    pub fn parse(cell: &str) -> Result<Decimal, Error> {
        let cell = cell.trim();
        let malformed = || Error::MalformedTable(format!("not a number: {:?}", cell));
        let digits = significand(cell).ok_or_else(malformed)?;
        if digits.len() > MAX_PRECISION as usize {
            return Err(Error::MalformedTable(format!(
                "more than {} significant digits: {}",
                MAX_PRECISION, cell
            )));
        }
        let count = match cell.contains(['e', 'E']) {
            true => Decimal::from_scientific(cell),
            false => Decimal::from_str(cell),
        }
        .map_err(|_| malformed())?;
        let mantissa = count.normalize().mantissa().unsigned_abs().to_string();
        if mantissa.trim_end_matches('0') != digits {
            return Err(Error::MalformedTable(format!("not exactly representable: {}", cell)));
        }
        if count.is_sign_negative() && !count.is_zero() {
            return Err(Error::MalformedTable(format!("negative count: {}", cell)));
        }
        Ok(count)
    }
}

/// Significant digits of a decimal literal, or `None` if the text is not one.
///
/// The literal is an optional sign, digits with at most one `.`, and an
/// optional exponent. Leading and trailing zeros are not significant.
fn significand(cell: &str) -> Option<String> {
    let unsigned = cell.strip_prefix(['+', '-']).unwrap_or(cell);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(i) => (&unsigned[..i], Some(&unsigned[i + 1..])),
        None => (unsigned, None),
    };
    let digits = mantissa.replacen('.', "", 1);
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let exponent = exponent.map_or(true, |e| numeric(e.strip_prefix(['+', '-']).unwrap_or(e)));
    match numeric(&digits) && exponent {
        true => Some(digits.trim_start_matches('0').trim_end_matches('0').to_string()),
        false => None,
    }
}

impl From<Vec<Decimal>> for Abundance {
    fn from(counts: Vec<Decimal>) -> Self {
        Self(counts)
    }
}

impl FromIterator<Decimal> for Abundance {
    fn from_iter<I: IntoIterator<Item = Decimal>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Whole-number counts, the usual shape of OTU tables.
impl From<&[u64]> for Abundance {
    fn from(counts: &[u64]) -> Self {
        counts.iter().copied().map(Decimal::from).collect()
    }
}

impl TryFrom<&[&str]> for Abundance {
    type Error = Error;
    fn try_from(cells: &[&str]) -> Result<Self, Self::Error> {
        cells.iter().map(|cell| Self::parse(cell)).collect()
    }
}
