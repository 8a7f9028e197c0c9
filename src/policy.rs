use super::*;

/// What to do when two sites both have zero total abundance.
///
/// Bray-Curtis is undefined there. `Fail` surfaces [`Error::DivisionByZero`];
/// `Zero` treats two empty sites as identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    #[default]
    Fail,
    Zero,
}

impl Policy {
    /// Applies the policy to one pairwise result. Other errors pass through.
    pub fn resolve(&self, result: Result<Decimal, Error>) -> Result<Decimal, Error> {
        match (self, result) {
            (Policy::Zero, Err(Error::DivisionByZero)) => Ok(Decimal::ZERO),
            (_, result) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_propagates() {
        assert!(Policy::Fail.resolve(Err(Error::DivisionByZero)) == Err(Error::DivisionByZero));
    }

    #[test]
    fn zero_absorbs_division() {
        assert!(Policy::Zero.resolve(Err(Error::DivisionByZero)) == Ok(Decimal::ZERO));
    }

    #[test]
    fn zero_keeps_other_errors() {
        let err = Error::InvalidInput("mismatched vector lengths: 3 and 2".into());
        assert!(Policy::Zero.resolve(Err(err.clone())) == Err(err));
    }
}
