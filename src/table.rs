use super::*;

/// Sites in input order, all sharing one OTU ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table(Vec<Site>);

impl Table {
    pub fn sites(&self) -> &[Site] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Site labels in column order.
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|s| s.label().to_string()).collect()
    }
    /// Number of OTUs, taken from the first site.
    pub fn otus(&self) -> usize {
        self.0.first().map(|s| s.counts().len()).unwrap_or(0)
    }
    /// Checks that every site has as many counts as the first.
    pub fn validate(&self) -> Result<(), Error> {
        let Some(first) = self.0.first() else {
            return Ok(());
        };
        match self
            .0
            .iter()
            .find(|site| site.counts().len() != first.counts().len())
        {
            None => Ok(()),
            Some(site) => Err(Error::InvalidInput(format!(
                "site {} has {} counts but site {} has {}",
                site.label(),
                site.counts().len(),
                first.label(),
                first.counts().len()
            ))),
        }
    }
}

impl From<Vec<Site>> for Table {
    fn from(sites: Vec<Site>) -> Self {
        Self(sites)
    }
}

impl FromIterator<Site> for Table {
    fn from_iter<I: IntoIterator<Item = Site>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_in_order() {
        let table = Table::from(vec![
            Site::from(("B", &[1u64, 2][..])),
            Site::from(("A", &[3u64, 4][..])),
        ]);
        assert!(table.labels() == vec!["B", "A"]);
        assert!(table.otus() == 2);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn ragged_columns() {
        let table = Table::from(vec![
            Site::from(("A", &[1u64, 2, 3][..])),
            Site::from(("B", &[1u64, 2][..])),
        ]);
        let err = table.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref s) if s.contains("site B")));
    }

    #[test]
    fn empty_is_valid() {
        assert!(Table::default().validate().is_ok());
        assert!(Table::default().otus() == 0);
    }
}
