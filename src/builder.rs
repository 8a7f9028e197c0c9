use super::*;

/// Assembles a [`Matrix`] from a [`Table`] by evaluating a [`Measure`] on
/// every ordered pair of sites.
///
/// Self-pairs go through the same measure as every other pair, so a zero
/// diagonal is a property of the result rather than a shortcut. The first
/// failing pair aborts the build.
#[derive(Debug, Clone)]
pub struct Builder<M = BrayCurtis> {
    measure: M,
    corner: String,
    policy: Policy,
}

impl Default for Builder<BrayCurtis> {
    fn default() -> Self {
        Self::new(BrayCurtis::default())
    }
}

impl<M> Builder<M>
where
    M: Measure,
{
    pub fn new(measure: M) -> Self {
        Self {
            measure,
            corner: CORNER.to_string(),
            policy: Policy::default(),
        }
    }
    /// Sets the label written in the top-left cell.
    pub fn corner(mut self, corner: impl Into<String>) -> Self {
        self.corner = corner.into();
        self
    }
    /// Sets how pairs of empty sites are handled.
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
    pub fn measure(&self) -> &M {
        &self.measure
    }

    pub fn build(&self, table: &Table) -> Result<Matrix, Error> {
        table.validate()?;
        log::info!(
            "computing {}x{} dissimilarity matrix over {} otus",
            table.len(),
            table.len(),
            table.otus()
        );
        let cells = table
            .sites()
            .iter()
            .map(|a| self.row(a, table))
            .collect::<Result<Vec<Vec<Decimal>>, Error>>()?;
        Ok(Matrix::new(self.corner.clone(), table.labels(), cells))
    }

    fn row(&self, a: &Site, table: &Table) -> Result<Vec<Decimal>, Error> {
        log::debug!("row {}", a);
        table.sites().iter().map(|b| self.cell(a, b)).collect()
    }

    fn cell(&self, a: &Site, b: &Site) -> Result<Decimal, Error> {
        let d = self
            .policy
            .resolve(self.measure.distance(a.counts(), b.counts()))
            .map_err(|e| e.between(a.label(), b.label()))?;
        log::trace!("{} ~ {} = {}", a.label(), b.label(), d);
        Ok(d)
    }
}
