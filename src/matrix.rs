use super::*;

/// Labeled pairwise dissimilarities between sites.
///
/// Row `i`, column `j` holds `d(site_i, site_j)`. Rows and columns share the
/// same labels in the same order, so the matrix is square by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    corner: String,
    labels: Vec<String>,
    cells: Vec<Vec<Decimal>>,
}

impl Matrix {
    pub fn new(corner: impl Into<String>, labels: Vec<String>, cells: Vec<Vec<Decimal>>) -> Self {
        debug_assert!(cells.len() == labels.len());
        debug_assert!(cells.iter().all(|row| row.len() == labels.len()));
        Self {
            corner: corner.into(),
            labels,
            cells,
        }
    }
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
    /// Number of sites.
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
    /// Cell at row `i`, column `j`, or `None` outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> Option<Decimal> {
        self.cells.get(i)?.get(j).copied()
    }
    /// Looks up a cell by site labels.
    pub fn lookup(&self, a: &str, b: &str) -> Option<Decimal> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        self.get(i, j)
    }
    pub fn is_symmetric(&self) -> bool {
        (0..self.len()).all(|i| (0..i).all(|j| self.cells[i][j] == self.cells[j][i]))
    }
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.len()).all(|i| self.cells[i][i].is_zero())
    }
    /// Renders the `(n+1) × (n+1)` string table handed to a [`Writer`]:
    /// a header of corner and site labels, then one labeled row per site.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let header = std::iter::once(self.corner.clone())
            .chain(self.labels.iter().cloned())
            .collect::<Vec<String>>();
        let body = self.labels.iter().zip(self.cells.iter()).map(|(label, row)| {
            std::iter::once(label.clone())
                .chain(row.iter().map(Self::cell))
                .collect::<Vec<String>>()
        });
        std::iter::once(header).chain(body).collect()
    }
    /// Cells are written without trailing zeros, so the diagonal reads `0`.
    fn cell(d: &Decimal) -> String {
        d.normalize().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn matrix() -> Matrix {
        let half = Decimal::from_str("0.50").unwrap();
        let zero = Decimal::from_str("0.0").unwrap();
        Matrix::new(
            CORNER,
            vec!["X".to_string(), "Y".to_string()],
            vec![vec![zero, half], vec![half, zero]],
        )
    }

    #[test]
    fn rows_are_labeled() {
        let rows = matrix().rows();
        assert!(rows.len() == 3);
        assert!(rows[0] == vec!["x1", "X", "Y"]);
        assert!(rows[1] == vec!["X", "0", "0.5"]);
        assert!(rows[2] == vec!["Y", "0.5", "0"]);
    }

    #[test]
    fn lookup_by_label() {
        let m = matrix();
        assert!(m.lookup("X", "Y") == Some(Decimal::from_str("0.5").unwrap()));
        assert!(m.lookup("X", "Z").is_none());
    }

    #[test]
    fn get_by_index() {
        let m = matrix();
        assert!(m.get(0, 1) == Some(Decimal::from_str("0.5").unwrap()));
        assert!(m.get(1, 1).unwrap().is_zero());
        assert!(m.get(2, 0).is_none());
        assert!(m.get(0, 2).is_none());
    }

    #[test]
    fn shape_checks() {
        let m = matrix();
        assert!(m.is_symmetric());
        assert!(m.has_zero_diagonal());
        assert!(m.len() == 2);
    }

    #[test]
    fn empty_matrix_has_header() {
        let m = Matrix::new(CORNER, vec![], vec![]);
        assert!(m.rows() == vec![vec!["x1".to_string()]]);
    }
}
