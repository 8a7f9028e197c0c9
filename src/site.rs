use super::*;

/// One sampling site: its label and its OTU counts.
///
/// Raw tables carry the label as the first cell of each column; here it is
/// a field of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    label: String,
    counts: Abundance,
}

impl Site {
    pub fn new(label: impl Into<String>, counts: Abundance) -> Self {
        Self {
            label: label.into(),
            counts,
        }
    }
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn counts(&self) -> &Abundance {
        &self.counts
    }
}

impl From<(&str, &[u64])> for Site {
    fn from((label, counts): (&str, &[u64])) -> Self {
        Self::new(label, Abundance::from(counts))
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} otus)", self.label, self.counts.len())
    }
}
