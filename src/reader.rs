use super::*;
use std::path::Path;

/// Loads a [`Table`] from delimited text.
///
/// The first record holds labels and every later record one OTU. By default
/// the first column is taken to be OTU identifiers and skipped; each
/// remaining column becomes a [`Site`].
///
/// Spreadsheets export columns of differing length by padding the short ones
/// with empty cells, so empty cells at the bottom of a column shorten it.
/// The length check itself is left to [`Table::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reader {
    delimiter: u8,
    taxa: bool,
}

impl Default for Reader {
    fn default() -> Self {
        Self {
            delimiter: COMMA,
            taxa: true,
        }
    }
}

impl Reader {
    /// A reader whose delimiter follows the file extension.
    pub fn for_path(path: &Path) -> Self {
        Self::default().delimiter(delimiter(path))
    }
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
    /// Whether the first column holds OTU identifiers rather than a site.
    pub fn taxa(mut self, taxa: bool) -> Self {
        self.taxa = taxa;
        self
    }

    pub fn open(&self, path: &Path) -> Result<Table, Error> {
        log::info!("reading {}", path.display());
        let file = std::fs::File::open(path)
            .map_err(|e| Error::MalformedTable(format!("{}: {}", path.display(), e)))?;
        self.read(file)
    }

    pub fn read<R: std::io::Read>(&self, source: R) -> Result<Table, Error> {
        let records = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(source)
            .into_records()
            .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()
            .map_err(|e| Error::MalformedTable(e.to_string()))?;
        let Some((header, body)) = records.split_first() else {
            return Err(Error::MalformedTable("empty table".to_string()));
        };
        let skip = usize::from(self.taxa);
        if header.len() <= skip {
            return Err(Error::MalformedTable("no site columns".to_string()));
        }
        let table = (skip..header.len())
            .map(|c| Self::column(header, body, c))
            .collect::<Result<Table, Error>>()?;
        log::info!("read {} sites", table.len());
        Ok(table)
    }

    fn column(header: &csv::StringRecord, body: &[csv::StringRecord], c: usize) -> Result<Site, Error> {
        let label = header.get(c).unwrap_or_default();
        if label.is_empty() {
            return Err(Error::MalformedTable(format!("column {} has no label", c + 1)));
        }
        let cells = body
            .iter()
            .map(|record| record.get(c).unwrap_or_default())
            .collect::<Vec<&str>>();
        let n = cells.iter().rposition(|cell| !cell.is_empty()).map_or(0, |i| i + 1);
        let counts = cells[..n]
            .iter()
            .enumerate()
            .map(|(r, cell)| {
                Abundance::parse(cell).map_err(|e| {
                    Error::MalformedTable(format!(
                        "row {}, column {} ({}): {}",
                        r + 2,
                        c + 1,
                        label,
                        match e {
                            Error::MalformedTable(s) => s,
                            other => other.to_string(),
                        }
                    ))
                })
            })
            .collect::<Result<Abundance, Error>>()?;
        Ok(Site::new(label, counts))
    }
}

/// Tab for `.tsv` and `.tab` files, comma otherwise.
pub fn delimiter(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("tab") => TAB,
        _ => COMMA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_taxa_column() {
        let text = "otu,X,Y\nOTU_1,5,0\nOTU_2,5,5\nOTU_3,0,5\n";
        let table = Reader::default().read(text.as_bytes()).unwrap();
        assert!(table.labels() == vec!["X", "Y"]);
        assert!(table.sites()[0].counts() == &Abundance::from(&[5u64, 5, 0][..]));
        assert!(table.sites()[1].counts() == &Abundance::from(&[0u64, 5, 5][..]));
    }

    #[test]
    fn every_column_a_site() {
        let text = "A\tB\n1\t2\n3\t4\n";
        let table = Reader::default().taxa(false).delimiter(TAB).read(text.as_bytes()).unwrap();
        assert!(table.labels() == vec!["A", "B"]);
        assert!(table.otus() == 2);
    }

    #[test]
    fn trailing_blanks_shorten_column() {
        let text = "otu,A,B\n1,1,1\n2,2,\n";
        let table = Reader::default().read(text.as_bytes()).unwrap();
        assert!(table.sites()[0].counts().len() == 2);
        assert!(table.sites()[1].counts().len() == 1);
        assert!(matches!(table.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn inner_blank_is_malformed() {
        let text = "otu,A\n1,\n2,3\n";
        let err = Reader::default().read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedTable(ref s) if s.contains("row 2, column 2 (A)")));
    }

    #[test]
    fn non_numeric_is_malformed() {
        let text = "otu,A\n1,lots\n";
        let err = Reader::default().read(text.as_bytes()).unwrap_err();
        assert!(err == Error::MalformedTable("row 2, column 2 (A): not a number: \"lots\"".to_string()));
    }

    #[test]
    fn digit_separator_is_malformed() {
        let text = "otu,A\n1,1_000\n";
        let err = Reader::default().read(text.as_bytes()).unwrap_err();
        assert!(err == Error::MalformedTable("row 2, column 2 (A): not a number: \"1_000\"".to_string()));
    }

    #[test]
    fn overlong_count_is_malformed() {
        let text = "otu,A\n1,0.123456789012345678901234567891234\n";
        let err = Reader::default().read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedTable(ref s) if s.contains("more than 28 significant digits")));
    }

    #[test]
    fn ragged_record_is_malformed() {
        let text = "otu,A,B\n1,2\n";
        assert!(matches!(Reader::default().read(text.as_bytes()), Err(Error::MalformedTable(_))));
    }

    #[test]
    fn empty_source_is_malformed() {
        assert!(matches!(Reader::default().read("".as_bytes()), Err(Error::MalformedTable(_))));
        assert!(matches!(Reader::default().read("otu\n1\n".as_bytes()), Err(Error::MalformedTable(_))));
    }

    #[test]
    fn unlabeled_column_is_malformed() {
        let text = "otu,,B\n1,2,3\n";
        assert!(matches!(Reader::default().read(text.as_bytes()), Err(Error::MalformedTable(_))));
    }

    #[test]
    fn delimiter_from_extension() {
        assert!(delimiter(Path::new("otus.tsv")) == TAB);
        assert!(delimiter(Path::new("otus.TAB")) == TAB);
        assert!(delimiter(Path::new("otus.csv")) == COMMA);
        assert!(delimiter(Path::new("otus")) == COMMA);
    }
}
