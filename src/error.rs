/// Failures raised while reading abundance tables or building matrices.
///
/// Every failure is terminal: the computation is deterministic, so there is
/// nothing to retry, and no matrix is produced once any pair fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Structurally incompatible inputs: vectors of different length,
    /// columns with differing row counts, or sums beyond decimal range.
    InvalidInput(String),
    /// Both sites in a pair have zero total abundance.
    DivisionByZero,
    /// The source could not be read as a rectangular table of counts.
    MalformedTable(String),
    /// A pairwise failure, annotated with the two sites involved.
    Pair {
        a: String,
        b: String,
        cause: Box<Error>,
    },
}

impl Error {
    /// Attaches the labels of the two sites whose comparison failed.
    pub fn between(self, a: &str, b: &str) -> Self {
        Self::Pair {
            a: a.to_string(),
            b: b.to_string(),
            cause: Box::new(self),
        }
    }
    /// The innermost failure, stripped of any site annotations.
    pub fn cause(&self) -> &Self {
        match self {
            Self::Pair { cause, .. } => cause.cause(),
            other => other,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Self::DivisionByZero => write!(f, "division by zero: total abundance is zero"),
            Self::MalformedTable(s) => write!(f, "malformed table: {}", s),
            Self::Pair { a, b, cause } => write!(f, "sites {} and {}: {}", a, b, cause),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pair { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}
