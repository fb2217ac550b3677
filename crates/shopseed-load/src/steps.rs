use std::fmt;

/// Per-table ingestion step. Steps run strictly in [`LoadStep::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStep {
    /// Create the destination table when it does not exist.
    EnsureTable,
    /// Remove rows left by a previous load.
    Truncate,
    /// Copy the CSV rows into the table.
    Append,
}

impl LoadStep {
    pub const ORDER: [LoadStep; 3] = [LoadStep::EnsureTable, LoadStep::Truncate, LoadStep::Append];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnsureTable => "ensure_table",
            Self::Truncate => "truncate",
            Self::Append => "append",
        }
    }
}

impl fmt::Display for LoadStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
