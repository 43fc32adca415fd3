/// One row of the dataset. Identity is positional; other source columns are
/// dropped at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub full_text: String,
    pub full_text_cleaned: String,
}

impl Record {
    pub fn new(full_text: impl Into<String>, full_text_cleaned: impl Into<String>) -> Self {
        Self {
            full_text: full_text.into(),
            full_text_cleaned: full_text_cleaned.into(),
        }
    }
}

/// The loaded dataset, in source row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The cleaned-text column, in row order. This is what the model sees.
    pub fn cleaned_texts(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.full_text_cleaned.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
