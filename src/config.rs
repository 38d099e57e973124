use crate::label::Labels;

pub const DEFAULT_LABEL_COUNT: i64 = 10;
pub const DEFAULT_LABEL_PREFIX: &str = "Label";

/// Inputs to the generator: how many labels to emit queries for, and the
/// prefix every label name starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub count: i64,
    pub prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_LABEL_COUNT,
            prefix: DEFAULT_LABEL_PREFIX.to_owned(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Number of labels that will actually be generated. A negative count is
    /// not an error, it just yields nothing.
    pub fn label_count(&self) -> u64 {
        self.count.max(0) as u64
    }

    pub fn labels(&self) -> Labels<'_> {
        Labels::new(&self.prefix, self.label_count())
    }
}
