use std::path::PathBuf;

/// Outcome of one item in a batch run
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// Item was rendered to the given path
    Rendered(PathBuf),
    /// Item was skipped; the reason is a human-readable diagnostic
    Skipped(String),
}

/// Per-item results of a batch run, collected while processing and
/// surfaced once at the end instead of interleaved prints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub items: Vec<(String, ItemOutcome)>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&mut self, item: impl Into<String>, path: PathBuf) {
        self.items.push((item.into(), ItemOutcome::Rendered(path)));
    }

    pub fn skipped(&mut self, item: impl Into<String>, reason: impl Into<String>) {
        self.items.push((item.into(), ItemOutcome::Skipped(reason.into())));
    }

    /// Paths of all successfully rendered items, in batch order
    pub fn rendered_paths(&self) -> Vec<PathBuf> {
        self.items
            .iter()
            .filter_map(|(_, outcome)| match outcome {
                ItemOutcome::Rendered(path) => Some(path.clone()),
                ItemOutcome::Skipped(_) => None,
            })
            .collect()
    }

    pub fn rendered_count(&self) -> usize {
        self.items
            .iter()
            .filter(|(_, o)| matches!(o, ItemOutcome::Rendered(_)))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.items.len() - self.rendered_count()
    }

    /// Merge another report's items into this one
    pub fn extend(&mut self, other: BatchReport) {
        self.items.extend(other.items);
    }
}
