use clap::ValueEnum;
use strum_macros::Display;

/// Key the ranked results are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    /// Required accuracy
    Acc,
    /// Star rating under the selected modifiers
    Stars,
    /// Required minus current accuracy (needs score comparison)
    Increase
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending
}
