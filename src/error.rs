use thiserror::Error;

use crate::span::SpanKind;

/// Errors raised while parsing markdown or rendering the element tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A plain span holds an odd number of occurrences of an inline delimiter.
    #[error("unbalanced `{delimiter}` delimiter in {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    /// Delimiter splitting was asked to produce a kind that needs a target.
    #[error("{kind:?} spans cannot be produced by delimiter splitting")]
    UnsupportedSpanKind { kind: SpanKind },

    /// A leaf node was built or rendered without a value.
    #[error("leaf node has no value")]
    MissingValue,

    /// A parent node was built or rendered without children.
    #[error("<{tag}> node has no children")]
    MissingChildren { tag: String },

    /// Rendering was requested on a node shape that cannot render.
    #[error("base nodes cannot be rendered")]
    UnsupportedOperation,

    /// The document contains no non-blank content.
    #[error("document contains no blocks")]
    EmptyDocument,

    /// The document has no level-1 heading to use as a title.
    #[error("document has no level-1 heading")]
    NoTitle,
}
