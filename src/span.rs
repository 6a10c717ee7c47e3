/// Inline formatting applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of inline text with a single formatting kind.
///
/// `target` is set exactly when the kind is [`SpanKind::Link`] or
/// [`SpanKind::Image`]; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    kind: SpanKind,
    target: Option<String>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Italic, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Code, text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    /// Span of a kind that carries no target.
    ///
    /// # Panics
    ///
    /// Panics for [`SpanKind::Link`] and [`SpanKind::Image`].
    pub(crate) fn styled(kind: SpanKind, text: impl Into<String>) -> Self {
        assert!(
            !matches!(kind, SpanKind::Link | SpanKind::Image),
            "{kind:?} spans need a target"
        );
        Self {
            text: text.into(),
            kind,
            target: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// URL of a link or image.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
