use std::ops::Range;

/// Diagnostic kinds, parse findings first, then grammar findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Statement stream does not fit the grammar
    SyntaxError,
    UnexpectedStatement,

    // Grammar validation
    UndefinedStructure,
    UnregisteredStructure,
    UnreachableStructure,
    NullableRepetition,
    LeftRecursion,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnregisteredStructure | Self::UnreachableStructure => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::NullableRepetition => {
                Some("every repetition body must consume at least one statement")
            }
            Self::LeftRecursion => {
                Some("recursive references must consume a statement before recursing")
            }
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::SyntaxError => "syntax error",
            Self::UnexpectedStatement => "unexpected statement",
            Self::UndefinedStructure => "undefined structure",
            Self::UnregisteredStructure => "structure is not registered",
            Self::UnreachableStructure => "unreachable structure",
            Self::NullableRepetition => "repetition can match without consuming a statement",
            Self::LeftRecursion => "left recursion",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::SyntaxError => "{}".to_string(),
            Self::UnexpectedStatement => "unexpected `{}` statement".to_string(),
            Self::UndefinedStructure => "`{}` is not registered".to_string(),
            Self::UnregisteredStructure => {
                "`{}` is referenced but not registered".to_string()
            }
            Self::UnreachableStructure => "`{}` is not reachable from the root".to_string(),
            Self::NullableRepetition => {
                "repetition in `{}` can match without consuming a statement".to_string()
            }
            Self::LeftRecursion => "left recursion: {}".to_string(),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: Range<usize>,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Source range of the offending statement. Grammar findings have none.
    pub(crate) range: Option<Range<usize>>,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: Option<Range<usize>>) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_string(),
            related: Vec::new(),
            hints: kind.default_hint().map(str::to_string).into_iter().collect(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> Option<Range<usize>> {
        self.range.clone()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.range {
            Some(range) => write!(
                f,
                "{} at {}..{}: {}",
                self.severity(),
                range.start,
                range.end,
                self.message
            )?,
            None => write!(f, "{}: {}", self.severity(), self.message)?,
        }
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message, related.range.start, related.range.end
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
