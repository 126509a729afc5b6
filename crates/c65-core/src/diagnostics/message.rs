use std::fmt;

/// Diagnostic kinds raised by the type core.
///
/// Both are recoverable: the caller substitutes a safe value after
/// reporting, so one pass can surface several of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// An object size was requested for an incomplete type.
    SizeUnknown,
    /// A type reached code generation that has no code generator class.
    IllegalType,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            Self::SizeUnknown | Self::IllegalType => Severity::Error,
        }
    }

    /// Text used when no subject is named.
    pub fn stock_text(self) -> &'static str {
        match self {
            Self::SizeUnknown => "size of data type is unknown",
            Self::IllegalType => "illegal type",
        }
    }

    /// Message text, naming `subject` when given.
    pub fn message(self, subject: Option<&str>) -> String {
        match (self, subject) {
            (_, None) => self.stock_text().to_owned(),
            (Self::SizeUnknown, Some(ty)) => format!("size of data type `{ty}` is unknown"),
            (Self::IllegalType, Some(ty)) => format!("illegal type: {ty}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) text: String,
    pub(crate) notes: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn stock(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            text: kind.stock_text().to_owned(),
            notes: Vec::new(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity(), self.text)?;
        self.notes
            .iter()
            .try_for_each(|note| write!(f, " (note: {note})"))
    }
}
