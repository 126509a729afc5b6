//! User-facing diagnostics.
//!
//! The type core reports here and carries on with a substitute value.
//! Internal consistency failures never come through this path.

mod message;
mod printer;


pub use message::{DiagnosticKind, DiagnosticMessage, Severity};
pub use printer::DiagnosticsPrinter;

/// Messages collected during one compiler pass, in report order.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<DiagnosticMessage>,
}

/// A diagnostic being put together. Nothing is recorded until `emit`.
#[must_use = "call .emit() to record the diagnostic"]
pub struct DiagnosticBuilder<'d> {
    sink: &'d mut Diagnostics,
    pending: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a diagnostic of `kind` carrying the kind's stock text.
    pub fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            pending: DiagnosticMessage::stock(kind),
            sink: self,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiagnosticMessage> {
        self.entries.iter()
    }

    /// Number of messages of one kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|m| m.kind() == kind).count()
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|m| m.is_error()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(DiagnosticMessage::is_error)
    }

    /// Move the messages of `other` to the end of this collection.
    pub fn append(&mut self, other: &mut Diagnostics) {
        self.entries.append(&mut other.entries);
    }

    /// Hand over everything reported so far, leaving this collection empty.
    pub fn take(&mut self) -> Diagnostics {
        std::mem::take(self)
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }
}

impl DiagnosticBuilder<'_> {
    /// Name what the diagnostic is about, usually the offending type.
    pub fn subject(mut self, subject: impl AsRef<str>) -> Self {
        self.pending.text = self.pending.kind.message(Some(subject.as_ref()));
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.pending.notes.push(note.into());
        self
    }

    pub fn emit(self) {
        self.sink.entries.push(self.pending);
    }
}

impl<'d> IntoIterator for &'d Diagnostics {
    type Item = &'d DiagnosticMessage;
    type IntoIter = std::slice::Iter<'d, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
