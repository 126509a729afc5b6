use c65_core::{DiagnosticKind, Diagnostics};

/// A type the user can be told about and the compiler can recover from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The type is incomplete, or an array of unspecified size.
    #[error("size of data type `{ty}` is unknown")]
    UnknownSize { ty: String },

    /// The type has no code generator class.
    #[error("illegal type: {ty}")]
    IllegalType { ty: String },
}

impl TypeError {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::UnknownSize { .. } => DiagnosticKind::SizeUnknown,
            Self::IllegalType { .. } => DiagnosticKind::IllegalType,
        }
    }

    /// Record the error as a user-facing diagnostic.
    pub fn report(&self, diagnostics: &mut Diagnostics) {
        let builder = diagnostics.report(self.kind());
        match self {
            Self::UnknownSize { ty } | Self::IllegalType { ty } => builder.subject(ty).emit(),
        }
    }
}
