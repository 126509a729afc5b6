//! Plain-text output of collected diagnostics.

use std::fmt::{self, Write};

use super::Diagnostics;

/// Renders diagnostics one per line, optionally tagged with their origin.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    origin: Option<&'d str>,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            origin: None,
        }
    }

    /// Tag each line with where it came from, usually the source file.
    pub fn origin(mut self, origin: &'d str) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        let mut sep = "";
        for diag in self.diagnostics {
            w.write_str(sep)?;
            sep = "\n";
            match self.origin {
                Some(origin) => write!(w, "{origin}: {diag}")?,
                None => write!(w, "{diag}")?,
            }
        }
        Ok(())
    }
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }
}
