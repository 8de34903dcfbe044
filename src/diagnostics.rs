//! Warnings produced while conforming a coordinate map.
//!
//! None of these conditions prevents a result from being produced. They
//! are collected in a [`Diagnostics`] list, which callers may inspect or
//! turn into an error.
//!
//! [`Diagnostics`]: ./struct.Diagnostics.html

use std::fmt;
use std::slice::Iter;

/// A recoverable condition found while conforming a coordinate map.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The input axes were reordered.
    InputReordered {
        /// Declared input axis names
        from: Vec<String>,
        /// Input axis names after reordering
        to: Vec<String>,
    },
    /// The output axes were reordered to follow the canonical order.
    OutputReordered {
        /// Declared output axis names
        from: Vec<String>,
        /// Output axis names after reordering
        to: Vec<String>,
    },
    /// Some axes have a negative step, which `pixdim` cannot represent.
    NegativePixdim {
        /// Positions in the reordered input axes
        positions: Vec<usize>,
        /// Names of these input axes
        names: Vec<String>,
    },
    /// Off-diagonal terms of the affine were discarded.
    InformationLoss {
        /// `(row, column)` of each discarded term in the reordered affine
        entries: Vec<(usize, usize)>,
        /// `(input axis, output axis)` names of each discarded term
        axes: Vec<(String, String)>,
    },
}

/// The kind of a diagnostic, without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// See `Diagnostic::InputReordered`.
    InputReordered,
    /// See `Diagnostic::OutputReordered`.
    OutputReordered,
    /// See `Diagnostic::NegativePixdim`.
    NegativePixdim,
    /// See `Diagnostic::InformationLoss`.
    InformationLoss,
}

impl Diagnostic {
    /// The kind of this diagnostic.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::InputReordered { .. } => DiagnosticKind::InputReordered,
            Diagnostic::OutputReordered { .. } => DiagnosticKind::OutputReordered,
            Diagnostic::NegativePixdim { .. } => DiagnosticKind::NegativePixdim,
            Diagnostic::InformationLoss { .. } => DiagnosticKind::InformationLoss,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::InputReordered { from, to } => write!(
                f,
                "input axes reordered from declared order {:?} to {:?}",
                from, to
            ),
            Diagnostic::OutputReordered { from, to } => write!(
                f,
                "output coordinate order adjusted from {:?} to {:?}",
                from, to
            ),
            Diagnostic::NegativePixdim { positions, names } => write!(
                f,
                "negative pixdim for axes {:?} (positions {:?})",
                names, positions
            ),
            Diagnostic::InformationLoss { axes, .. } => write!(
                f,
                "information loss: non-diagonal affine coupling discarded between {:?}",
                axes
            ),
        }
    }
}

/// An ordered list of diagnostics.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Create an empty list.
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Add a diagnostic to the list.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Whether no diagnostic was produced.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the diagnostics.
    pub fn iter(&self) -> Iter<Diagnostic> {
        self.0.iter()
    }

    /// The kinds of all diagnostics, in order.
    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.0.iter().map(Diagnostic::kind).collect()
    }

    /// Whether a diagnostic of the given kind is present.
    pub fn contains(&self, kind: DiagnosticKind) -> bool {
        self.0.iter().any(|d| d.kind() == kind)
    }

    /// Find the first diagnostic of the given kind.
    pub fn find(&self, kind: DiagnosticKind) -> Option<&Diagnostic> {
        self.0.iter().find(|d| d.kind() == kind)
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = ::std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(list: Vec<Diagnostic>) -> Self {
        Diagnostics(list)
    }
}
