use ansi_term::Color::RGB;
use ansi_term::Style;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Line/column span of the syntax node that triggered a finding.
///
/// Opaque to the rule evaluator: it is carried through unchanged into the
/// violation record so the reporting side can point at the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            line,
            column,
            end_line,
            end_column,
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The four fixed layering rules a hexagonal codebase can break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    #[serde(rename = "core-imports-adapters")]
    CoreImportsAdapter,
    #[serde(rename = "adapter-imports-adapters")]
    AdapterImportsAdapter,
    #[serde(rename = "adapter-imports-core")]
    AdapterImportsCore,
    #[serde(rename = "port-includes-logic")]
    PortIncludesLogic,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 4] = [
        ViolationKind::CoreImportsAdapter,
        ViolationKind::AdapterImportsAdapter,
        ViolationKind::AdapterImportsCore,
        ViolationKind::PortIncludesLogic,
    ];

    /// Stable diagnostic code, suitable for baselines and suppression lists.
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::CoreImportsAdapter => "E6601",
            ViolationKind::AdapterImportsAdapter => "E6602",
            ViolationKind::AdapterImportsCore => "W6603",
            ViolationKind::PortIncludesLogic => "R6604",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViolationKind::CoreImportsAdapter => "core-imports-adapters",
            ViolationKind::AdapterImportsAdapter => "adapter-imports-adapters",
            ViolationKind::AdapterImportsCore => "adapter-imports-core",
            ViolationKind::PortIncludesLogic => "port-includes-logic",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ViolationKind::CoreImportsAdapter => {
                "Core module must not import from an adapter module"
            }
            ViolationKind::AdapterImportsAdapter => {
                "Adapter module must not import from another adapter module"
            }
            ViolationKind::AdapterImportsCore => {
                "Adapter module should not import from the core module except for ports"
            }
            ViolationKind::PortIncludesLogic => "Ports modules should not include any logic",
        }
    }
}

/// A single advisory finding: which rule fired and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub span: Span,
}

impl Violation {
    pub fn new(kind: ViolationKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// A violation located in a concrete source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub violation: Violation,
}

impl Diagnostic {
    pub fn new(file: String, violation: Violation) -> Self {
        Self { file, violation }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let red = Style::new().fg(RGB(255, 0, 0)).bold();
        write!(
            f,
            "{} {}: {} in file://{}:{}",
            red.paint(self.violation.kind.code()),
            self.violation.kind.name(),
            self.violation.kind.message(),
            self.file,
            self.violation.span
        )
    }
}
