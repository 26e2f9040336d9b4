use std::fmt::{Display, Formatter};

pub const SEPARATOR: &str = "::";

const CORE_SEGMENT: &str = "core";
const PORTS_SEGMENT: &str = "ports";
const ADAPTERS_SEGMENT: &str = "adapters";

/// A module path as an ordered sequence of segments,
/// e.g. `crate::core::application::service`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath {
    segments: Vec<String>,
}

/// Architectural regions a module path belongs to, derived from its segments.
///
/// The three membership flags are orthogonal: a pathologically named module
/// can be tagged core, port and adapter at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub is_core: bool,
    pub is_port: bool,
    pub is_adapter: bool,
    pub adapter_name: Option<String>,
}

impl ModulePath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Splits a raw path on `::`. Empty segments are dropped, so an empty
    /// string yields an empty path.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw
                .split(SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolves an imported path against this (importing) module.
    ///
    /// `level` counts how many trailing segments of the importer to drop
    /// before appending the raw path: zero means `imported_raw` is already
    /// absolute. A level larger than the importer path truncates to the
    /// empty path instead of failing.
    pub fn resolve(&self, imported_raw: &str, level: usize) -> ModulePath {
        if level == 0 {
            return ModulePath::parse(imported_raw);
        }

        let kept = self.segments.len().saturating_sub(level);
        let mut segments = self.segments[..kept].to_vec();
        segments.extend(ModulePath::parse(imported_raw).segments);

        ModulePath { segments }
    }

    /// Scans the segments once and tags the path with its regions.
    ///
    /// `adapter_name` is the segment right after the first `adapters`
    /// occurrence; when `adapters` is the last segment the name is absent.
    pub fn classify(&self) -> Region {
        let find = |target: &str| self.segments.iter().position(|s| s == target);

        let adapter_name = find(ADAPTERS_SEGMENT)
            .and_then(|index| self.segments.get(index + 1))
            .cloned();

        Region {
            is_core: find(CORE_SEGMENT).is_some(),
            is_port: find(PORTS_SEGMENT).is_some(),
            is_adapter: find(ADAPTERS_SEGMENT).is_some(),
            adapter_name,
        }
    }
}

impl Display for ModulePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join(SEPARATOR))
    }
}
