use crate::engine::Engine;
use crate::violation::{Diagnostic, ViolationKind};
use std::env;
use std::path::Path;

pub struct Project {
    pub project_root: String,
}

impl Project {
    pub fn from_path(absolute_path: &str) -> Project {
        Project {
            project_root: absolute_path.to_string(),
        }
    }

    pub fn new() -> Project {
        let cargo_manifest_dir =
            env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is not set");

        Project {
            project_root: cargo_manifest_dir,
        }
    }

    /// Creates a Project from a path relative to the given file.
    pub fn from_relative_path(current_file: &str, relative_path: &str) -> Project {
        let current_dir = Path::new(current_file)
            .parent()
            .expect("Failed to get parent directory");

        let derived_path = current_dir.join(relative_path);

        let absolute_path = derived_path.canonicalize().unwrap_or_else(|e| {
            panic!(
                "Failed to resolve absolute path:\n\
                 - Current file: '{}'\n\
                 - Relative path: '{}'\n\
                 - Derived path (before resolving): '{}'\n\
                 Cause: {}",
                current_file,
                relative_path,
                derived_path.display(),
                e
            )
        });

        Project {
            project_root: absolute_path
                .to_str()
                .expect("Failed to convert path to string")
                .to_string(),
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new()
    }
}

/// Selection of layering rules to enforce. The rule table itself is fixed;
/// this only filters which findings are reported.
pub struct HexagonalRules {
    kinds: Vec<ViolationKind>,
}

impl HexagonalRules {
    pub fn all() -> Self {
        Self {
            kinds: ViolationKind::ALL.to_vec(),
        }
    }

    pub fn only(kinds: &[ViolationKind]) -> Self {
        Self {
            kinds: kinds.to_vec(),
        }
    }

    pub(crate) fn kinds(&self) -> &[ViolationKind] {
        &self.kinds
    }
}

pub struct Hexagonal {
    project: Project,
    baseline: usize,
}

impl Hexagonal {
    pub fn init_logger() {
        let _ = env_logger::builder().is_test(false).try_init();
    }

    pub fn ensure_that(project: Project) -> Hexagonal {
        Hexagonal {
            project,
            baseline: 0,
        }
    }

    pub fn with_baseline(self, baseline: usize) -> Self {
        Self { baseline, ..self }
    }

    pub fn complies_with(
        &mut self,
        rules: HexagonalRules,
    ) -> Result<Vec<Diagnostic>, Vec<Diagnostic>> {
        let diagnostics =
            Engine::new(self.project.project_root.as_str(), rules.kinds()).get_diagnostics();

        if diagnostics.len() <= self.baseline {
            Ok(diagnostics)
        } else {
            Err(diagnostics)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_all_enables_every_kind() {
        let rules = HexagonalRules::all();

        assert_eq!(rules.kinds().len(), 4);
    }

    #[test]
    fn test_rules_only_keeps_the_selection() {
        let rules = HexagonalRules::only(&[ViolationKind::PortIncludesLogic]);

        assert_eq!(rules.kinds(), &[ViolationKind::PortIncludesLogic]);
    }
}
