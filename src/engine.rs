use crate::dependency_parsing::{get_module, parse_file};
use crate::rules::{evaluate_import, evaluate_port_function};
use crate::violation::{Diagnostic, Violation, ViolationKind};
use ansi_term::Color::RGB;
use ansi_term::Style;
use log::{debug, error, info};
use std::fs;
use std::path::Path;
use toml::Value;
use walkdir::WalkDir;

pub(crate) struct Engine<'a> {
    absolute_path: &'a str,
    enabled: &'a [ViolationKind],
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Engine<'a> {
    pub(crate) fn new(absolute_path: &'a str, enabled: &'a [ViolationKind]) -> Self {
        Self {
            absolute_path,
            enabled,
            diagnostics: Default::default(),
        }
    }

    pub(crate) fn get_diagnostics(mut self) -> Vec<Diagnostic> {
        if is_workspace(self.absolute_path).is_ok() {
            self.check_workspace(self.absolute_path);
        } else if is_crate(self.absolute_path).is_ok() {
            self.check_dir(self.absolute_path);
        } else {
            panic!(
                "The path '{}' is not a workspace or crate",
                self.absolute_path
            );
        }

        self.diagnostics
    }

    fn check_workspace(&mut self, workspace_path: &str) {
        let cargo_toml_path = Path::new(workspace_path).join("Cargo.toml");

        let cargo_toml_content = fs::read_to_string(&cargo_toml_path)
            .unwrap_or_else(|_| panic!("Failed to read Cargo.toml in '{}'", workspace_path));

        let parsed: Value = toml::from_str(&cargo_toml_content)
            .unwrap_or_else(|_| panic!("Failed to parse Cargo.toml in '{}'", workspace_path));

        let members = parsed
            .get("workspace")
            .and_then(|workspace| workspace.get("members"))
            .and_then(|members| members.as_array())
            .unwrap_or(&vec![])
            .iter()
            .filter_map(|member| member.as_str())
            .map(String::from)
            .collect::<Vec<String>>();

        for member in members {
            let member_path = Path::new(workspace_path).join(&member);
            if member_path.is_dir() {
                let member_path = member_path.to_string_lossy().to_string();
                if is_crate(&member_path).is_ok() {
                    self.check_dir(&member_path);
                } else {
                    debug!("Skipping invalid crate '{}'", member_path);
                }
            }
        }
    }

    fn check_dir(&mut self, dir: &str) {
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "rs") {
                self.check_file(&path.to_string_lossy());
            }
        }
    }

    fn check_file(&mut self, file: &str) {
        let module = match get_module(file) {
            Ok(module) => module,
            Err(e) => {
                debug!("Skipping {}: {}", file, e);
                return;
            }
        };

        let bold = Style::new().bold().fg(RGB(0, 255, 0));
        let orange = Style::new().bold().fg(RGB(255, 165, 0));
        info!(
            "🛠️ Checking {} as module {}",
            bold.paint(file),
            orange.paint(module.to_string())
        );

        let parsed = parse_file(file, &module);

        for edge in &parsed.imports {
            for violation in evaluate_import(edge) {
                self.record(file, violation);
            }
        }

        for body in &parsed.functions {
            for violation in evaluate_port_function(body) {
                self.record(file, violation);
            }
        }
    }

    fn record(&mut self, file: &str, violation: Violation) {
        if !self.enabled.contains(&violation.kind) {
            debug!("❌ Rule {} disabled, finding dropped", violation.kind.name());
            return;
        }

        let diagnostic = Diagnostic::new(file.to_string(), violation);
        error!("🟥 {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

fn is_crate(path: &str) -> Result<(), String> {
    let dir_path = Path::new(path);

    is_directory(path)?;

    if !dir_path.join("Cargo.toml").exists() {
        return Err(format!(
            "'{}' is not a valid Rust crate (missing Cargo.toml)",
            path
        ));
    }

    Ok(())
}

fn is_workspace(path: &str) -> Result<(), String> {
    let dir_path = Path::new(path);

    is_directory(path)?;

    let cargo_toml_path = dir_path.join("Cargo.toml");
    if !cargo_toml_path.exists() {
        return Err(format!(
            "'{}' is not a valid Rust workspace (missing Cargo.toml)",
            path
        ));
    }

    let cargo_toml_content = fs::read_to_string(cargo_toml_path)
        .map_err(|_| format!("Failed to read Cargo.toml in '{}'", path))?;
    if !cargo_toml_content.contains("[workspace]") {
        return Err(format!(
            "'{}' is not a Rust workspace (missing [workspace] key in Cargo.toml)",
            path
        ));
    }

    Ok(())
}

fn is_directory(path: &str) -> Result<(), String> {
    let path = Path::new(path);
    if !path.is_dir() {
        return Err(format!("'{}' is not a valid directory", path.display()));
    }
    Ok(())
}
