mod engine;

pub mod dependency_parsing;
pub mod dsl;
pub mod module_path;
pub mod report;
pub mod rules;
pub mod violation;
