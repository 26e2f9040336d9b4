use crate::module_path::ModulePath;
use crate::rules::{FunctionBody, ImportEdge, StatementKind};
use crate::violation::Span;
use log::error;
use std::fs;
use std::path::{Path, PathBuf};
use syn::spanned::Spanned;
use syn::visit::Visit;
use syn::{Expr, ImplItemFn, Item, ItemFn, Macro, Stmt, TraitItemFn, UseTree};

/// Import edges and function bodies extracted from a single source file.
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub imports: Vec<ImportEdge>,
    pub functions: Vec<FunctionBody>,
}

/// Reads and parses one file. Unreadable or unparseable files degrade to an
/// empty descriptor set with a logged error; an analysis run never aborts on
/// a broken file.
pub fn parse_file(path: &str, module: &ModulePath) -> ParsedFile {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read file://{}: {}", path, e);
            return ParsedFile::default();
        }
    };

    match parse_source(&content, module) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("Failed to parse file://{}: {}", path, e);
            ParsedFile::default()
        }
    }
}

pub fn parse_source(content: &str, module: &ModulePath) -> Result<ParsedFile, syn::Error> {
    let ast = syn::parse_file(content)?;
    let mut parsed = ParsedFile::default();

    for item in ast.items.iter() {
        if let Item::Use(item_use) = item {
            let span = span_of(item_use.span());
            collect_edges(
                &item_use.tree,
                module,
                String::new(),
                0,
                span,
                &mut parsed.imports,
            );
        }
    }

    let mut collector = FunctionCollector {
        module,
        functions: &mut parsed.functions,
    };
    collector.visit_file(&ast);

    Ok(parsed)
}

/// Flattens a `use` tree into one edge per imported leaf.
///
/// Leading `super` segments raise the relative level instead of becoming
/// path segments; the actual truncation is `ModulePath::resolve`'s job.
fn collect_edges(
    tree: &UseTree,
    module: &ModulePath,
    prefix: String,
    level: usize,
    span: Span,
    edges: &mut Vec<ImportEdge>,
) {
    match tree {
        UseTree::Path(path) => {
            let ident = path.ident.to_string();
            if prefix.is_empty() && ident == "super" {
                collect_edges(&path.tree, module, prefix, level + 1, span, edges);
            } else if prefix.is_empty() && ident == "self" {
                collect_edges(&path.tree, module, module.to_string(), level, span, edges);
            } else {
                let prefix = if prefix.is_empty() {
                    ident
                } else {
                    format!("{}::{}", prefix, ident)
                };
                collect_edges(&path.tree, module, prefix, level, span, edges);
            }
        }
        UseTree::Group(group) => {
            for item in group.items.iter() {
                collect_edges(item, module, prefix.clone(), level, span, edges);
            }
        }
        UseTree::Name(name) => {
            push_edge(module, &prefix, &name.ident.to_string(), level, span, edges);
        }
        UseTree::Rename(rename) => {
            push_edge(
                module,
                &prefix,
                &rename.ident.to_string(),
                level,
                span,
                edges,
            );
        }
        UseTree::Glob(_) => {
            // A glob depends on the whole prefixed module.
            edges.push(ImportEdge::from_raw(module.clone(), &prefix, level, span));
        }
    }
}

fn push_edge(
    module: &ModulePath,
    prefix: &str,
    ident: &str,
    level: usize,
    span: Span,
    edges: &mut Vec<ImportEdge>,
) {
    let raw = if prefix.is_empty() {
        ident.to_string()
    } else {
        format!("{}::{}", prefix, ident)
    };
    edges.push(ImportEdge::from_raw(module.clone(), &raw, level, span));
}

struct FunctionCollector<'a> {
    module: &'a ModulePath,
    functions: &'a mut Vec<FunctionBody>,
}

impl FunctionCollector<'_> {
    fn collect(&mut self, stmts: &[Stmt], span: proc_macro2::Span) {
        let statements = stmts.iter().map(statement_kind).collect();
        self.functions.push(FunctionBody::new(
            self.module.clone(),
            statements,
            span_of(span),
        ));
    }
}

impl<'ast> Visit<'ast> for FunctionCollector<'_> {
    fn visit_item_fn(&mut self, node: &'ast ItemFn) {
        self.collect(&node.block.stmts, node.sig.span());
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast ImplItemFn) {
        self.collect(&node.block.stmts, node.sig.span());
        syn::visit::visit_impl_item_fn(self, node);
    }

    fn visit_trait_item_fn(&mut self, node: &'ast TraitItemFn) {
        if let Some(block) = &node.default {
            self.collect(&block.stmts, node.sig.span());
        }
        syn::visit::visit_trait_item_fn(self, node);
    }
}

/// `todo!()` and `unimplemented!()` are the placeholder statements a port
/// contract is allowed to contain.
fn statement_kind(stmt: &Stmt) -> StatementKind {
    let placeholder = match stmt {
        Stmt::Macro(stmt_macro) => is_placeholder_macro(&stmt_macro.mac),
        Stmt::Expr(Expr::Macro(expr_macro), _) => is_placeholder_macro(&expr_macro.mac),
        _ => false,
    };

    if placeholder {
        StatementKind::Placeholder
    } else {
        StatementKind::Effect
    }
}

fn is_placeholder_macro(mac: &Macro) -> bool {
    mac.path.is_ident("todo") || mac.path.is_ident("unimplemented")
}

fn span_of(span: proc_macro2::Span) -> Span {
    let start = span.start();
    let end = span.end();
    Span::new(start.line, start.column, end.line, end.column)
}

/// Maps a file path to its module path relative to `src`.
///
/// `mod.rs` maps to its directory, crate roots (`lib.rs`, `main.rs`) map to
/// `crate`.
pub fn get_module(file_path: &str) -> Result<ModulePath, String> {
    let path = Path::new(file_path);

    let relative_path = path
        .components()
        .skip_while(|comp| comp.as_os_str() != "src")
        .skip(1)
        .collect::<PathBuf>();

    if relative_path.as_os_str().is_empty() {
        return Err(format!(
            "Failed to find module path: prefix 'src' not found in {}",
            file_path
        ));
    }

    let mut without_extension = relative_path.with_extension("");

    if without_extension.file_name() == Some("mod".as_ref()) {
        without_extension = without_extension
            .parent()
            .ok_or_else(|| format!("Failed to find parent for mod.rs in {}", file_path))?
            .to_path_buf();
    } else if without_extension.file_name() == Some("lib".as_ref())
        || without_extension.file_name() == Some("main".as_ref())
    {
        return Ok(ModulePath::parse("crate"));
    }

    let mut segments = vec!["crate".to_string()];
    segments.extend(
        without_extension
            .components()
            .filter_map(|comp| comp.as_os_str().to_str())
            .map(String::from),
    );

    Ok(ModulePath::new(segments))
}
