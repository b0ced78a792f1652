//! Declarative model of a demo's inheritance graph.
//!
//! The Rust types in each demo module are the executable shape; a
//! [`TypeGraph`] is the same shape as data, so it can be listed, rendered,
//! serialized, and checked (see [`invariants`]).

pub mod invariants;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use invariants::validate_invariants;

/// Inheritance style a demo illustrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InheritanceStyle {
    Hierarchical,
    MultiLevel,
    Multiple,
    Single,
}

impl fmt::Display for InheritanceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hierarchical => "hierarchical",
            Self::MultiLevel => "multi-level",
            Self::Multiple => "multiple",
            Self::Single => "single",
        };
        f.write_str(label)
    }
}

/// Text field declared on a type, with the default it is initialized to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub default: String,
}

/// One declared type: immediate bases (declaration order), own fields, own
/// behaviors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub behaviors: Vec<String>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            fields: Vec::new(),
            behaviors: Vec::new(),
        }
    }

    pub fn base(mut self, name: impl Into<String>) -> Self {
        self.bases.push(name.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            default: default.into(),
        });
        self
    }

    pub fn behavior(mut self, name: impl Into<String>) -> Self {
        self.behaviors.push(name.into());
        self
    }
}

/// All types one demo program declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeGraph {
    pub program: String,
    pub style: InheritanceStyle,
    pub types: Vec<TypeDecl>,
}

impl TypeGraph {
    pub fn new(program: impl Into<String>, style: InheritanceStyle, types: Vec<TypeDecl>) -> Self {
        Self {
            program: program.into(),
            style,
            types,
        }
    }

    /// First declaration named `name`.
    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.iter().find(|decl| decl.name == name)
    }

    /// Types with no bases, in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.iter().filter(|decl| decl.bases.is_empty())
    }

    /// Transitive bases of `name`, nearest first, siblings in declaration
    /// order. Unknown names and cycles are tolerated.
    pub fn ancestors(&self, name: &str) -> Vec<&str> {
        let mut found: Vec<&str> = Vec::new();
        let mut frontier: Vec<&str> = self.immediate_bases(name);
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for base in frontier {
                if base == name || found.contains(&base) {
                    continue;
                }
                found.push(base);
                next.extend(self.immediate_bases(base));
            }
            frontier = next;
        }
        found
    }

    /// Behaviors available on `name`: inherited root-most first, following
    /// base declaration order, then its own.
    pub fn available_behaviors(&self, name: &str) -> Vec<&str> {
        self.linearize(name)
            .into_iter()
            .flat_map(|decl| decl.behaviors.iter().map(String::as_str))
            .collect()
    }

    /// Fields available on `name`, ordered like [`Self::available_behaviors`].
    pub fn available_fields(&self, name: &str) -> Vec<&FieldDecl> {
        self.linearize(name)
            .into_iter()
            .flat_map(|decl| decl.fields.iter())
            .collect()
    }

    /// Indented tree, roots first. A type with two bases appears under each.
    pub fn render_text(&self) -> String {
        let mut out = format!("{} ({})\n", self.program, self.style);
        for root in self.roots() {
            out.push_str(&describe(root));
            out.push('\n');
            let mut path = vec![root.name.as_str()];
            self.render_children(&root.name, "", &mut path, &mut out);
        }
        out
    }

    fn immediate_bases(&self, name: &str) -> Vec<&str> {
        self.get(name)
            .map(|decl| decl.bases.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Post-order walk over bases: every base before the type deriving from it.
    fn linearize(&self, name: &str) -> Vec<&TypeDecl> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        self.linearize_into(name, &mut seen, &mut order);
        order
    }

    fn linearize_into<'a>(
        &'a self,
        name: &str,
        seen: &mut HashSet<&'a str>,
        order: &mut Vec<&'a TypeDecl>,
    ) {
        let Some(decl) = self.get(name) else {
            return;
        };
        if !seen.insert(decl.name.as_str()) {
            return;
        }
        for base in &decl.bases {
            self.linearize_into(base, seen, order);
        }
        order.push(decl);
    }

    fn render_children<'a>(
        &'a self,
        name: &str,
        prefix: &str,
        path: &mut Vec<&'a str>,
        out: &mut String,
    ) {
        let children: Vec<&TypeDecl> = self
            .types
            .iter()
            .filter(|decl| decl.bases.iter().any(|base| base == name))
            .filter(|decl| !path.contains(&decl.name.as_str()))
            .collect();
        let last = children.len().saturating_sub(1);
        for (idx, child) in children.into_iter().enumerate() {
            let (branch, indent) = if idx == last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            out.push_str(&format!("{prefix}{branch}{}\n", describe(child)));
            path.push(child.name.as_str());
            self.render_children(&child.name, &format!("{prefix}{indent}"), path, out);
            path.pop();
        }
    }
}

/// `Name {field = "default"} [behavior, ...]`, omitting empty parts.
fn describe(decl: &TypeDecl) -> String {
    let mut line = decl.name.clone();
    if !decl.fields.is_empty() {
        let fields: Vec<String> = decl
            .fields
            .iter()
            .map(|field| format!("{} = {:?}", field.name, field.default))
            .collect();
        line.push_str(&format!(" {{{}}}", fields.join(", ")));
    }
    if !decl.behaviors.is_empty() {
        line.push_str(&format!(" [{}]", decl.behaviors.join(", ")));
    }
    line
}
