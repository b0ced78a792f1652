//! Structural invariants of a type graph.

use std::collections::{HashMap, HashSet};

use super::TypeGraph;

/// Hard cap on immediate bases per type.
pub const MAX_BASES: usize = 2;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Active,
    Done,
}

/// Check the invariants every demo graph must hold:
/// - Type names non-empty and unique
/// - Behavior names unique within a type
/// - Bases known, not the type itself, listed once, at most [`MAX_BASES`]
/// - Base relation acyclic
/// - Bases of one type provide disjoint behavior names
pub fn validate_invariants(graph: &TypeGraph) -> Vec<String> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (idx, decl) in graph.types.iter().enumerate() {
        if decl.name.trim().is_empty() {
            errors.push(format!("type #{idx}: name must be non-empty"));
        } else if !names.insert(decl.name.as_str()) {
            errors.push(format!("duplicate type '{}'", decl.name));
        }

        let mut behaviors = HashSet::new();
        for behavior in &decl.behaviors {
            if !behaviors.insert(behavior.as_str()) {
                errors.push(format!(
                    "{}: behavior '{}' declared more than once",
                    decl.name, behavior
                ));
            }
        }

        if decl.bases.len() > MAX_BASES {
            errors.push(format!(
                "{}: has {} bases, at most {} allowed",
                decl.name,
                decl.bases.len(),
                MAX_BASES
            ));
        }

        let mut bases = HashSet::new();
        for base in &decl.bases {
            if *base == decl.name {
                errors.push(format!("{}: cannot inherit from itself", decl.name));
            } else if graph.get(base).is_none() {
                errors.push(format!("{}: unknown base '{}'", decl.name, base));
            }
            if !bases.insert(base.as_str()) {
                errors.push(format!("{}: base '{}' listed more than once", decl.name, base));
            }
        }
    }

    errors.extend(find_cycles(graph));
    errors.extend(find_behavior_conflicts(graph));
    errors
}

fn find_cycles(graph: &TypeGraph) -> Vec<String> {
    let mut state = HashMap::new();
    let mut stack = Vec::new();
    let mut errors = Vec::new();
    for decl in &graph.types {
        visit(graph, &decl.name, &mut state, &mut stack, &mut errors);
    }
    errors
}

fn visit<'a>(
    graph: &'a TypeGraph,
    name: &'a str,
    state: &mut HashMap<&'a str, Visit>,
    stack: &mut Vec<&'a str>,
    errors: &mut Vec<String>,
) {
    match state.get(name) {
        Some(Visit::Done) => return,
        Some(Visit::Active) => {
            let start = stack.iter().position(|entry| *entry == name).unwrap_or(0);
            let mut cycle = stack[start..].to_vec();
            cycle.push(name);
            errors.push(format!("inheritance cycle: {}", cycle.join(" -> ")));
            return;
        }
        None => {}
    }
    let Some(decl) = graph.get(name) else {
        return;
    };

    state.insert(name, Visit::Active);
    stack.push(name);
    // Self-edges are reported as their own violation.
    for base in decl.bases.iter().filter(|base| base.as_str() != name) {
        visit(graph, base, state, stack, errors);
    }
    stack.pop();
    state.insert(name, Visit::Done);
}

fn find_behavior_conflicts(graph: &TypeGraph) -> Vec<String> {
    let mut errors = Vec::new();
    for decl in graph.types.iter().filter(|decl| decl.bases.len() > 1) {
        let provided: Vec<(&str, Vec<&str>)> = decl
            .bases
            .iter()
            .filter(|base| graph.get(base).is_some() && base.as_str() != decl.name)
            .map(|base| (base.as_str(), graph.available_behaviors(base)))
            .collect();

        for (i, (left, left_behaviors)) in provided.iter().enumerate() {
            for (right, right_behaviors) in &provided[i + 1..] {
                for behavior in left_behaviors {
                    if right_behaviors.contains(behavior) {
                        errors.push(format!(
                            "{}: bases '{}' and '{}' both provide behavior '{}'",
                            decl.name, left, right, behavior
                        ));
                    }
                }
            }
        }
    }
    errors
}
