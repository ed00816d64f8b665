//! Grammar validation.
//!
//! Static checks over a registry, starting from a root structure:
//! - the root is registered
//! - every `sub` reference reachable from the root is registered
//! - every registered structure is reachable from the root
//! - no repetition body can succeed without consuming a statement
//! - no structure can reach itself before consuming a statement
//!
//! The last two would surface at match time as `EmptyRepetition` and
//! `RecursionLimitExceeded`; validation reports them up front.

use indexmap::{IndexMap, IndexSet};

use crate::combi::{Combi, Matcher};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::registry::GrammarRegistry;
use crate::structure::Structure;

impl Matcher {
    /// Whether this matcher can succeed without consuming a statement.
    ///
    /// `sub` never can: a structure matching nothing is rejected.
    pub fn is_nullable(&self) -> bool {
        match &self.0 {
            Combi::Sequence(items) => items.iter().all(Matcher::is_nullable),
            Combi::Alternative(items) => items.iter().any(Matcher::is_nullable),
            Combi::Optional(_) | Combi::Star(_) => true,
            Combi::Sub(_) | Combi::Statement(_) => false,
        }
    }

    /// Structures that can be entered before any statement is consumed.
    fn leading_structures(&self, out: &mut Vec<&'static dyn Structure>) {
        match &self.0 {
            Combi::Sequence(items) => {
                for item in items {
                    item.leading_structures(out);
                    if !item.is_nullable() {
                        break;
                    }
                }
            }
            Combi::Alternative(items) => {
                for item in items {
                    item.leading_structures(out);
                }
            }
            Combi::Optional(inner) | Combi::Star(inner) => inner.leading_structures(out),
            Combi::Sub(structure) => out.push(*structure),
            Combi::Statement(_) => {}
        }
    }

    fn has_nullable_repetition(&self) -> bool {
        match &self.0 {
            Combi::Sequence(items) | Combi::Alternative(items) => {
                items.iter().any(Matcher::has_nullable_repetition)
            }
            Combi::Optional(inner) => inner.has_nullable_repetition(),
            Combi::Star(body) => body.is_nullable() || body.has_nullable_repetition(),
            Combi::Sub(_) | Combi::Statement(_) => false,
        }
    }
}

impl GrammarRegistry {
    /// Validate the grammar rooted at `root`.
    pub fn validate(&self, root: &str) -> Diagnostics {
        let mut diag = Diagnostics::new();

        let Some(root_structure) = self.get(root) else {
            diag.report_grammar(DiagnosticKind::UndefinedStructure)
                .message(root)
                .emit();
            return diag;
        };

        let reachable = reachable_from(root_structure);

        for name in reachable.keys() {
            if !self.contains(name) {
                diag.report_grammar(DiagnosticKind::UnregisteredStructure)
                    .message(*name)
                    .emit();
            }
        }

        for name in self.names() {
            if !reachable.contains_key(name) {
                diag.report_grammar(DiagnosticKind::UnreachableStructure)
                    .message(name)
                    .emit();
            }
        }

        // Registered structures first, then unregistered ones found by walking.
        let mut known: IndexMap<&'static str, &'static dyn Structure> =
            self.structures().map(|s| (s.name(), s)).collect();
        for (name, structure) in &reachable {
            known.entry(*name).or_insert(*structure);
        }

        for (name, structure) in &known {
            if structure.matcher().has_nullable_repetition() {
                diag.report_grammar(DiagnosticKind::NullableRepetition)
                    .message(*name)
                    .emit();
            }
        }

        for cycle in left_recursive_cycles(&known) {
            let chain = cycle
                .iter()
                .chain(cycle.first())
                .map(|name| format!("`{name}`"))
                .collect::<Vec<_>>()
                .join(" -> ");
            diag.report_grammar(DiagnosticKind::LeftRecursion)
                .message(chain)
                .emit();
        }

        diag
    }
}

/// Structures reachable from `root` through `sub`, breadth-first, root included.
fn reachable_from(root: &'static dyn Structure) -> IndexMap<&'static str, &'static dyn Structure> {
    let mut reachable = IndexMap::new();
    reachable.insert(root.name(), root);

    let mut next = 0;
    while let Some((_, &structure)) = reachable.get_index(next) {
        let mut refs = Vec::new();
        structure.matcher().referenced_structures(&mut refs);
        for target in refs {
            reachable.entry(target.name()).or_insert(target);
        }
        next += 1;
    }

    reachable
}

/// Cycles in the "can start with" graph, each reported once.
fn left_recursive_cycles(
    structures: &IndexMap<&'static str, &'static dyn Structure>,
) -> Vec<Vec<&'static str>> {
    let adj: IndexMap<&'static str, Vec<&'static str>> = structures
        .iter()
        .map(|(name, structure)| {
            let mut leading = Vec::new();
            structure.matcher().leading_structures(&mut leading);
            let targets: IndexSet<&'static str> = leading.iter().map(|s| s.name()).collect();
            (*name, targets.into_iter().collect())
        })
        .collect();

    let mut cycles = Vec::new();
    let mut covered: IndexSet<&'static str> = IndexSet::new();

    for start in adj.keys() {
        if covered.contains(start) {
            continue;
        }
        if let Some(cycle) = CycleFinder::find(*start, &adj) {
            if cycle.iter().any(|name| covered.contains(name)) {
                continue;
            }
            covered.extend(cycle.iter().copied());
            cycles.push(cycle);
        }
    }

    cycles
}

struct CycleFinder<'a> {
    adj: &'a IndexMap<&'static str, Vec<&'static str>>,
    visited: IndexSet<&'static str>,
    on_path: IndexMap<&'static str, usize>,
    path: Vec<&'static str>,
}

impl<'a> CycleFinder<'a> {
    fn find(
        start: &'static str,
        adj: &'a IndexMap<&'static str, Vec<&'static str>>,
    ) -> Option<Vec<&'static str>> {
        let mut finder = Self {
            adj,
            visited: IndexSet::new(),
            on_path: IndexMap::new(),
            path: Vec::new(),
        };
        finder.dfs(start)
    }

    fn dfs(&mut self, current: &'static str) -> Option<Vec<&'static str>> {
        if self.visited.contains(current) {
            return None;
        }

        self.visited.insert(current);
        self.on_path.insert(current, self.path.len());
        self.path.push(current);

        if let Some(neighbors) = self.adj.get(current) {
            for target in neighbors {
                if let Some(&start_index) = self.on_path.get(target) {
                    return Some(self.path[start_index..].to_vec());
                }
                if let Some(cycle) = self.dfs(*target) {
                    return Some(cycle);
                }
            }
        }

        self.path.pop();
        self.on_path.swap_remove(current);
        None
    }
}
