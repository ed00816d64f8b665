//! Registry of the structures making up a grammar.
//!
//! Structures find each other through `sub` references, so matching never
//! needs a registry. It exists for tooling: documentation output, the cross
//! reference graph and grammar validation (see `analysis`).

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::error::GrammarError;
use crate::structure::Structure;

/// Structures keyed by name, in registration order.
#[derive(Default)]
pub struct GrammarRegistry {
    structures: IndexMap<&'static str, &'static dyn Structure>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of structures, rejecting duplicate names.
    pub fn from_structures(
        structures: impl IntoIterator<Item = &'static dyn Structure>,
    ) -> Result<Self, GrammarError> {
        let mut registry = Self::new();
        for structure in structures {
            registry.register(structure)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, structure: &'static dyn Structure) -> Result<(), GrammarError> {
        let name = structure.name();
        if self.structures.contains_key(name) {
            return Err(GrammarError::DuplicateStructure(name));
        }
        self.structures.insert(name, structure);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&'static dyn Structure> {
        self.structures.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.structures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.structures.keys().copied()
    }

    pub fn structures(&self) -> impl Iterator<Item = &'static dyn Structure> + '_ {
        self.structures.values().copied()
    }

    /// Qualified names each structure references, deduplicated, in grammar order.
    pub fn dependencies(&self) -> IndexMap<&'static str, IndexSet<String>> {
        self.structures
            .iter()
            .map(|(name, structure)| (*name, structure.matcher().using().into_iter().collect()))
            .collect()
    }

    /// Structures referencing `name` through `sub`, in registration order.
    pub fn dependents(&self, name: &str) -> Vec<&'static str> {
        let target = format!("structure/{name}");
        self.structures
            .iter()
            .filter(|(_, structure)| structure.matcher().using().contains(&target))
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn railroad(&self, name: &str) -> Option<String> {
        self.get(name).map(|s| s.matcher().to_railroad())
    }

    /// `Name ::= expr` for one structure.
    pub fn ebnf_rule(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|s| format!("{} ::= {}", s.name(), s.matcher().to_ebnf()))
    }

    /// The whole grammar as EBNF, one rule per line.
    pub fn ebnf(&self) -> String {
        self.structures
            .values()
            .map(|s| format!("{} ::= {}", s.name(), s.matcher().to_ebnf()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Debug for GrammarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.structures.keys()).finish()
    }
}
