//! Grammar rules ("structures").

use crate::combi::Matcher;

/// A named grammar rule.
///
/// A structure exposes exactly one matcher for its body. Other rules refer
/// to it only through [`sub`](crate::sub), which calls [`Structure::matcher`]
/// when the reference is matched rather than when the grammar is built.
/// That indirection is what lets rules recurse into each other.
///
/// Structures are usually unit structs, referenced as `&'static dyn Structure`:
///
/// ```ignore
/// struct While;
///
/// impl Structure for While {
///     fn name(&self) -> &'static str {
///         "While"
///     }
///
///     fn matcher(&self) -> Matcher {
///         begin_end(sta(WHILE), opt(sub(&Body)), sta(END_WHILE))
///     }
/// }
/// ```
pub trait Structure: Send + Sync {
    /// Unique name, used for dumps, diagnostics and cross references.
    fn name(&self) -> &'static str;

    /// Root matcher of the rule body.
    fn matcher(&self) -> Matcher;
}

/// Cross-reference name of a structure, `structure/<Name>`.
pub fn qualified_name(structure: &dyn Structure) -> String {
    format!("structure/{}", structure.name())
}
