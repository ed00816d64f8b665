//! Runtime limits for a single match.

/// Bounds on the work a match may do.
///
/// Ordered choice without memoization can re-match the same input many
/// times, and a left-recursive grammar never terminates on its own.
/// Fuel and recursion limits turn both into an `EngineError`.
#[derive(Clone, Copy, Debug)]
pub struct MatchLimits {
    /// Maximum matcher invocations (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum nesting of structure invocations (default: 512).
    pub(crate) recursion_limit: u32,
    /// Cache structure results by input position (default: off).
    pub(crate) memoize: bool,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            recursion_limit: 512,
            memoize: false,
        }
    }
}

impl MatchLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Enable the (structure, position) memo table.
    ///
    /// Only changes cost, never the outcome of a successful match.
    pub fn memoize(mut self, enabled: bool) -> Self {
        self.memoize = enabled;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }

    pub fn is_memoized(&self) -> bool {
        self.memoize
    }
}
