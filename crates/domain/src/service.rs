use log::debug;
use rand::Rng;

use crate::{Move, MoveFilter, Plan, PlanPools, catalog};

/// Facade over the immutable catalog and plan pools, exposing the two
/// operations consumed by a rendering layer: catalog filtering and plan
/// generation.
pub struct Service {
    moves: Vec<Move>,
    pools: PlanPools,
}

impl Service {
    #[must_use]
    pub fn new(moves: Vec<Move>, pools: PlanPools) -> Self {
        Self { moves, pools }
    }

    /// Creates a service backed by the built-in catalog and pools.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(catalog::MOVES.clone(), catalog::pools())
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn find_move(&self, name: &str) -> Option<&Move> {
        self.moves
            .iter()
            .find(|m| m.name.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Returns the moves matching both the query and the category, in
    /// catalog order. Recomputed on every call, never cached.
    #[must_use]
    pub fn filter(&self, query: &str, category: &str) -> Vec<&Move> {
        debug!(
            "filtering {} moves (query: {query:?}, category: {category:?})",
            self.moves.len()
        );
        MoveFilter::new(query, category).moves(self.moves.iter())
    }

    /// Generates a plan of one randomly selected exercise per category.
    /// The result is meant to replace any previously displayed plan.
    #[must_use]
    pub fn generate_plan(&self) -> Plan {
        self.generate_plan_with(&mut rand::thread_rng())
    }

    pub fn generate_plan_with(&self, rng: &mut impl Rng) -> Plan {
        debug!("generating workout plan");
        self.pools.generate(rng)
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::builtin()
    }
}
