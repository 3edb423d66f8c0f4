//! # Civigraph Query
//!
//! Read-only pattern queries over a fact store: a small composable
//! plan algebra (basic graph patterns, join, union, optional, filter,
//! distinct), a nested-loop evaluator driven by the store indices, and
//! the analytical templates of the urban-conflict knowledge base.
//!
//! ## Example
//!
//! ```
//! use civigraph_core::model::{Fact, Resource};
//! use civigraph_query::{pattern, res, var, Plan, QueryEngine};
//! use civigraph_store::FactStore;
//!
//! let mut store = FactStore::new();
//! let knows = Resource::new("http://example.org/knows");
//! store.assert_fact(Fact::new(
//!     Resource::new("http://example.org/a"),
//!     knows.clone(),
//!     Resource::new("http://example.org/b"),
//! ));
//!
//! let plan = Plan::bgp(vec![pattern(var("who"), res(knows), var("peer"))]);
//! let rows = QueryEngine::new(&store).evaluate(&plan);
//! assert_eq!(rows.len(), 1);
//! ```

pub mod evaluator;
pub mod pattern;
pub mod templates;

pub use evaluator::{Bindings, QueryEngine};
pub use pattern::{pattern, res, var, Constraint, Operand, Plan, PatternTerm, TriplePattern};
