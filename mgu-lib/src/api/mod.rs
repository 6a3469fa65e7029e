/*!

The public API of the library.

*/

pub mod failure;
pub mod free_theory;
pub mod store;
pub mod term;
pub mod term_shape;
pub mod variable;

pub use failure::Failure;
pub use store::{BindingStore, RankedCell};
pub use term::Term;
pub use term_shape::{Layer, TermShape};
pub use variable::Variable;

// Reexports to flatten the engine operations out of `core`.
pub use crate::core::{
  apply::{apply_bindings, apply_bindings_all},
  equality::{equals, equiv},
  free_vars::{get_free_vars, get_free_vars_all},
  freshen::{freshen, freshen_all},
  occurs::{acyclic_bind_var, occurs_in},
  prune::{full_prune, semi_prune},
  store::IntBindingStore,
  subsume::subsumes,
  unify::{unify, unify_occurs},
};
