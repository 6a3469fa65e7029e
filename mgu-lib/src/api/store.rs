/*!

The binding-store interface: the only way the engine observes or mutates variables. A store
assigns each variable index at most one `RankedCell`; "mutation" through `&mut self` composes
with value-semantics snapshots (clone the store, restore on failure) for backtracking.

The rank in a cell is a weighted-path-compression hint in the union-find sense. The engine never
requires union-by-rank for correctness; `bind_var` preserves an existing rank, and the
`increment_*` operations bump it for callers that maintain the heuristic.

*/

use crate::api::{failure::Failure, term::Term, term_shape::TermShape, variable::Variable};

/// The value stored per variable index: a rank and an optional bound term. `bound == None`
/// means the variable exists but is free (allocated and left unbound, or rank-bumped).
pub struct RankedCell<S: TermShape> {
  pub rank : u32,
  pub bound: Option<Term<S>>,
}

impl<S: TermShape> RankedCell<S> {
  #[inline(always)]
  pub fn new(rank: u32, bound: Option<Term<S>>) -> Self {
    RankedCell { rank, bound }
  }
}

impl<S: TermShape> Default for RankedCell<S> {
  fn default() -> Self {
    RankedCell { rank: 0, bound: None }
  }
}

impl<S: TermShape> Clone for RankedCell<S> {
  fn clone(&self) -> Self {
    RankedCell {
      rank : self.rank,
      bound: self.bound.clone(),
    }
  }
}

impl<S: TermShape> std::fmt::Debug for RankedCell<S>
where
  S::WithChild<String>: std::fmt::Debug,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RankedCell")
        .field("rank", &self.rank)
        .field("bound", &self.bound)
        .finish()
  }
}

pub trait BindingStore<S: TermShape> {
  /// The current binding of `v`, or `None` when `v` is absent or unbound.
  fn lookup_var(&self, v: Variable) -> Option<Term<S>>;

  /// The full cell for `v`; `(rank = 0, bound = None)` when `v` is absent.
  fn lookup_rank_var(&self, v: Variable) -> RankedCell<S>;

  /// Allocates a new variable index without inserting a cell.
  fn fresh_var(&mut self) -> Result<Variable, Failure<S>>;

  /// Allocates a new variable already bound to `t`.
  fn new_var(&mut self, t: Term<S>) -> Result<Variable, Failure<S>> {
    let v = self.fresh_var()?;
    self.bind_var(v, t);
    Ok(v)
  }

  /// Sets `bound := Some(t)` for `v`, creating the cell with rank 0 when absent. An existing
  /// rank is preserved.
  fn bind_var(&mut self, v: Variable, t: Term<S>);

  /// Bumps the rank of `v` by one, leaving the binding untouched; creates `(1, None)` when
  /// absent.
  fn increment_rank(&mut self, v: Variable);

  /// Combined `bind_var` + `increment_rank` in one store update.
  fn increment_bind_var(&mut self, v: Variable, t: Term<S>);
}
