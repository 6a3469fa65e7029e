/*!

Visited sets for the cycle-safe traversals. Each top-level operation owns one; they are never
shared across calls.

`VisitedMap` records "this variable is on the current spine, with this witness term". The
unification and subsumption walks extend it in a locally-scoped way: record, recurse, then
`forget`, on success and failure alike, so that sibling branches start from the same set.

`Visit` is the two-state record used by `apply_bindings` and `freshen`: `InProgress` marks a
variable whose binding is currently being rebuilt (seeing it again means a cycle), `Done` caches
the finished replacement so the rebuilt output keeps the input's sharing.

*/

use mgu_abs::HashMap;

use crate::api::{failure::Failure, term::Term, term_shape::TermShape, variable::Variable};

pub(crate) struct VisitedMap<S: TermShape> {
  seen: HashMap<u32, Term<S>>,
}

impl<S: TermShape> VisitedMap<S> {
  pub fn new() -> Self {
    VisitedMap { seen: HashMap::new() }
  }

  /// Records `v` with witness `t`. If `v` is already on the spine, fails with `OccursIn`
  /// carrying the witness recorded first.
  pub fn seen_as(&mut self, v: Variable, t: Term<S>) -> Result<(), Failure<S>> {
    match self.seen.get(&v.index()) {
      Some(previous) => Err(Failure::OccursIn(v, previous.clone())),
      None => {
        self.seen.insert(v.index(), t);
        Ok(())
      }
    }
  }

  /// Rolls back a `seen_as` record. Callers only forget variables they themselves recorded.
  pub fn forget(&mut self, v: Variable) {
    self.seen.remove(&v.index());
  }
}

/// Two-state visited record for the rebuilding traversals.
pub(crate) enum Visit<S: TermShape> {
  /// The binding of this variable is being rebuilt; revisiting is a cycle.
  InProgress(Term<S>),
  /// Rebuilt already; reuse the replacement.
  Done(Term<S>),
}
