/*!

The one-shot occurs check and the occurs-checked bind built on it. Cost is proportional to the
substitution reachable from the term, which is why the default unification variant prefers the
visited-set discipline; `unify_occurs` and hosts that want immediate cycle failure pay for this
instead.

*/

use mgu_abs::debug;

use crate::{
  api::{failure::Failure, store::BindingStore, term::Term, term_shape::TermShape, variable::Variable},
  core::prune::full_prune,
};

/// Does `v` occur in `t`, following bindings? Assumes the reachable substitution is acyclic.
pub fn occurs_in<S, B>(store: &mut B, v: Variable, t: Term<S>) -> bool
where
  S: TermShape,
  B: BindingStore<S>,
{
  match full_prune(store, t) {
    Term::Var(u) => u == v,
    Term::Node(layer) => {
      // Left-to-right with the error channel as the short circuit.
      let found: Result<(), ()> = S::visit(&*layer, |child| {
        if occurs_in(store, v, child.clone()) {
          Err(())
        } else {
          Ok(())
        }
      });
      found.is_err()
    }
  }
}

/// Binds `v := t` unless doing so would close a cycle.
pub fn acyclic_bind_var<S, B>(store: &mut B, v: Variable, t: Term<S>) -> Result<(), Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  if occurs_in(store, v, t.clone()) {
    debug!("occurs check rejected binding {}", v);
    Err(Failure::OccursIn(v, t))
  } else {
    store.bind_var(v, t);
    Ok(())
  }
}
