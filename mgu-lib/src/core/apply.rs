/*!

`apply_bindings` produces a term in which no variable with a binding remains: the pure,
externalizable reading of a term under the current store. It clones term structure, which is the
expensive part; the `Done` half of the visited record guarantees that structure shared in the
input (or shared through aliased variables) stays shared in the output.

Preexisting cyclic bindings are detected, not looped on: revisiting a variable whose binding is
still being rebuilt fails with `OccursIn`.

*/

use std::rc::Rc;

use mgu_abs::HashMap;

use crate::{
  api::{failure::Failure, store::BindingStore, term::Term, term_shape::TermShape},
  core::{prune::semi_prune, Visit},
};

pub fn apply_bindings<S, B>(store: &mut B, t: &Term<S>) -> Result<Term<S>, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let mut visited = HashMap::new();
  apply_step(store, &mut visited, t.clone())
}

/// Applies bindings to every term in `terms` under one shared visited record, so sharing is
/// preserved across the whole collection, not just within each term.
pub fn apply_bindings_all<S, B>(store: &mut B, terms: &[Term<S>]) -> Result<Vec<Term<S>>, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let mut visited = HashMap::new();
  terms
      .iter()
      .map(|t| apply_step(store, &mut visited, t.clone()))
      .collect()
}

fn apply_step<S, B>(
  store: &mut B,
  visited: &mut HashMap<u32, Visit<S>>,
  t: Term<S>,
) -> Result<Term<S>, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let t = semi_prune(store, t);

  match t {
    Term::Node(layer) => {
      let rebuilt = S::traverse(Rc::unwrap_or_clone(layer), |child| {
        apply_step(store, visited, child)
      })?;
      Ok(Term::node(rebuilt))
    }
    Term::Var(v) => {
      match visited.get(&v.index()) {
        Some(Visit::InProgress(witness)) => {
          return Err(Failure::OccursIn(v, witness.clone()));
        }
        Some(Visit::Done(replacement)) => {
          return Ok(replacement.clone());
        }
        None => {}
      }

      match store.lookup_var(v) {
        None => Ok(Term::Var(v)),
        Some(bound) => {
          visited.insert(v.index(), Visit::InProgress(bound.clone()));
          let replacement = apply_step(store, visited, bound)?;
          visited.insert(v.index(), Visit::Done(replacement.clone()));
          Ok(replacement)
        }
      }
    }
  }
}
