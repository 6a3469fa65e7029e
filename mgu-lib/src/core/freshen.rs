/*!

Freshening: replace every variable in a term, free or bound, with a freshly allocated one,
preserving internal sharing. Two occurrences of one original variable map to the same fresh
variable, and a bound variable's replacement is allocated already bound (via `new_var`) to the
freshened reading of its binding.

`freshen_all` threads one visited record through the whole collection, which is what preserves
aliasing *across* terms; calling `freshen` once per term would not.

*/

use std::rc::Rc;

use mgu_abs::HashMap;

use crate::{
  api::{failure::Failure, store::BindingStore, term::Term, term_shape::TermShape},
  core::{prune::semi_prune, Visit},
};

pub fn freshen<S, B>(store: &mut B, t: &Term<S>) -> Result<Term<S>, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let mut visited = HashMap::new();
  freshen_step(store, &mut visited, t.clone())
}

pub fn freshen_all<S, B>(store: &mut B, terms: &[Term<S>]) -> Result<Vec<Term<S>>, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let mut visited = HashMap::new();
  terms
      .iter()
      .map(|t| freshen_step(store, &mut visited, t.clone()))
      .collect()
}

fn freshen_step<S, B>(
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
        freshen_step(store, visited, child)
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
        None => {
          let replacement = Term::Var(store.fresh_var()?);
          visited.insert(v.index(), Visit::Done(replacement.clone()));
          Ok(replacement)
        }
        Some(bound) => {
          visited.insert(v.index(), Visit::InProgress(bound.clone()));
          let freshened = freshen_step(store, visited, bound)?;
          let replacement = Term::Var(store.new_var(freshened)?);
          visited.insert(v.index(), Visit::Done(replacement.clone()));
          Ok(replacement)
        }
      }
    }
  }
}
