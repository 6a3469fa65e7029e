/*!

Subsumption: does there exist a substitution making the left term equal to the right one without
refining the right? The walk is the one-sided cousin of unification: only left variables may
pick up bindings, any attempt to refine the right side answers `false`, and a constructor
disagreement is `false` rather than a `TermMismatch`.

Like unification, a successful (or failed) run leaves its bindings in the store; a host that
probes with `subsumes` and must not keep the bindings clones the store first.

*/

use crate::{
  api::{failure::Failure, store::BindingStore, term::Term, term_shape::TermShape},
  core::{prune::semi_prune, VisitedMap},
};

pub fn subsumes<S, B>(store: &mut B, left: &Term<S>, right: &Term<S>) -> Result<bool, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let mut visited = VisitedMap::new();
  subsumes_step(store, &mut visited, left.clone(), right.clone())
}

fn subsumes_step<S, B>(
  store: &mut B,
  visited: &mut VisitedMap<S>,
  left: Term<S>,
  right: Term<S>,
) -> Result<bool, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let left = semi_prune(store, left);
  let right = semi_prune(store, right);

  match (left, right) {
    (Term::Var(vl), Term::Var(vr)) => {
      if vl == vr {
        return Ok(true);
      }

      match (store.lookup_var(vl), store.lookup_var(vr)) {
        (None, _) => {
          store.bind_var(vl, Term::Var(vr));
          Ok(true)
        }
        // The right side would have to be refined to match.
        (Some(_), None) => Ok(false),
        (Some(bl), Some(br)) => {
          visited.seen_as(vl, bl.clone())?;
          let outcome = match visited.seen_as(vr, br.clone()) {
            Ok(()) => {
              let matched = subsumes_step(store, visited, bl, br);
              visited.forget(vr);
              matched
            }
            Err(e) => Err(e),
          };
          visited.forget(vl);
          outcome
        }
      }
    }

    (Term::Var(vl), right @ Term::Node(_)) => match store.lookup_var(vl) {
      None => {
        store.bind_var(vl, right);
        Ok(true)
      }
      Some(bound) => {
        visited.seen_as(vl, bound.clone())?;
        let outcome = subsumes_step(store, visited, bound, right);
        visited.forget(vl);
        outcome
      }
    },

    // The left side is strictly more defined than the right.
    (Term::Node(_), Term::Var(_)) => Ok(false),

    (Term::Node(ll), Term::Node(lr)) => match S::zip_match(&*ll, &*lr) {
      None => Ok(false),
      Some(paired) => {
        // Conjoin the children; `Err(None)` is the "some child answered false" short circuit,
        // `Err(Some(_))` a genuine failure.
        let conjoined: Result<_, Option<Failure<S>>> = S::traverse(paired, |(l, r)| {
          match subsumes_step(store, visited, l, r) {
            Ok(true) => Ok(()),
            Ok(false) => Err(None),
            Err(e) => Err(Some(e)),
          }
        });

        match conjoined {
          Ok(_) => Ok(true),
          Err(None) => Ok(false),
          Err(Some(failure)) => Err(failure),
        }
      }
    },
  }
}
