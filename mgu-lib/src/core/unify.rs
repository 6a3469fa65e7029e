/*!

Unification. Two variants with the same case analysis:

- `unify` carries a per-call visited set. A variable is recorded only while the walk is inside
  its binding (the record is rolled back when the recursive call returns, on success and failure
  alike), so a revisit within one spine is exactly a cycle this unification would construct.
  Cycles that merely *would exist later* are not chased: binding a variable into itself through
  a node succeeds here and surfaces as `OccursIn` when `apply_bindings` or a later walk reaches
  it. This avoids re-traversing bound terms on every bind.

- `unify_occurs` runs an occurs check on every bind instead, failing eagerly. It needs no
  visited set: the store's binding graph is acyclic on entry and every accepted bind keeps it
  that way.

Both practice aggressive opportunistic observable sharing: after unifying the bindings of two
bound variables, both chains are collapsed onto the computed term, so a later equality or
unification resolves either side in one hop after pruning.

On success the returned term is equivalent to both inputs under the updated store. Bindings
committed before a failure are not rolled back; snapshot the store when that matters.

*/

use mgu_abs::{debug, trace};

use crate::{
  api::{failure::Failure, store::BindingStore, term::Term, term_shape::TermShape},
  core::{occurs::acyclic_bind_var, prune::semi_prune, VisitedMap},
};

pub fn unify<S, B>(store: &mut B, left: &Term<S>, right: &Term<S>) -> Result<Term<S>, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let mut visited = VisitedMap::new();
  unify_step(store, &mut visited, left.clone(), right.clone())
}

fn unify_step<S, B>(
  store: &mut B,
  visited: &mut VisitedMap<S>,
  left: Term<S>,
  right: Term<S>,
) -> Result<Term<S>, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let left = semi_prune(store, left);
  let right = semi_prune(store, right);

  match (left, right) {
    (Term::Var(vl), Term::Var(vr)) => {
      if vl == vr {
        return Ok(Term::Var(vr));
      }

      match (store.lookup_var(vl), store.lookup_var(vr)) {
        (None, None) | (None, Some(_)) => {
          trace!("unify: binding {} to {}", vl, vr);
          store.bind_var(vl, Term::Var(vr));
          Ok(Term::Var(vr))
        }
        (Some(_), None) => {
          trace!("unify: binding {} to {}", vr, vl);
          store.bind_var(vr, Term::Var(vl));
          Ok(Term::Var(vl))
        }
        (Some(bl), Some(br)) => {
          // Record both variables for the duration of the descent into their bindings.
          visited.seen_as(vl, bl.clone())?;
          let outcome = match visited.seen_as(vr, br.clone()) {
            Ok(()) => {
              let unified = unify_step(store, visited, bl, br);
              visited.forget(vr);
              unified
            }
            Err(e) => Err(e),
          };
          visited.forget(vl);

          // Collapse both chains onto the unified term.
          let unified = outcome?;
          store.bind_var(vr, unified);
          store.bind_var(vl, Term::Var(vr));
          Ok(Term::Var(vr))
        }
      }
    }

    (Term::Var(vl), right @ Term::Node(_)) => match store.lookup_var(vl) {
      None => {
        store.bind_var(vl, right);
        Ok(Term::Var(vl))
      }
      Some(bound) => {
        visited.seen_as(vl, bound.clone())?;
        let outcome = unify_step(store, visited, bound, right);
        visited.forget(vl);

        store.bind_var(vl, outcome?);
        Ok(Term::Var(vl))
      }
    },

    (left @ Term::Node(_), Term::Var(vr)) => match store.lookup_var(vr) {
      None => {
        store.bind_var(vr, left);
        Ok(Term::Var(vr))
      }
      Some(bound) => {
        visited.seen_as(vr, bound.clone())?;
        let outcome = unify_step(store, visited, left, bound);
        visited.forget(vr);

        store.bind_var(vr, outcome?);
        Ok(Term::Var(vr))
      }
    },

    (Term::Node(ll), Term::Node(lr)) => match S::zip_match(&*ll, &*lr) {
      None => {
        debug!("unify: constructor mismatch");
        Err(Failure::TermMismatch(ll, lr))
      }
      Some(paired) => {
        let unified = S::traverse(paired, |(l, r)| unify_step(store, visited, l, r))?;
        Ok(Term::node(unified))
      }
    },
  }
}

/// `unify` with an eager occurs check mediating every bind.
pub fn unify_occurs<S, B>(
  store: &mut B,
  left: &Term<S>,
  right: &Term<S>,
) -> Result<Term<S>, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  unify_occurs_step(store, left.clone(), right.clone())
}

fn unify_occurs_step<S, B>(
  store: &mut B,
  left: Term<S>,
  right: Term<S>,
) -> Result<Term<S>, Failure<S>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let left = semi_prune(store, left);
  let right = semi_prune(store, right);

  match (left, right) {
    (Term::Var(vl), Term::Var(vr)) => {
      if vl == vr {
        return Ok(Term::Var(vr));
      }

      match (store.lookup_var(vl), store.lookup_var(vr)) {
        (None, None) | (None, Some(_)) => {
          acyclic_bind_var(store, vl, Term::Var(vr))?;
          Ok(Term::Var(vr))
        }
        (Some(_), None) => {
          acyclic_bind_var(store, vr, Term::Var(vl))?;
          Ok(Term::Var(vl))
        }
        (Some(bl), Some(br)) => {
          let unified = unify_occurs_step(store, bl, br)?;
          acyclic_bind_var(store, vr, unified)?;
          acyclic_bind_var(store, vl, Term::Var(vr))?;
          Ok(Term::Var(vr))
        }
      }
    }

    (Term::Var(vl), right @ Term::Node(_)) => match store.lookup_var(vl) {
      None => {
        acyclic_bind_var(store, vl, right)?;
        Ok(Term::Var(vl))
      }
      Some(bound) => {
        let unified = unify_occurs_step(store, bound, right)?;
        acyclic_bind_var(store, vl, unified)?;
        Ok(Term::Var(vl))
      }
    },

    (left @ Term::Node(_), Term::Var(vr)) => match store.lookup_var(vr) {
      None => {
        acyclic_bind_var(store, vr, left)?;
        Ok(Term::Var(vr))
      }
      Some(bound) => {
        let unified = unify_occurs_step(store, left, bound)?;
        acyclic_bind_var(store, vr, unified)?;
        Ok(Term::Var(vr))
      }
    },

    (Term::Node(ll), Term::Node(lr)) => match S::zip_match(&*ll, &*lr) {
      None => Err(Failure::TermMismatch(ll, lr)),
      Some(paired) => {
        let unified = S::traverse(paired, |(l, r)| unify_occurs_step(store, l, r))?;
        Ok(Term::node(unified))
      }
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    api::Variable,
    core::{
      apply::apply_bindings,
      equality::equals,
      free_vars::get_free_vars,
      tests::{constant, pair, store, var},
    },
  };

  #[test]
  fn binds_a_free_variable_to_a_constant() {
    let mut s = store();
    let unified = unify(&mut s, &var(0), &constant("a")).unwrap();

    assert_eq!(s.lookup_var(Variable::new(0)), Some(constant("a")));
    assert!(equals(&mut s, &unified, &constant("a")));
  }

  #[test]
  fn aliases_two_free_variables_left_to_right() {
    let mut s = store();
    unify(&mut s, &var(0), &var(1)).unwrap();

    assert_eq!(s.lookup_var(Variable::new(0)), Some(var(1)));
    assert!(s.lookup_var(Variable::new(1)).is_none());
    assert!(equals(&mut s, &var(0), &var(1)));
  }

  #[test]
  fn constructor_mismatch_is_reported() {
    let mut s = store();
    let outcome = unify(&mut s, &constant("a"), &pair(var(0), var(1)));

    assert!(matches!(outcome, Err(Failure::TermMismatch(_, _))));
  }

  #[test]
  fn arity_mismatch_is_reported() {
    let mut s = store();
    let one = Term::node(crate::api::free_theory::FreeTerm::function("f", [var(0)]));
    let two = Term::node(crate::api::free_theory::FreeTerm::function(
      "f",
      [var(0), var(1)],
    ));

    assert!(matches!(unify(&mut s, &one, &two), Err(Failure::TermMismatch(_, _))));
  }

  #[test]
  fn default_variant_defers_the_occurs_failure() {
    let mut s = store();
    // unify(x₀, pair(x₀, a)) succeeds, leaving a cyclic binding behind ...
    unify(&mut s, &var(0), &pair(var(0), constant("a"))).unwrap();

    // ... which the next full walk reports.
    assert!(matches!(
      apply_bindings(&mut s, &var(0)),
      Err(Failure::OccursIn(v, _)) if v == Variable::new(0)
    ));
  }

  #[test]
  fn eager_variant_fails_up_front() {
    let mut s = store();
    let outcome = unify_occurs(&mut s, &var(0), &pair(var(0), constant("a")));

    assert!(matches!(outcome, Err(Failure::OccursIn(v, _)) if v == Variable::new(0)));
    // And the offending bind was never committed.
    assert!(s.lookup_var(Variable::new(0)).is_none());
  }

  #[test]
  fn sharing_after_unify() {
    let mut s = store();
    unify(
      &mut s,
      &pair(var(0), var(0)),
      &pair(constant("a"), var(1)),
    )
    .unwrap();

    assert_eq!(apply_bindings(&mut s, &var(0)).unwrap(), constant("a"));
    assert_eq!(apply_bindings(&mut s, &var(1)).unwrap(), constant("a"));
  }

  #[test]
  fn unification_implies_equality() {
    let mut s = store();
    let left = pair(var(0), pair(var(1), constant("a")));
    let right = pair(constant("b"), pair(var(2), var(3)));

    unify(&mut s, &left, &right).unwrap();
    assert!(equals(&mut s, &left, &right));
  }

  #[test]
  fn the_unifier_is_most_general() {
    let mut s = store();
    // unify(pair(x₀, x₁), pair(x₁, x₂)) must only alias; everything stays refinable.
    unify(&mut s, &pair(var(0), var(1)), &pair(var(1), var(2))).unwrap();

    let free = get_free_vars(&s, &pair(var(0), var(1)));
    assert_eq!(free, vec![Variable::new(2)]);

    // All three variables now denote the same still-free variable.
    assert_eq!(apply_bindings(&mut s, &var(0)).unwrap(), var(2));
    assert_eq!(apply_bindings(&mut s, &var(1)).unwrap(), var(2));

    // And x₂ can still be refined afterwards.
    unify(&mut s, &var(2), &constant("a")).unwrap();
    assert_eq!(apply_bindings(&mut s, &var(0)).unwrap(), constant("a"));
  }

  #[test]
  fn symmetric_calls_agree_on_resolved_terms() {
    let left = pair(var(0), constant("a"));
    let right = pair(var(1), var(1));

    let mut s1 = store();
    unify(&mut s1, &left, &right).unwrap();
    let mut s2 = store();
    unify(&mut s2, &right, &left).unwrap();

    for t in [&left, &right] {
      assert_eq!(
        apply_bindings(&mut s1, t).unwrap(),
        apply_bindings(&mut s2, t).unwrap()
      );
    }
  }

  #[test]
  fn unifying_bound_variables_collapses_both_chains() {
    let mut s = store();
    s.bind_var(Variable::new(0), pair(var(2), constant("a")));
    s.bind_var(Variable::new(1), pair(constant("b"), var(3)));

    unify(&mut s, &var(0), &var(1)).unwrap();

    // One hop after pruning: x₀ points at x₁, x₁ at the unified term.
    assert_eq!(s.lookup_var(Variable::new(0)), Some(var(1)));
    assert_eq!(
      apply_bindings(&mut s, &var(1)).unwrap(),
      pair(constant("b"), constant("a"))
    );
  }
}
