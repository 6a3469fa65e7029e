/*!

The comparison family.

`equals` is strict structural equality under the store: two distinct *free* variables are never
equal, and a free variable is never equal to a node. Bound variables compare through their
bindings (after semi-pruning, a binding is the structure that side denotes), which is what
makes a successful unification leave its two inputs equal.

`equiv` is alpha-equivalence: it succeeds exactly when a consistent renaming of the left term's
variables onto the right term's variables makes the two equal, and returns that renaming.

Neither ever reports a failure; mismatches are `false` / `None`.

*/

use std::collections::BTreeMap;

use crate::{
  api::{store::BindingStore, term::Term, term_shape::TermShape},
  core::prune::{full_prune, semi_prune},
};

pub fn equals<S, B>(store: &mut B, left: &Term<S>, right: &Term<S>) -> bool
where
  S: TermShape,
  B: BindingStore<S>,
{
  equals_step(store, left.clone(), right.clone())
}

fn equals_step<S, B>(store: &mut B, left: Term<S>, right: Term<S>) -> bool
where
  S: TermShape,
  B: BindingStore<S>,
{
  let left = semi_prune(store, left);
  let right = semi_prune(store, right);

  match (left, right) {
    (Term::Var(vl), Term::Var(vr)) => {
      if vl == vr {
        return true;
      }
      match (store.lookup_var(vl), store.lookup_var(vr)) {
        (Some(bl), Some(br)) => equals_step(store, bl, br),
        // A free variable equals nothing but itself.
        _ => false,
      }
    }
    (Term::Var(vl), right @ Term::Node(_)) => match store.lookup_var(vl) {
      None => false,
      Some(bound) => equals_step(store, bound, right),
    },
    (left @ Term::Node(_), Term::Var(vr)) => match store.lookup_var(vr) {
      None => false,
      Some(bound) => equals_step(store, left, bound),
    },
    (Term::Node(ll), Term::Node(lr)) => match S::zip_match(&*ll, &*lr) {
      None => false,
      Some(paired) => {
        // First mismatch short-circuits the walk through the error channel.
        let all_equal: Result<(), ()> = S::visit(&paired, |(l, r)| {
          if equals_step(store, l.clone(), r.clone()) {
            Ok(())
          } else {
            Err(())
          }
        });
        all_equal.is_ok()
      }
    },
  }
}

pub fn equiv<S, B>(store: &mut B, left: &Term<S>, right: &Term<S>) -> Option<BTreeMap<u32, u32>>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let mut renaming = BTreeMap::new();

  if equiv_step(store, &mut renaming, left.clone(), right.clone()) {
    Some(renaming)
  } else {
    None
  }
}

fn equiv_step<S, B>(
  store: &mut B,
  renaming: &mut BTreeMap<u32, u32>,
  left: Term<S>,
  right: Term<S>,
) -> bool
where
  S: TermShape,
  B: BindingStore<S>,
{
  let left = full_prune(store, left);
  let right = full_prune(store, right);

  match (left, right) {
    (Term::Var(vl), Term::Var(vr)) => match renaming.get(&vl.index()) {
      Some(&mapped) => mapped == vr.index(),
      None => {
        renaming.insert(vl.index(), vr.index());
        true
      }
    },
    (Term::Node(ll), Term::Node(lr)) => match S::zip_match(&*ll, &*lr) {
      None => false,
      Some(paired) => {
        let all_equiv: Result<(), ()> = S::visit(&paired, |(l, r)| {
          if equiv_step(store, renaming, l.clone(), r.clone()) {
            Ok(())
          } else {
            Err(())
          }
        });
        all_equiv.is_ok()
      }
    },
    _ => false,
  }
}
