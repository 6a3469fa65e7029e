/*!

Shared test fixtures plus the randomized cross-cutting properties. The term language for the
whole suite is the free theory: a handful of symbols of small arity over which random trees are
grown, in the spirit of fuzzing the engine with every shape of aliasing the generator can
produce.

*/

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::api::{
  apply_bindings_all,
  equals,
  free_theory::{FreeTerm, FreeTheory},
  unify,
  unify_occurs,
  BindingStore,
  Failure,
  IntBindingStore,
  Term,
  Variable,
};

pub(crate) type TestTerm = Term<FreeTheory>;
pub(crate) type TestStore = IntBindingStore<FreeTheory>;

pub(crate) fn store() -> TestStore {
  IntBindingStore::new()
}

/// A store whose allocator is already past the first `count` indices, so tests that mention
/// `var(0)`, `var(1)`, ... can tell freshly allocated variables apart from the originals.
pub(crate) fn store_with_vars(count: u32) -> TestStore {
  let mut s = store();
  for _ in 0..count {
    let _ = s.fresh_var().unwrap();
  }
  s
}

pub(crate) fn var(index: u32) -> TestTerm {
  Term::Var(Variable::new(index))
}

pub(crate) fn constant(name: &str) -> TestTerm {
  Term::node(FreeTerm::constant(name))
}

pub(crate) fn pair(left: TestTerm, right: TestTerm) -> TestTerm {
  Term::node(FreeTerm::function("pair", [left, right]))
}

/// Grows a random term over symbols of arity 0..=2 and a small pool of variables. Shallow by
/// construction; aliasing between variables does the interesting work.
fn random_term(rng: &mut StdRng, variable_pool: u32, depth: usize) -> TestTerm {
  if depth == 0 || rng.random_range(0..4) == 0 {
    if rng.random_range(0..2) == 0 {
      var(rng.random_range(0..variable_pool))
    } else {
      constant(["a", "b"][rng.random_range(0..2)])
    }
  } else {
    match rng.random_range(0..3) {
      0 => Term::node(FreeTerm::function(
        "wrap",
        [random_term(rng, variable_pool, depth - 1)],
      )),
      1 => pair(
        random_term(rng, variable_pool, depth - 1),
        random_term(rng, variable_pool, depth - 1),
      ),
      _ => constant(["a", "b"][rng.random_range(0..2)]),
    }
  }
}

/// The two unification variants agree: on inputs that create no cycle both succeed with stores
/// that resolve the inputs identically; on cycle-creating inputs the eager variant fails with
/// `OccursIn` while the default variant may only notice once something walks the cycle.
#[test]
fn unify_and_unify_occurs_agree() {
  let mut rng = StdRng::seed_from_u64(0x0905);

  for _ in 0..500 {
    let left = random_term(&mut rng, 4, 3);
    let right = random_term(&mut rng, 4, 3);

    let mut default_store = store_with_vars(4);
    let mut eager_store = store_with_vars(4);

    let default_outcome = unify(&mut default_store, &left, &right);
    let eager_outcome = unify_occurs(&mut eager_store, &left, &right);

    match (default_outcome, eager_outcome) {
      (Ok(_), Ok(_)) => {
        assert!(equals(&mut default_store, &left, &right));
        assert!(equals(&mut eager_store, &left, &right));

        let resolved_default =
            apply_bindings_all(&mut default_store, &[left.clone(), right.clone()]).unwrap();
        let resolved_eager =
            apply_bindings_all(&mut eager_store, &[left.clone(), right.clone()]).unwrap();
        assert_eq!(resolved_default, resolved_eager);
      }
      (Ok(_), Err(Failure::OccursIn(_, _))) => {
        // The default variant admitted a cycle; walking it must surface the failure.
        assert!(matches!(
          apply_bindings_all(&mut default_store, &[left.clone(), right.clone()]),
          Err(Failure::OccursIn(_, _))
        ));
      }
      (Err(_), Err(_)) => {}
      (default_outcome, eager_outcome) => {
        panic!(
          "variants disagree on {} =? {}: default {:?}, eager {:?}",
          left,
          right,
          default_outcome.map(|_| ()),
          eager_outcome.map(|_| ())
        );
      }
    }
  }
}

/// Unification is symmetric up to resolution: whenever both orientations succeed, the two
/// stores resolve every ground input identically.
#[test]
fn unification_is_symmetric_on_ground_results() {
  let mut rng = StdRng::seed_from_u64(0x1207);

  for _ in 0..300 {
    let left = random_term(&mut rng, 3, 3);
    let right = random_term(&mut rng, 3, 3);

    let mut forward = store_with_vars(3);
    let mut backward = store_with_vars(3);

    if unify(&mut forward, &left, &right).is_err() || unify(&mut backward, &right, &left).is_err() {
      continue;
    }

    let (Ok(resolved_forward), Ok(resolved_backward)) = (
      apply_bindings_all(&mut forward, &[left.clone(), right.clone()]),
      apply_bindings_all(&mut backward, &[left.clone(), right.clone()]),
    ) else {
      // A constructed cycle; covered by the differential test above.
      continue;
    };

    // Ground resolutions are identical; non-ground ones may differ in which alias survives.
    if resolved_forward
        .iter()
        .all(|t| crate::api::get_free_vars(&forward, t).is_empty())
    {
      assert_eq!(resolved_forward, resolved_backward);
    }
  }
}

/// Freshening produces an alpha-equivalent term whose renaming is a bijection on ids.
#[test]
fn freshen_is_an_alpha_renaming() {
  let mut rng = StdRng::seed_from_u64(0x2a11);

  for _ in 0..200 {
    let t = random_term(&mut rng, 4, 3);
    let mut s = store_with_vars(4);

    let fresh = crate::api::freshen(&mut s, &t).unwrap();
    let renaming = crate::api::equiv(&mut s, &t, &fresh).expect("freshening preserves shape");

    // Injective: no two originals were collapsed onto one fresh variable.
    let mut images: Vec<u32> = renaming.values().copied().collect();
    images.sort_unstable();
    images.dedup();
    assert_eq!(images.len(), renaming.len());
  }
}

/// After `apply_bindings`, every variable left standing is free and reported by
/// `get_free_vars`.
#[test]
fn applied_terms_contain_only_free_variables() {
  let mut rng = StdRng::seed_from_u64(0x3099);

  for _ in 0..200 {
    let left = random_term(&mut rng, 4, 3);
    let right = random_term(&mut rng, 4, 3);
    let mut s = store_with_vars(4);

    if unify(&mut s, &left, &right).is_err() {
      continue;
    }
    let Ok(applied) = crate::api::apply_bindings(&mut s, &left) else {
      continue;
    };

    let free = crate::api::get_free_vars(&s, &applied);
    for v in &free {
      assert!(s.lookup_var(*v).is_none());
    }

    // Idempotence: a second application changes nothing.
    assert_eq!(crate::api::apply_bindings(&mut s, &applied).unwrap(), applied);
  }
}
