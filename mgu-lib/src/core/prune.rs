/*!

Chain walkers with path compression. A variable bound to a variable bound to a variable ... is
a chain; both walkers rebind every variable on the walked chain so later resolutions take one
hop. Neither changes the term any variable denotes, and neither terminates on a cyclic chain;
callers guarantee acyclicity at the point of use.

`full_prune` walks through the final structural node and returns the chain's tail term.
`semi_prune` stops at the last *variable*: a chain ending in a node (or an unbound variable)
yields `Var(last)`, so aliased variables stay recognizable by variable equality. That identity
is what lets unification and the visited-set traversals short-circuit on aliases instead of
recursing into the bound structure again.

*/

use mgu_abs::trace;

use crate::api::{store::BindingStore, term::Term, term_shape::TermShape, variable::Variable};

/// Resolves `t` to the term at the end of its binding chain, rebinding every variable on the
/// chain directly to that term.
pub fn full_prune<S, B>(store: &mut B, t: Term<S>) -> Term<S>
where
  S: TermShape,
  B: BindingStore<S>,
{
  match t {
    Term::Node(_) => t,
    Term::Var(v) => match store.lookup_var(v) {
      None => Term::Var(v),
      Some(bound) => {
        let tail = full_prune(store, bound);
        trace!("full_prune: rebinding {} to the chain tail", v);
        store.bind_var(v, tail.clone());
        tail
      }
    },
  }
}

/// Resolves `t` to the last variable of its binding chain (or to `t` itself when `t` is a
/// node), rebinding intermediate variables to that last variable.
pub fn semi_prune<S, B>(store: &mut B, t: Term<S>) -> Term<S>
where
  S: TermShape,
  B: BindingStore<S>,
{
  match t {
    Term::Node(_) => t,
    Term::Var(v) => semi_prune_var(store, v),
  }
}

fn semi_prune_var<S, B>(store: &mut B, v: Variable) -> Term<S>
where
  S: TermShape,
  B: BindingStore<S>,
{
  match store.lookup_var(v) {
    // `v` is the last variable in the chain: unbound, or bound to structure.
    None | Some(Term::Node(_)) => Term::Var(v),
    Some(Term::Var(next)) => {
      let tail = semi_prune_var(store, next);
      store.bind_var(v, tail.clone());
      tail
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::tests::{constant, store, var};

  #[test]
  fn full_prune_compresses_chains() {
    let mut s = store();
    // x₀ → x₁ → x₂ → a
    s.bind_var(Variable::new(0), var(1));
    s.bind_var(Variable::new(1), var(2));
    s.bind_var(Variable::new(2), constant("a"));

    assert_eq!(full_prune(&mut s, var(0)), constant("a"));

    // Every variable on the chain now points at the tail directly.
    for index in 0..=2 {
      assert_eq!(s.lookup_var(Variable::new(index)), Some(constant("a")));
    }
  }

  #[test]
  fn full_prune_is_idempotent() {
    let mut s = store();
    s.bind_var(Variable::new(0), var(1));
    s.bind_var(Variable::new(1), constant("a"));

    let once = full_prune(&mut s, var(0));
    let twice = full_prune(&mut s, once.clone());
    assert_eq!(once, twice);
  }

  #[test]
  fn full_prune_leaves_unbound_variables() {
    let mut s = store();
    assert_eq!(full_prune(&mut s, var(5)), var(5));
  }

  #[test]
  fn semi_prune_stops_at_the_last_variable() {
    let mut s = store();
    // x₀ → x₁ → x₂ → a
    s.bind_var(Variable::new(0), var(1));
    s.bind_var(Variable::new(1), var(2));
    s.bind_var(Variable::new(2), constant("a"));

    assert_eq!(semi_prune(&mut s, var(0)), var(2));

    // Intermediate variables are rebound to the last variable; the last keeps its binding.
    assert_eq!(s.lookup_var(Variable::new(0)), Some(var(2)));
    assert_eq!(s.lookup_var(Variable::new(1)), Some(var(2)));
    assert_eq!(s.lookup_var(Variable::new(2)), Some(constant("a")));
  }

  #[test]
  fn semi_prune_on_an_unbound_tail() {
    let mut s = store();
    s.bind_var(Variable::new(0), var(1));
    s.bind_var(Variable::new(1), var(2));

    assert_eq!(semi_prune(&mut s, var(0)), var(2));
    assert_eq!(s.lookup_var(Variable::new(0)), Some(var(2)));
    assert!(s.lookup_var(Variable::new(2)).is_none());
  }

  #[test]
  fn semi_prune_is_idempotent() {
    let mut s = store();
    s.bind_var(Variable::new(0), var(1));
    s.bind_var(Variable::new(1), constant("a"));

    let once = semi_prune(&mut s, var(0));
    let twice = semi_prune(&mut s, once.clone());
    assert_eq!(once, twice);
  }
}
