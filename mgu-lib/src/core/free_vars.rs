/*!

Free-variable collection: the variables reachable from a term whose current binding is `None`,
following bindings transitively. A `NatSet` of visited indices suppresses revisits, so the walk
terminates even on cyclic bindings and never fails; a `BTreeMap` keyed by index accumulates the
result, which therefore comes back in ascending index order with duplicates merged.

*/

use std::collections::BTreeMap;
use std::convert::Infallible;

use mgu_abs::NatSet;

use crate::api::{store::BindingStore, term::Term, term_shape::TermShape, variable::Variable};

pub fn get_free_vars<S, B>(store: &B, t: &Term<S>) -> Vec<Variable>
where
  S: TermShape,
  B: BindingStore<S>,
{
  get_free_vars_all(store, std::slice::from_ref(t))
}

pub fn get_free_vars_all<S, B>(store: &B, terms: &[Term<S>]) -> Vec<Variable>
where
  S: TermShape,
  B: BindingStore<S>,
{
  let mut seen = NatSet::new();
  let mut free: BTreeMap<u32, Variable> = BTreeMap::new();

  for t in terms {
    collect(store, &mut seen, &mut free, t);
  }

  free.into_values().collect()
}

fn collect<S, B>(store: &B, seen: &mut NatSet, free: &mut BTreeMap<u32, Variable>, t: &Term<S>)
where
  S: TermShape,
  B: BindingStore<S>,
{
  match t {
    Term::Node(layer) => {
      let _: Result<(), Infallible> = S::visit(&**layer, |child| {
        collect(store, seen, free, child);
        Ok(())
      });
    }
    Term::Var(v) => {
      if seen.contains(v.index() as usize) {
        return;
      }
      seen.insert(v.index() as usize);

      match store.lookup_var(*v) {
        Some(bound) => collect(store, seen, free, &bound),
        None => {
          free.insert(v.index(), *v);
        }
      }
    }
  }
}
