/*!

A first-order structural unification engine.

A [`Term`](api::Term) is either a variable or one layer of a user-supplied
[`TermShape`](api::TermShape) whose child slots hold further terms. Given two terms, [`unify`](api::unify)
computes the most general substitution making them syntactically equal, recording it in a
[`BindingStore`](api::BindingStore). The companion operations cover the rest of the standard
toolkit: free-variable collection, substitution application, freshening, structural equality,
alpha-equivalence, and subsumption.

The store is a value: cloning an [`IntBindingStore`](api::IntBindingStore) snapshots it in O(1),
which is the intended backtracking mechanism. The default [`unify`](api::unify) admits bindings
that close a cycle and reports [`OccursIn`](api::Failure::OccursIn) lazily, when
[`apply_bindings`](api::apply_bindings) or a later unification walks into the cycle;
[`unify_occurs`](api::unify_occurs) pays for an eager occurs check on every bind instead.

```
use mgu_lib::api::{apply_bindings, unify, IntBindingStore, Term, Variable};
use mgu_lib::api::free_theory::{FreeTerm, FreeTheory};

let mut store: IntBindingStore<FreeTheory> = IntBindingStore::new();

let x = Term::Var(Variable::new(0));
let y = Term::Var(Variable::new(1));
let left  = Term::node(FreeTerm::function("pair", [x.clone(), y.clone()]));
let right = Term::node(FreeTerm::function("pair", [y.clone(), Term::node(FreeTerm::constant("a"))]));

unify(&mut store, &left, &right).unwrap();

assert_eq!(apply_bindings(&mut store, &x).unwrap(), Term::node(FreeTerm::constant("a")));
```

*/

pub mod api;
mod core;
