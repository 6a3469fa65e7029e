/*!

The failure type shared by every operation in the engine. Three kinds:

- `OccursIn(v, t)`: binding `v` would produce (or has produced) a non-well-founded term;
  `t` is the witness under which the variable was revisited.
- `TermMismatch(left, right)`: two constructor layers failed to `zip_match` in a position
  where equality is required.
- `ExhaustedVariables`: the allocator ran out of variable indices.

Errors propagate out of the current top-level call. Bindings committed before the failure point
are not rolled back; a host that needs atomicity clones the store first.

*/

use std::{
  fmt::{Debug, Display, Formatter},
  rc::Rc,
};

use crate::api::{
  term::Term,
  term_shape::{Layer, TermShape},
  variable::Variable,
};

pub enum Failure<S: TermShape> {
  /// The variable occurs in the witness term, so binding it would close a cycle.
  OccursIn(Variable, Term<S>),
  /// The two layers have incompatible constructors.
  TermMismatch(Rc<Layer<S>>, Rc<Layer<S>>),
  /// The variable id space is used up.
  ExhaustedVariables,
}

impl<S: TermShape> Clone for Failure<S> {
  fn clone(&self) -> Self {
    match self {
      Failure::OccursIn(v, t) => Failure::OccursIn(*v, t.clone()),
      Failure::TermMismatch(left, right) => Failure::TermMismatch(Rc::clone(left), Rc::clone(right)),
      Failure::ExhaustedVariables => Failure::ExhaustedVariables,
    }
  }
}

// Layer equality/formatting recurses via `zip_match`/`visit`/`traverse` rather than bounding on
// `Layer<S>: PartialEq`/`Debug`/`Display` directly: `Layer<S>` embeds `Term<S>` itself, so such a
// bound is self-referential and the trait solver can never resolve it. See `term.rs`.
fn layers_eq<S: TermShape>(left: &Layer<S>, right: &Layer<S>) -> bool {
  match S::zip_match(left, right) {
    Some(pairs) => S::visit(&pairs, |(l, r)| if l == r { Ok(()) } else { Err(()) }).is_ok(),
    None => false,
  }
}

impl<S: TermShape> PartialEq for Failure<S> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Failure::OccursIn(v1, t1), Failure::OccursIn(v2, t2)) => v1 == v2 && t1 == t2,
      (Failure::TermMismatch(l1, r1), Failure::TermMismatch(l2, r2)) => {
        layers_eq::<S>(l1, l2) && layers_eq::<S>(r1, r2)
      }
      (Failure::ExhaustedVariables, Failure::ExhaustedVariables) => true,
      _ => false,
    }
  }
}

impl<S: TermShape> Debug for Failure<S>
where
  S::WithChild<String>: Debug,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Failure::OccursIn(v, t) => f.debug_tuple("OccursIn").field(v).field(t).finish(),
      Failure::TermMismatch(left, right) => f
          .debug_tuple("TermMismatch")
          .field(&crate::api::term::layer_to_strings::<S>(left, |child| format!("{:?}", child)))
          .field(&crate::api::term::layer_to_strings::<S>(right, |child| format!("{:?}", child)))
          .finish(),
      Failure::ExhaustedVariables => write!(f, "ExhaustedVariables"),
    }
  }
}

impl<S: TermShape> Display for Failure<S>
where
  S::WithChild<String>: Display,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Failure::OccursIn(v, t) => write!(f, "variable {} occurs in {}", v, t),
      Failure::TermMismatch(left, right) => write!(
        f,
        "cannot unify {} with {}",
        crate::api::term::layer_to_strings::<S>(left, |child| child.to_string()),
        crate::api::term::layer_to_strings::<S>(right, |child| child.to_string()),
      ),
      Failure::ExhaustedVariables => write!(f, "the supply of variable indices is exhausted"),
    }
  }
}

impl<S: TermShape> std::error::Error for Failure<S> where S::WithChild<String>: Debug + Display {}
