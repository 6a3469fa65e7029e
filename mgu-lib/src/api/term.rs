/*!

A `Term` is an immutable value tree: either a structure node wrapping one layer of the term
shape, or a variable reference. Nodes are reference counted so that cloning a term is a pointer
bump and subterm sharing is cheap; sharing is desirable but never required for correctness.

A term never contains a cyclic edge in its own structure. Cycles can only arise through the
binding store, which is why the traversals in `core` carry visited sets.

*/

use std::{
  fmt::{Debug, Display, Formatter},
  rc::Rc,
};

use crate::api::{
  term_shape::{Layer, TermShape},
  variable::Variable,
};

pub enum Term<S: TermShape> {
  Node(Rc<Layer<S>>),
  Var(Variable),
}

impl<S: TermShape> Term<S> {
  /// Wraps one constructor layer into a term.
  #[inline(always)]
  pub fn node(layer: Layer<S>) -> Self {
    Term::Node(Rc::new(layer))
  }

  #[inline(always)]
  pub fn is_var(&self) -> bool {
    matches!(self, Term::Var(_))
  }

  #[inline(always)]
  pub fn as_var(&self) -> Option<Variable> {
    match self {
      Term::Var(v) => Some(*v),
      Term::Node(_) => None,
    }
  }
}

impl<S: TermShape> Clone for Term<S> {
  fn clone(&self) -> Self {
    match self {
      Term::Node(layer) => Term::Node(Rc::clone(layer)),
      Term::Var(v) => Term::Var(*v),
    }
  }
}

// Syntactic equality: no bindings are consulted. For equality modulo the store, use
// `api::equals`.
//
// This recurses through `zip_match`/`visit` rather than bounding on `Layer<S>: PartialEq`: the
// latter is a self-referential bound (`Layer<S>` embeds `Term<S>` itself) that the trait solver
// can never resolve, since satisfying it would require satisfying it again one layer down.
impl<S: TermShape> PartialEq for Term<S> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Term::Var(left), Term::Var(right)) => left == right,
      (Term::Node(left), Term::Node(right)) => match S::zip_match(left.as_ref(), right.as_ref()) {
        Some(pairs) => S::visit(&pairs, |(l, r)| if l == r { Ok(()) } else { Err(()) }).is_ok(),
        None => false,
      },
      _ => false,
    }
  }
}

impl<S: TermShape> Eq for Term<S> {}

/// Maps one constructor layer's children to their formatted representations. Used by `Debug`
/// and `Display` below to recurse via an ordinary (terminating) function call instead of a
/// self-referential trait bound.
pub(crate) fn layer_to_strings<S: TermShape>(
  layer: &Layer<S>,
  child_fmt: impl Fn(&Term<S>) -> String,
) -> S::WithChild<String> {
  S::traverse(layer.clone(), |child| Ok::<_, std::convert::Infallible>(child_fmt(&child)))
      .unwrap_or_else(|infallible| match infallible {})
}

impl<S: TermShape> Debug for Term<S>
where
  S::WithChild<String>: Debug,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Term::Node(layer) => f
          .debug_tuple("Node")
          .field(&layer_to_strings::<S>(layer, |child| format!("{:?}", child)))
          .finish(),
      Term::Var(v) => f.debug_tuple("Var").field(v).finish(),
    }
  }
}

impl<S: TermShape> Display for Term<S>
where
  S::WithChild<String>: Display,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Term::Node(layer) => write!(f, "{}", layer_to_strings::<S>(layer, |child| child.to_string())),
      Term::Var(v) => write!(f, "{}", v),
    }
  }
}
