/*!

Every term language supplies a `TermShape`: a description of one constructor layer, generic in
the type of its child slots. The engine is parametric in the shape; `traverse` and `zip_match`
fully determine unification behavior.

The generic associated type `WithChild<C>` is "the same constructor with child slots of type
`C`". During unification the children are terms; during pairwise descent they are pairs of
terms; during a visiting pass they are `()`.

*/

use crate::api::term::Term;

pub trait TermShape {
  /// One constructor layer with child slots of type `C`.
  type WithChild<C: Clone>: Clone;

  /// Applies `f` to every child in deterministic left-to-right order, rebuilding the same
  /// constructor around the results. Stops at the first `Err`.
  ///
  /// Implementations must preserve the constructor and its arity.
  fn traverse<A, B, E, F>(shape: Self::WithChild<A>, f: F) -> Result<Self::WithChild<B>, E>
  where
    A: Clone,
    B: Clone,
    F: FnMut(A) -> Result<B, E>;

  /// Pairs up the children of two layers with the same constructor and arity, in order.
  /// Returns `None` when the constructors (or arities) disagree.
  fn zip_match<A, B>(
    left: &Self::WithChild<A>,
    right: &Self::WithChild<B>,
  ) -> Option<Self::WithChild<(A, B)>>
  where
    A: Clone,
    B: Clone;

  /// Visits every child in order without rebuilding. The `Err` channel doubles as the
  /// short-circuit mechanism for searches over children.
  fn visit<A, E, F>(shape: &Self::WithChild<A>, mut f: F) -> Result<(), E>
  where
    A: Clone,
    F: FnMut(&A) -> Result<(), E>,
    Self: Sized,
  {
    Self::traverse(shape.clone(), |child| f(&child))?;
    Ok(())
  }
}

/// The layer type of a term language: one constructor whose children are themselves terms.
pub type Layer<S> = <S as TermShape>::WithChild<Term<S>>;
