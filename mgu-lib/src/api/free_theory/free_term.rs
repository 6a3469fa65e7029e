use std::fmt::{Display, Formatter};

use smallvec::SmallVec;

use mgu_abs::{join_iter, IString};

use crate::api::term_shape::TermShape;

/// One layer of a free-theory term: a symbol applied to argument slots. Two layers match iff
/// their symbols and arities agree; the symbol name alone does not determine the constructor.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FreeTerm<C> {
  pub symbol: IString,
  pub args  : SmallVec<[C; 2]>,
}

impl<C> FreeTerm<C> {
  /// A nullary constructor.
  pub fn constant(name: &str) -> Self {
    FreeTerm {
      symbol: IString::from(name),
      args  : SmallVec::new(),
    }
  }

  pub fn function(name: &str, args: impl IntoIterator<Item = C>) -> Self {
    FreeTerm {
      symbol: IString::from(name),
      args  : args.into_iter().collect(),
    }
  }

  #[inline(always)]
  pub fn arity(&self) -> usize {
    self.args.len()
  }
}

impl<C: Display> Display for FreeTerm<C> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.symbol)?;

    if !self.args.is_empty() {
      write!(f, "({})", join_iter(self.args.iter(), ", "))?;
    }

    Ok(())
  }
}

/// Carrier type for the free theory's `TermShape` implementation.
pub struct FreeTheory;

impl TermShape for FreeTheory {
  type WithChild<C: Clone> = FreeTerm<C>;

  fn traverse<A, B, E, F>(shape: FreeTerm<A>, mut f: F) -> Result<FreeTerm<B>, E>
  where
    A: Clone,
    B: Clone,
    F: FnMut(A) -> Result<B, E>,
  {
    let FreeTerm { symbol, args } = shape;
    let mut mapped: SmallVec<[B; 2]> = SmallVec::with_capacity(args.len());

    for arg in args {
      mapped.push(f(arg)?);
    }

    Ok(FreeTerm { symbol, args: mapped })
  }

  fn zip_match<A, B>(left: &FreeTerm<A>, right: &FreeTerm<B>) -> Option<FreeTerm<(A, B)>>
  where
    A: Clone,
    B: Clone,
  {
    if left.symbol != right.symbol || left.args.len() != right.args.len() {
      return None;
    }

    let args = left
        .args
        .iter()
        .cloned()
        .zip(right.args.iter().cloned())
        .collect();

    Some(FreeTerm {
      symbol: left.symbol.clone(),
      args,
    })
  }
}
