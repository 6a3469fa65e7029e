/*!

The integer-keyed binding store: a counter for the next fresh index and a persistent map from
index to ranked cell.

The map is persistent so that a snapshot is one `Clone` (O(1), structural sharing), which is
the backtracking story: capture the store value before a speculative branch, drop the mutated
copy on failure. Within a branch the store is used linearly through `&mut`.

Stores are never shrunk; forgetting a variable is out of scope.

*/

use mgu_abs::IntMap;
use mgu_abs::trace;

use crate::api::{
  failure::Failure,
  store::{BindingStore, RankedCell},
  term::Term,
  term_shape::TermShape,
  variable::Variable,
};

pub struct IntBindingStore<S: TermShape> {
  next_index: u32,
  bindings  : IntMap<RankedCell<S>>,
}

impl<S: TermShape> IntBindingStore<S> {
  pub fn new() -> Self {
    IntBindingStore {
      next_index: 0,
      bindings  : IntMap::default(),
    }
  }

  /// The index the next `fresh_var` will return. Every index in the map is below this, as long
  /// as all variables came from the allocator.
  #[inline(always)]
  pub fn next_index(&self) -> u32 {
    self.next_index
  }

  /// Number of indices with a cell (bound or rank-bumped).
  #[inline(always)]
  pub fn cell_count(&self) -> usize {
    self.bindings.len()
  }
}

impl<S: TermShape> Default for IntBindingStore<S> {
  fn default() -> Self {
    Self::new()
  }
}

impl<S: TermShape> Clone for IntBindingStore<S> {
  fn clone(&self) -> Self {
    IntBindingStore {
      next_index: self.next_index,
      bindings  : self.bindings.clone(),
    }
  }
}

impl<S: TermShape> BindingStore<S> for IntBindingStore<S> {
  fn lookup_var(&self, v: Variable) -> Option<Term<S>> {
    self.bindings.get(&v.index()).and_then(|cell| cell.bound.clone())
  }

  fn lookup_rank_var(&self, v: Variable) -> RankedCell<S> {
    self.bindings.get(&v.index()).cloned().unwrap_or_default()
  }

  fn fresh_var(&mut self) -> Result<Variable, Failure<S>> {
    let bumped = self.next_index.checked_add(1).ok_or(Failure::ExhaustedVariables)?;
    let v = Variable::new(self.next_index);
    self.next_index = bumped;

    trace!("allocated fresh variable {}", v);
    Ok(v)
  }

  fn bind_var(&mut self, v: Variable, t: Term<S>) {
    match self.bindings.get_mut(&v.index()) {
      Some(cell) => cell.bound = Some(t),
      None => {
        self.bindings.insert(v.index(), RankedCell::new(0, Some(t)));
      }
    }
  }

  fn increment_rank(&mut self, v: Variable) {
    match self.bindings.get_mut(&v.index()) {
      Some(cell) => cell.rank += 1,
      None => {
        self.bindings.insert(v.index(), RankedCell::new(1, None));
      }
    }
  }

  fn increment_bind_var(&mut self, v: Variable, t: Term<S>) {
    match self.bindings.get_mut(&v.index()) {
      Some(cell) => {
        cell.rank += 1;
        cell.bound = Some(t);
      }
      None => {
        self.bindings.insert(v.index(), RankedCell::new(1, Some(t)));
      }
    }
  }
}
