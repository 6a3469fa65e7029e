/*!

A `NatSet` is a set of (small) natural numbers. The expected use is tracking which variable
indices have been visited during a traversal, so the universe is dense and starts at zero. The
backing implementation is the [`bit_set` crate](https://crates.io/crates/bit-set).

*/

pub use bit_set::BitSet as NatSet;
