/*!

The free theory: constructors with no equational properties. `FreeTerm<C>` is one layer (an
interned symbol plus argument slots) and `FreeTheory` is the carrier implementing `TermShape`
for it. This is the shape used by the test suite and the natural starting point for hosts that
do not need a custom layer representation.

*/

mod free_term;

pub use free_term::{FreeTerm, FreeTheory};
