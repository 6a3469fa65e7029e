/*!

Types/type aliases that abstract over the implementing backing type.

# Background and Motivation

A motivating example is the `IString` type, an interned string type. A number of external crates
could provide this functionality. This module redirects to whatever chosen implementation we want.
To use the [`string_cache` crate](https://crates.io/crates/string_cache), we just define `IString`
as an alias for `string_cache::DefaultAtom`:

```ignore
pub use string_cache::DefaultAtom as IString;
```

If we want to later change to the [`ustr` crate](https://crates.io/crates/ustr), we just define
`IString` to be an alias for `ustr::Ustr` instead.

The same policy applies to `NatSet` (a set of small natural numbers, currently `bit_set::BitSet`)
and `IntMap` (a persistent integer-keyed map, currently `im::OrdMap`). For infrastructure with
very different backing implementations we define a thin abstraction layer instead: the `log`
module's public interface consists only of `set_global_logging_threshold()` /
`get_global_logging_threshold()` and the macros `critical!`, `error!`, `warning!`, `info!`,
`debug!`, and `trace!`, while the backing implementation (the `tracing` ecosystem) is encapsulated
in the `log` module.

*/

mod int_map;
mod nat_set;
mod string_util;
pub mod log;

// region Hashing data structures
pub use std::collections::HashMap;
pub use std::collections::HashSet;

// For vectors that are expected to have few or zero elements.
pub use smallvec::{smallvec, SmallVec};
// endregion

// Logging
pub use tracing;

// Interned string. `DefaultAtom` is a global cache that can be used across threads.
pub use string_cache::DefaultAtom as IString;

// A set of (small) natural numbers
pub use nat_set::NatSet;

// A persistent map keyed by small integers
pub use int_map::IntMap;

// Join sequences with a separator
pub use string_util::{int_to_subscript, join_iter};
