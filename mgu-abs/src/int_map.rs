/*!

An `IntMap<V>` is a persistent map from small integer keys to `V`. Cloning an `IntMap` is O(1)
thanks to structural sharing, which is what makes snapshot-and-restore backtracking over a large
binding table affordable. Iteration order is ascending by key.

The backing implementation is [`im::OrdMap`](https://crates.io/crates/im). The
[`rpds` crate](https://crates.io/crates/rpds) would also do; nothing outside this module may rely
on anything but `get`/`get_mut`/`insert`/`len`/`keys` and cheap `Clone`.

*/

pub type IntMap<V> = im::OrdMap<u32, V>;
