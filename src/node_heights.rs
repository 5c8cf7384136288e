use oorandom::Rand32;


/// The maximum tower height of nodes in an [`IntervalSkiplist`].
///
/// With the [`random_node_height`] function, one node in roughly 16 thousand
/// reaches this height, which is comfortable headroom for an in-memory index.
///
/// [`IntervalSkiplist`]: crate::IntervalSkiplist
pub(crate) const MAX_HEIGHT: usize = 8;


/// Draw a tower height in `1..=MAX_HEIGHT` from the provided PRNG.
///
/// Heights follow a capped geometric distribution: each extra level is a
/// factor of four less likely than the one below it, with everything that
/// would exceed the cap folded into `MAX_HEIGHT`. Callers seed the `Rand32`
/// themselves, so a fixed seed reproduces the same sequence of towers.
pub(crate) fn random_node_height(prng: &mut Rand32) -> usize {
    // The height is increased with probability `1/4`, the same branch probability
    // Google's LevelDB implementation uses. A shallow cap keeps the descent arrays
    // small, and towers taller than 8 buy nothing at in-memory index sizes.
    let mut height = 1;
    while height < MAX_HEIGHT && prng.rand_u32() % 4 == 0 {
        height += 1;
    }
    height
}
