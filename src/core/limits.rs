/*!
 * Hint Constants
 *
 * Tuning values used by the prefetch helpers. These only affect which lines
 * are requested, never program results.
 */

/// Size of a cache line in bytes (typical for modern x86-64 and aarch64 CPUs)
/// Stride used when prefetching a whole range
pub const CACHE_LINE_SIZE: usize = 64;

/// Elements to run ahead of the cursor in `PrefetchExt::iter_prefetched`
/// [PERF] Far enough to hide L2 latency on a tight loop, near enough to stay in L1
pub const DEFAULT_PREFETCH_DISTANCE: usize = 4;
