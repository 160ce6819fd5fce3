#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use crate::utils::Parallelism;
use rayon::prelude::*;

/// Maps collection and collects results into vector keeping source order.
/// Runs in parallel when parallelism is allowed.
pub fn parallel_collect<T, F, R>(parallelism: Parallelism, source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    match parallelism {
        Parallelism::Sequential => source.iter().map(map_op).collect(),
        Parallelism::Rayon => source.par_iter().map(map_op).collect(),
    }
}

/// Performs map reduce operation over a range of indices.
/// NOTE reduce operation has to be associative as parallel mode splits the range arbitrarily.
pub fn map_reduce_range<FM, FR, FD, R>(
    parallelism: Parallelism,
    range: std::ops::Range<u64>,
    map_op: FM,
    default_op: FD,
    reduce_op: FR,
) -> R
where
    FM: Fn(u64) -> R + Sync + Send,
    FR: Fn(R, R) -> R + Sync + Send,
    FD: Fn() -> R + Sync + Send,
    R: Send,
{
    match parallelism {
        Parallelism::Sequential => range.map(map_op).fold(default_op(), reduce_op),
        Parallelism::Rayon => range.into_par_iter().map(map_op).reduce(default_op, reduce_op),
    }
}
