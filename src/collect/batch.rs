//! Splitting the artist list into worker batches.

/// Split `items` into consecutive chunks of at most `size` items.
///
/// The last chunk holds the remainder. A `size` of zero is treated as one.
pub fn chunk_list<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    items.chunks(size.max(1)).map(<[T]>::to_vec).collect()
}

/// Number of workers: available CPUs, capped at `max_workers`, at least one.
pub fn worker_count(max_workers: usize) -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    cpus.min(max_workers).max(1)
}

/// Aim for about two batches per worker, never below `min_batch_size`.
pub fn batch_size(total: usize, workers: usize, min_batch_size: usize) -> usize {
    let per_worker = total / (workers.max(1) * 2);
    per_worker.max(min_batch_size).max(1)
}
