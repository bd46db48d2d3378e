//! Multi-threaded compute over statically partitioned rows.
//!
//! Rows are split into one contiguous range per worker, each worker
//! writes only its own rows of the three outputs, and the coordinator
//! joins every worker before results become visible. Disjoint output
//! slices mean no locks or atomics are needed.
//!
//! - `partition`: row ranges from (N, worker count)
//! - `worker`: the per-range sum/difference/product kernel
//! - `coordinator`: spawns one scoped thread per range and joins them

pub mod coordinator;
pub mod partition;
pub mod worker;
