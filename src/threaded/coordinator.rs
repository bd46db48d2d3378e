//! Spawn/join orchestration over a [`MatrixStore`].

use std::mem;
use std::num::NonZeroUsize;
use std::thread;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::matrix::MatrixStore;
use crate::matrix::store::StoreParts;
use crate::threaded::partition::{RowRange, partition};
use crate::threaded::worker::ComputeTask;

/// Computes sum, difference and product of the store's inputs using one
/// OS thread per row range.
///
/// Returns only after every spawned worker has been joined, so the
/// outputs are complete whenever this returns `Ok`. On `Err` the output
/// matrices hold unspecified partial data and should be discarded.
///
/// # Errors
///
/// - [`Error::Spawn`] if a worker thread can't be created. Workers that
///   were already started still run to completion before this returns.
/// - [`Error::WorkerPanicked`] if a worker panics.
pub fn compute(store: &mut MatrixStore, workers: NonZeroUsize) -> Result<()> {
    compute_with(store, workers, worker_builder, |task| task.execute())
}

fn worker_builder(worker: usize) -> thread::Builder {
    thread::Builder::new().name(format!("matops-worker-{}", worker))
}

/// [`compute`] with the thread builder and task body supplied by the caller.
fn compute_with(
    store: &mut MatrixStore,
    workers: NonZeroUsize,
    builder: impl Fn(usize) -> thread::Builder,
    body: fn(ComputeTask<'_>),
) -> Result<()> {
    let dim = store.dim();
    let ranges = partition(dim, workers);
    let tasks = split_tasks(&ranges, store.parts());

    debug!(dim = dim.get(), workers = workers.get(), "spawning workers");

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(tasks.len());
        let mut spawn_error = None;

        for task in tasks {
            let worker = task.worker();
            let spawned = builder(worker).spawn_scoped(scope, move || body(task));

            match spawned {
                Ok(handle) => handles.push((worker, handle)),
                Err(source) => {
                    spawn_error = Some(Error::Spawn { worker, source });
                    break;
                }
            }
        }

        // Barrier: every started worker is joined, even after a spawn failure.
        let mut panicked = None;
        for (worker, handle) in handles {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(Error::WorkerPanicked { worker });
            }
        }

        match spawn_error.or(panicked) {
            Some(err) => Err(err),
            None => {
                info!(dim = dim.get(), workers = workers.get(), "all workers finished");
                Ok(())
            }
        }
    })
}

/// Carves the output buffers into one disjoint row block per range.
fn split_tasks<'a>(ranges: &[RowRange], parts: StoreParts<'a>) -> Vec<ComputeTask<'a>> {
    let StoreParts { a, b, mut sum, mut diff, mut product } = parts;
    let n = a.dim();

    ranges
        .iter()
        .enumerate()
        .map(|(worker, &range)| {
            let cells = range.len() * n;
            let (task_sum, rest) = mem::take(&mut sum).split_at_mut(cells);
            sum = rest;
            let (task_diff, rest) = mem::take(&mut diff).split_at_mut(cells);
            diff = rest;
            let (task_product, rest) = mem::take(&mut product).split_at_mut(cells);
            product = rest;

            ComputeTask::new(worker, range, a, b, task_sum, task_diff, task_product)
        })
        .collect()
}
