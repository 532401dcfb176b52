// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Row-at-a-time passes over a row-major slab.
//!
//! With the `threaded` feature the rows are divvied up into one band
//! per CPU and each band is handed to a scoped thread.  Because the
//! bands come out of `chunks_mut`, no thread can touch a row that is
//! not its own.

/// Call `f(y, row)` for every `width`-sized row of `data`.
#[cfg(not(feature = "threaded"))]
pub(crate) fn for_each_row<T, F>(data: &mut [T], width: usize, f: F)
where
    T: Send,
    F: Fn(u32, &mut [T]) + Sync,
{
    if width == 0 {
        return;
    }
    data.chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| f(y as u32, row));
}

/// Call `f(y, row)` for every `width`-sized row of `data`.
#[cfg(feature = "threaded")]
pub(crate) fn for_each_row<T, F>(data: &mut [T], width: usize, f: F)
where
    T: Send,
    F: Fn(u32, &mut [T]) + Sync,
{
    if width == 0 {
        return;
    }
    let rows = data.len() / width;
    let bands = num_cpus::get().max(1);
    let rows_per_band = ((rows + bands - 1) / bands).max(1);
    let f = &f;

    let outcome = crossbeam::scope(|scope| {
        for (band, chunk) in data.chunks_mut(rows_per_band * width).enumerate() {
            scope.spawn(move |_| {
                for (offset, row) in chunk.chunks_mut(width).enumerate() {
                    f((band * rows_per_band + offset) as u32, row);
                }
            });
        }
    });

    // Only a panicking worker makes the scope fail; pass the panic on.
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}
