#[cfg(test)]
#[path = "../../tests/unit/processing/neighborhood_test.rs"]
mod neighborhood_test;

use crate::models::TimeMatrix;
use crate::utils::{Float, compare_floats};
use std::collections::BTreeSet;

/// Creates granular neighbors ("correlated vertices") of each customer.
///
/// For every customer, `granular_size` other customers with the smallest travel time from it are
/// selected (ties are resolved by ascending index), the depot at index 0 is never considered. The
/// relation is then made symmetric: if `j` is selected for `i`, `i` becomes a neighbor of `j` too,
/// so a customer can have more than `granular_size` neighbors.
///
/// Returns a list per node where index 0 (depot) is empty and other lists are sorted by index, not
/// by proximity.
pub fn create_correlated_vertices(time_cost: &TimeMatrix, granular_size: usize) -> Vec<Vec<usize>> {
    let nb_clients = time_cost.size().saturating_sub(1);
    let neighbors_size = granular_size.min(nb_clients.saturating_sub(1));

    let mut correlated = vec![BTreeSet::<usize>::new(); nb_clients + 1];
    let mut proximity: Vec<(Float, usize)> = Vec::with_capacity(nb_clients);

    for i in 1..=nb_clients {
        proximity.clear();
        proximity.extend((1..=nb_clients).filter(|&j| j != i).map(|j| (time_cost.get(i, j), j)));
        proximity.sort_unstable_by(|(a_time, a_idx), (b_time, b_idx)| {
            compare_floats(*a_time, *b_time).then_with(|| a_idx.cmp(b_idx))
        });

        proximity.iter().take(neighbors_size).for_each(|&(_, j)| {
            correlated[i].insert(j);
            correlated[j].insert(i);
        });
    }

    correlated.into_iter().map(|neighbors| neighbors.into_iter().collect()).collect()
}
