//! Rough heap-size arithmetic for the "memory used" statistics lines.
//!
//! The figures are estimates from element counts and static sizes — good
//! enough for the order-of-magnitude number shown to the user, nothing else
//! reads them.

use std::mem::size_of;

use fxhash::{FxHashMap, FxHashSet};

use crate::graph::AdjacencyList;

pub fn map_bytes<K, V>(map: &FxHashMap<K, V>) -> usize {
    map.len() * (size_of::<K>() + size_of::<V>())
}

pub fn set_bytes<T>(set: &FxHashSet<T>) -> usize {
    set.len() * size_of::<T>()
}

pub fn adjacency_bytes(adj: &AdjacencyList) -> usize {
    adj.values()
        .map(|l| l.len() * size_of::<crate::graph::Neighbor>())
        .sum::<usize>()
        + map_bytes(adj)
}
