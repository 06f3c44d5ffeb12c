//! Dependency layering: topological distance from source components.
//!
//! Assigns every component an integer layer so that, outside cycles, a
//! component sits strictly to the right of everything it consumes. Sources
//! (inputs, clocks) occupy layer 0; components that lie on or transitively
//! depend on a cycle all share one flat bucket after the last acyclic
//! layer. Collapsing a cyclic subgraph (a latch, a feedback flip-flop) into
//! a single layer is a documented limitation, not decomposed further.
//!
//! The function is total and runs in O(V+E); cycles are handled
//! structurally, never reported as errors.

use std::collections::{HashMap, HashSet, VecDeque};

/// Layer assignment for every component handed to [`assign_layers`].
#[derive(Debug, Clone, Default)]
pub struct LayerMap {
    layers: HashMap<String, u32>,
    max_layer: u32,
}

impl LayerMap {
    /// The layer assigned to `id`, if `id` was part of the input.
    pub fn get(&self, id: &str) -> Option<u32> {
        self.layers.get(id).copied()
    }

    /// Highest layer assigned, including the cycle bucket.
    pub fn max_layer(&self) -> u32 {
        self.max_layer
    }

    /// Iterate over all (id, layer) assignments in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.layers.iter().map(|(id, &layer)| (id.as_str(), layer))
    }
}

/// Compute a layer for every component via Kahn-style topological layering.
///
/// `deps` lists each component id with the ids of the components producing
/// its inputs, in a stable order (declaration order keeps the whole layout
/// deterministic). Producer ids that do not appear as components in `deps`
/// are ignored - dangling references carry no dependency weight. `sources`
/// names the ids with no incoming dependencies (inputs, clocks).
pub fn assign_layers(deps: &[(String, Vec<String>)], sources: &HashSet<String>) -> LayerMap {
    let slot: HashMap<&str, usize> = deps
        .iter()
        .enumerate()
        .map(|(i, (id, _))| (id.as_str(), i))
        .collect();
    let is_source: Vec<bool> = deps.iter().map(|(id, _)| sources.contains(id)).collect();

    // In-degree counts every input slot fed by an in-graph, non-source
    // component. A producer feeding two ports of the same consumer counts
    // twice here but decrements once below, which parks the consumer in the
    // cycle bucket; the layer it gets there still satisfies monotonicity.
    let mut in_degree: Vec<usize> = vec![0; deps.len()];
    let mut consumers: Vec<Vec<usize>> = vec![Vec::new(); deps.len()];
    for (v, (_, producers)) in deps.iter().enumerate() {
        if is_source[v] {
            continue;
        }
        let mut seen: HashSet<usize> = HashSet::new();
        for producer in producers {
            let Some(&u) = slot.get(producer.as_str()) else {
                continue;
            };
            if is_source[u] {
                continue;
            }
            in_degree[v] += 1;
            if seen.insert(u) {
                consumers[u].push(v);
            }
        }
    }

    let mut layers: Vec<Option<u32>> = vec![None; deps.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut max_layer = 0u32;

    for v in 0..deps.len() {
        if is_source[v] {
            layers[v] = Some(0);
        } else if in_degree[v] == 0 {
            layers[v] = Some(1);
            max_layer = max_layer.max(1);
            queue.push_back(v);
        }
    }

    while let Some(u) = queue.pop_front() {
        let layer_u = layers[u].unwrap_or(1);
        max_layer = max_layer.max(layer_u);

        for &v in &consumers[u] {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                layers[v] = Some(layer_u + 1);
                queue.push_back(v);
            }
        }
    }

    // Anything still unassigned lies on or behind a cycle; the whole set
    // lands in one flat bucket after the last acyclic layer.
    let cycle_layer = max_layer + 1;
    let mut assigned = HashMap::with_capacity(deps.len());
    for (v, (id, _)) in deps.iter().enumerate() {
        let layer = match layers[v] {
            Some(layer) => layer,
            None => {
                max_layer = max_layer.max(cycle_layer);
                cycle_layer
            }
        };
        assigned.insert(id.clone(), layer);
    }

    LayerMap {
        layers: assigned,
        max_layer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(entries: Vec<(&str, Vec<&str>)>) -> Vec<(String, Vec<String>)> {
        entries
            .into_iter()
            .map(|(id, producers)| {
                (
                    id.to_string(),
                    producers.iter().map(|p| (*p).to_string()).collect(),
                )
            })
            .collect()
    }

    fn sources(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn sources_sit_at_layer_zero() {
        let d = deps(vec![("input-a", vec![]), ("g1", vec!["input-a"])]);
        let map = assign_layers(&d, &sources(&["input-a"]));
        assert_eq!(map.get("input-a"), Some(0));
        assert_eq!(map.get("g1"), Some(1));
        assert_eq!(map.max_layer(), 1);
    }

    #[test]
    fn chain_layers_increase_monotonically() {
        let d = deps(vec![
            ("input-a", vec![]),
            ("g1", vec!["input-a"]),
            ("g2", vec!["g1"]),
            ("g3", vec!["g2"]),
        ]);
        let map = assign_layers(&d, &sources(&["input-a"]));
        assert_eq!(map.get("g1"), Some(1));
        assert_eq!(map.get("g2"), Some(2));
        assert_eq!(map.get("g3"), Some(3));
        assert_eq!(map.max_layer(), 3);
    }

    #[test]
    fn diamond_joins_after_both_arms() {
        let d = deps(vec![
            ("input-a", vec![]),
            ("g1", vec!["input-a"]),
            ("g2", vec!["input-a"]),
            ("g3", vec!["g1", "g2"]),
        ]);
        let map = assign_layers(&d, &sources(&["input-a"]));
        // Every non-cyclic edge (u, v) satisfies layer(v) > layer(u)
        for (v, producers) in &d {
            for u in producers {
                assert!(map.get(v).unwrap() > map.get(u).unwrap());
            }
        }
    }

    #[test]
    fn cycle_members_share_one_bucket_after_acyclic_layers() {
        let d = deps(vec![
            ("input-a", vec![]),
            ("g1", vec!["input-a"]),
            // g2 and g3 feed each other
            ("g2", vec!["g1", "g3"]),
            ("g3", vec!["g2"]),
        ]);
        let map = assign_layers(&d, &sources(&["input-a"]));
        assert_eq!(map.get("g1"), Some(1));
        let acyclic_max: u32 = 1;
        assert_eq!(map.get("g2"), Some(acyclic_max + 1));
        assert_eq!(map.get("g3"), Some(acyclic_max + 1));
        assert_eq!(map.max_layer(), acyclic_max + 1);
    }

    #[test]
    fn downstream_of_a_cycle_joins_the_bucket() {
        let d = deps(vec![
            ("g1", vec!["g2"]),
            ("g2", vec!["g1"]),
            ("g3", vec!["g1"]),
        ]);
        let map = assign_layers(&d, &HashSet::new());
        // Nothing ever reaches in-degree zero, so everything shares layer 1
        assert_eq!(map.get("g1"), map.get("g2"));
        assert_eq!(map.get("g1"), map.get("g3"));
        assert_eq!(map.get("g1"), Some(1));
    }

    #[test]
    fn dangling_producers_carry_no_weight() {
        let d = deps(vec![("g1", vec!["ghost"])]);
        let map = assign_layers(&d, &HashSet::new());
        assert_eq!(map.get("g1"), Some(1));
    }

    #[test]
    fn empty_input_yields_empty_map() {
        let map = assign_layers(&[], &HashSet::new());
        assert_eq!(map.max_layer(), 0);
        assert_eq!(map.iter().count(), 0);
    }
}
