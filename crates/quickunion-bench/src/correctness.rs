//! Post-operation invariant checkers for correctness validation.

use std::collections::VecDeque;

use quickunion_core::UnionFind;

/// Verifies the forest invariants visible through the public API:
/// - each root's recorded size equals the number of elements it is found for
/// - the number of roots equals `component_count`
/// - root component sizes sum to `len`
pub fn check_forest_invariants(uf: &mut UnionFind) -> Result<(), String> {
    let mut members = vec![0usize; uf.len()];
    for element in 0..uf.len() {
        members[uf.find(element)] += 1;
    }

    let mut roots = 0;
    let mut total = 0;
    for (root, &counted) in members.iter().enumerate() {
        if counted == 0 {
            continue;
        }
        let recorded = uf.component_size(root);
        if recorded != counted {
            return Err(format!(
                "size mismatch at root {root}: recorded={recorded}, members={counted}"
            ));
        }
        roots += 1;
        total += recorded;
    }
    if roots != uf.component_count() {
        return Err(format!(
            "root count mismatch: roots={roots}, component_count={}",
            uf.component_count()
        ));
    }
    if total != uf.len() {
        return Err(format!(
            "size mismatch: root sizes sum to {total}, len={}",
            uf.len()
        ));
    }
    Ok(())
}

/// Verifies that `uf` groups elements exactly like a breadth-first search
/// over the union pairs treated as undirected edges.
pub fn check_matches_graph(uf: &mut UnionFind, unions: &[(usize, usize)]) -> Result<(), String> {
    let expected = graph_components(uf.len(), unions);
    let actual = uf.components();
    if actual.len() != expected.len() {
        return Err(format!(
            "component count mismatch: union-find={}, bfs={}",
            actual.len(),
            expected.len()
        ));
    }
    for (a, e) in actual.iter().zip(&expected) {
        if a != e {
            return Err(format!("component mismatch: union-find={a:?}, bfs={e:?}"));
        }
    }
    Ok(())
}

/// Connected components of the undirected graph on `[0, n)` with the given
/// edges, each ascending, ordered by smallest member.
pub fn graph_components(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); n];
    for &(p, q) in edges {
        adjacency[p].push(q);
        adjacency[q].push(p);
    }

    let mut seen = vec![false; n];
    let mut groups = Vec::new();
    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut group = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for &next in &adjacency[current] {
                if !seen[next] {
                    seen[next] = true;
                    group.push(next);
                    queue.push_back(next);
                }
            }
        }
        group.sort_unstable();
        groups.push(group);
    }
    groups
}
