//! End-to-end pipeline from a dependency DAG to a junction tree.

use crate::policy::EliminationPolicy;
use crate::types::{DirectedGraph, GraphError, JunctionTree, Vertex};

/// Moralize, triangulate and span `dag` into a junction tree.
///
/// `dag` is not modified. Every stage consumes the previous stage's output;
/// the policy drives both the elimination order and clique extraction.
pub fn build_junction_tree<V: Vertex>(
    dag: &DirectedGraph<V>,
    policy: &EliminationPolicy,
) -> Result<JunctionTree<V>, GraphError> {
    let span = tracing::debug_span!("junction_tree", vertices = dag.vertex_count(), edges = dag.edge_count());
    let _guard = span.enter();

    let mut moral = dag.moral_graph();
    moral.triangulate(policy)?;
    let tree = moral.to_junction_tree(policy)?;

    tracing::debug!(
        cliques = tree.len(),
        tree_edges = tree.edge_count(),
        chordal_edges = moral.edge_count(),
        "pipeline complete"
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Clique;

    #[test]
    fn test_collider_becomes_single_clique() {
        let dag = DirectedGraph::new(vec!['x', 'y', 'z'], vec![('x', 'z'), ('y', 'z')]).unwrap();
        let tree = build_junction_tree(&dag, &EliminationPolicy::default()).unwrap();
        assert_eq!(tree.cliques(), vec![&Clique::new(vec!['x', 'y', 'z'])]);
        assert_eq!(dag.edge_count(), 2);
    }

    #[test]
    fn test_chain_becomes_path_of_pairs() {
        let dag = DirectedGraph::new(vec![1, 2, 3, 4], vec![(1, 2), (2, 3), (3, 4)]).unwrap();
        let tree = build_junction_tree(&dag, &EliminationPolicy::default()).unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.edge_count(), 2);
        assert!(tree.satisfies_running_intersection());
    }

    #[test]
    fn test_strict_policy_rejects_disconnected_dag() {
        let dag = DirectedGraph::new(vec![1, 2, 3], vec![(1, 2)]).unwrap();
        assert_eq!(
            build_junction_tree(&dag, &EliminationPolicy::strict()).unwrap_err(),
            GraphError::Disconnected { reached: 2, total: 3 }
        );
    }
}
