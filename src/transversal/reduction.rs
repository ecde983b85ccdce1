use crate::maximum_flow::graph::Graph;
use itertools::Itertools;
use std::collections::BTreeMap;

// unit-capacity network for a family of sets: node 0 is the source, node 1
// the sink, then one node per set, then one node per distinct element
pub struct SetNetwork<E> {
    pub graph: Graph<u32>,
    pub source: usize,
    pub sink: usize,
    num_sets: usize,
    elements: Vec<E>,
}

impl<E> SetNetwork<E>
where
    E: Copy + Ord,
{
    pub fn build(family: &[Vec<E>]) -> Self {
        let mut graph = Graph::default();
        let source = graph.add_node();
        let sink = graph.add_node();
        let set_nodes = graph.add_nodes(family.len());

        let elements: Vec<E> = family.iter().flatten().copied().sorted().dedup().collect();
        let element_nodes = graph.add_nodes(elements.len());
        let node_of: BTreeMap<E, usize> = elements.iter().copied().zip(element_nodes.iter().copied()).collect();

        for (&set_node, members) in set_nodes.iter().zip(family) {
            graph.connect(source, set_node, 1).unwrap();
            for member in members {
                graph.connect(set_node, node_of[member], 1).unwrap();
            }
        }
        // sink edges, declared from the sink's perspective
        for &element_node in &element_nodes {
            graph.connect_reverse(sink, element_node, 1).unwrap();
        }

        SetNetwork { graph, source, sink, num_sets: family.len(), elements }
    }

    // index of the set behind a set node
    pub fn set_at(&self, node: usize) -> Option<usize> {
        if node < 2 || node >= 2 + self.num_sets {
            return None;
        }
        Some(node - 2)
    }

    // element behind an element node
    pub fn element_at(&self, node: usize) -> Option<E> {
        if node < 2 + self.num_sets {
            return None;
        }
        self.elements.get(node - 2 - self.num_sets).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_and_unit_capacities() {
        let network = SetNetwork::build(&[vec![10, 20], vec![20, 30]]);

        // source, sink, two set nodes, three element nodes
        assert_eq!(network.graph.num_nodes(), 7);
        assert_eq!(network.source, 0);
        assert_eq!(network.sink, 1);
        assert_eq!(network.set_at(2), Some(0));
        assert_eq!(network.set_at(3), Some(1));
        assert_eq!(network.set_at(4), None);
        assert_eq!(network.element_at(3), None);
        assert_eq!(network.element_at(4), Some(10));
        assert_eq!(network.element_at(5), Some(20));
        assert_eq!(network.element_at(6), Some(30));

        // two source edges, four membership edges, three sink edges
        assert_eq!(network.graph.num_edges(), 9);
        for edge_id in 0..network.graph.num_edges() {
            let edge = network.graph.get_edge(edge_id).unwrap();
            assert_eq!(edge.capacity, 1);
            assert_eq!(edge.flow, 0);
            assert!(!edge.removed);
        }
    }

    #[test]
    fn sink_edges_leave_the_element_nodes() {
        let network = SetNetwork::build(&[vec![7u32]]);

        let edge = network.graph.get_edge(network.graph.num_edges() - 1).unwrap();
        assert_eq!(network.element_at(edge.tail), Some(7));
        assert_eq!(edge.head, network.sink);
    }

    #[test]
    fn elements_shared_between_sets_get_a_single_node() {
        let network = SetNetwork::build(&[vec![1, 2], vec![2, 1], vec![2]]);
        // source, sink, three set nodes, two element nodes
        assert_eq!(network.graph.num_nodes(), 7);
    }
}
