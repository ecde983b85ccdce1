use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;
use std::collections::VecDeque;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Orientation {
    Forward,
    Backward,
}

// one step of an augmenting path: an edge index plus the direction it is
// traversed in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    pub edge: usize,
    pub orientation: Orientation,
}

#[derive(Default)]
pub struct PathSearch {
    que: VecDeque<usize>,
    discovery: Vec<Option<Step>>,
}

impl PathSearch {
    // bfs over the residual network; returns the edges of a shortest
    // source-sink path in source-to-sink order, empty if the sink is
    // unreachable
    pub fn find<Flow>(&mut self, graph: &Graph<Flow>, source: usize, sink: usize) -> Vec<Step>
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.discovery.clear();
        self.discovery.resize(graph.num_nodes(), None);
        self.que.clear();
        self.que.push_back(source);

        'bfs: while let Some(u) = self.que.pop_front() {
            // forward residual edges first, then backward, in adjacency order
            for &edge_id in graph.outgoing(u) {
                let edge = &graph.edges[edge_id];
                if edge.removed || edge.head == source || self.discovery[edge.head].is_some() {
                    continue;
                }
                debug_assert!(edge.residual_capacity() > Flow::zero());

                self.discovery[edge.head] = Some(Step { edge: edge_id, orientation: Orientation::Forward });
                if edge.head == sink {
                    break 'bfs;
                }
                self.que.push_back(edge.head);
            }

            for &edge_id in graph.incoming(u) {
                let edge = &graph.edges[edge_id];
                // backward residual capacity is the flow itself; a saturated
                // edge can still be canceled
                if edge.flow == Flow::zero() || edge.tail == source || self.discovery[edge.tail].is_some() {
                    continue;
                }

                self.discovery[edge.tail] = Some(Step { edge: edge_id, orientation: Orientation::Backward });
                if edge.tail == sink {
                    break 'bfs;
                }
                self.que.push_back(edge.tail);
            }
        }

        // walk the discovery steps back from the sink
        let mut path = Vec::new();
        let mut v = sink;
        while v != source {
            let step = match self.discovery[v] {
                Some(step) => step,
                None => return Vec::new(),
            };
            path.push(step);

            let edge = &graph.edges[step.edge];
            v = match step.orientation {
                Orientation::Forward => edge.tail,
                Orientation::Backward => edge.head,
            };
        }
        path.reverse();

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_shortest_path_in_source_to_sink_order() {
        let mut graph = Graph::<i32>::default();
        graph.add_nodes(4);
        let e0 = graph.connect(0, 1, 1).unwrap();
        let e1 = graph.connect(1, 3, 1).unwrap();
        graph.connect(0, 2, 1).unwrap();
        graph.connect(2, 3, 1).unwrap();

        let mut search = PathSearch::default();
        let path = search.find(&graph, 0, 3);

        assert_eq!(
            path,
            vec![
                Step { edge: e0, orientation: Orientation::Forward },
                Step { edge: e1, orientation: Orientation::Forward },
            ]
        );
    }

    #[test]
    fn returns_empty_when_the_sink_is_unreachable() {
        let mut graph = Graph::<i32>::default();
        graph.add_nodes(3);
        graph.connect(0, 1, 1).unwrap();

        let mut search = PathSearch::default();
        assert!(search.find(&graph, 0, 2).is_empty());
    }

    #[test]
    fn skips_removed_edges() {
        let mut graph = Graph::<i32>::default();
        graph.add_nodes(2);
        let e0 = graph.connect(0, 1, 1).unwrap();
        graph.edges[e0].flow = 1;
        graph.edges[e0].removed = true;

        let mut search = PathSearch::default();
        assert!(search.find(&graph, 0, 1).is_empty());
    }

    #[test]
    fn traverses_backward_residual_edges() {
        // 1 -> 2 is saturated; the only path cancels it
        let mut graph = Graph::<i32>::default();
        graph.add_nodes(4);
        let e0 = graph.connect(0, 2, 1).unwrap();
        let e1 = graph.connect(1, 2, 1).unwrap();
        let e2 = graph.connect(1, 3, 1).unwrap();
        graph.edges[e1].flow = 1;
        graph.edges[e1].removed = true;

        let mut search = PathSearch::default();
        let path = search.find(&graph, 0, 3);

        assert_eq!(
            path,
            vec![
                Step { edge: e0, orientation: Orientation::Forward },
                Step { edge: e1, orientation: Orientation::Backward },
                Step { edge: e2, orientation: Orientation::Forward },
            ]
        );
    }

    #[test]
    fn each_node_is_discovered_once() {
        // parallel edges: only the first can appear on the path
        let mut graph = Graph::<i32>::default();
        graph.add_nodes(2);
        let e0 = graph.connect(0, 1, 1).unwrap();
        graph.connect(0, 1, 1).unwrap();

        let mut search = PathSearch::default();
        let path = search.find(&graph, 0, 1);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].edge, e0);
    }
}
