use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::search::{Orientation, PathSearch, Step};
use crate::transversal::reduction::SetNetwork;

// one representative per set, in set order; complete when every set
// received one
pub struct Transversal<E> {
    pub representatives: Vec<(usize, E)>,
    pub complete: bool,
}

#[derive(Default)]
pub struct Matching {
    search: PathSearch,
}

impl Matching {
    // decides whether the family admits a system of distinct
    // representatives, extracting one augmenting path per matched set
    pub fn solve<E>(&mut self, family: &[Vec<E>]) -> Transversal<E>
    where
        E: Copy + Ord,
    {
        let mut network = SetNetwork::build(family);
        let mut chosen: Vec<Option<E>> = vec![None; family.len()];
        let mut matched = 0;

        loop {
            let path = self.search.find(&network.graph, network.source, network.sink);
            if path.is_empty() {
                break;
            }

            // every set -> element step on the path settles that set's
            // representative; longer paths re-route sets matched earlier
            for step in &path {
                let edge = &network.graph.edges[step.edge];
                if let (Some(set), Some(element)) = (network.set_at(edge.tail), network.element_at(edge.head)) {
                    chosen[set] = Some(element);
                }
            }

            augment_unit(&mut network.graph, &path);
            matched += 1;
            log::trace!("augmented along {} edges, {matched} sets matched", path.len());
        }
        log::debug!("matched {matched} of {} sets", family.len());

        let representatives = chosen
            .into_iter()
            .enumerate()
            .filter_map(|(set, element)| element.map(|element| (set, element)))
            .collect();

        Transversal { representatives, complete: matched == family.len() }
    }
}

// unit-capacity augmentation: the source- and sink-adjacent edges are
// consumed, every middle edge is retired in place and a fresh capacity-1
// edge is inserted in the reversed direction
fn augment_unit(graph: &mut Graph<u32>, path: &[Step]) {
    for (i, step) in path.iter().enumerate() {
        debug_assert_eq!(step.orientation, Orientation::Forward);

        let edge = &mut graph.edges[step.edge];
        edge.removed = true;
        let (tail, head) = (edge.tail, edge.head);

        if i == 0 || i + 1 == path.len() {
            continue;
        }
        graph.connect(head, tail, 1).unwrap();
    }
}
