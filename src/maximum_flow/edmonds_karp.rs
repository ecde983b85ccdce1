use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::search::{Orientation, PathSearch, Step};
use crate::maximum_flow::status::Status;
use num_traits::NumAssign;

#[derive(Default)]
pub struct EdmondsKarp {
    search: PathSearch,
    augmentations: usize,
}

impl EdmondsKarp {
    pub fn solve<Flow>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status
    where
        Flow: NumAssign + Ord + Copy,
    {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }

        self.augmentations = 0;
        loop {
            let path = self.search.find(graph, source, sink);
            if path.is_empty() {
                break;
            }

            let bottleneck = Self::bottleneck(graph, &path);
            Self::augment(graph, &path, bottleneck);
            self.augmentations += 1;
            log::trace!("augmented along {} edges", path.len());
        }
        log::debug!("no augmenting path left after {} augmentations", self.augmentations);

        Status::Optimal
    }

    // number of augmentations performed by the last solve
    #[inline]
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    fn bottleneck<Flow>(graph: &Graph<Flow>, path: &[Step]) -> Flow
    where
        Flow: NumAssign + Ord + Copy,
    {
        path.iter()
            .map(|step| {
                let edge = &graph.edges[step.edge];
                match step.orientation {
                    Orientation::Forward => edge.residual_capacity(),
                    Orientation::Backward => edge.flow,
                }
            })
            .min()
            .unwrap()
    }

    // apply the bottleneck to the whole path in one tight loop; forward
    // edges gain flow, backward edges lose it, and the removed flag keeps
    // tracking saturation on both transitions
    fn augment<Flow>(graph: &mut Graph<Flow>, path: &[Step], bottleneck: Flow)
    where
        Flow: NumAssign + Ord + Copy,
    {
        debug_assert!(bottleneck > Flow::zero());

        for step in path {
            let edge = &mut graph.edges[step.edge];
            match step.orientation {
                Orientation::Forward => {
                    edge.flow += bottleneck;
                    debug_assert!(edge.flow <= edge.capacity);
                }
                Orientation::Backward => {
                    debug_assert!(edge.flow >= bottleneck);
                    edge.flow -= bottleneck;
                }
            }
            edge.removed = edge.flow == edge.capacity;
        }
    }
}
