use flow_transversal::maximum_flow::edmonds_karp::EdmondsKarp;
use flow_transversal::maximum_flow::graph::Graph;
use flow_transversal::maximum_flow::status::Status;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).unwrap();

    let mut graph = Graph::default();
    graph.add_nodes(7);
    let (a, b, c, d, e, f, g) = (0, 1, 2, 3, 4, 5, 6);

    let edges = vec![
        graph.connect(a, d, 3).unwrap(),
        graph.connect(a, b, 3).unwrap(),
        graph.connect_reverse(a, c, 3).unwrap(),
        graph.connect_reverse(b, e, 1).unwrap(),
        graph.connect(b, c, 4).unwrap(),
        graph.connect(c, d, 1).unwrap(),
        graph.connect(c, e, 2).unwrap(),
        graph.connect(d, f, 6).unwrap(),
        graph.connect(d, e, 2).unwrap(),
        graph.connect(e, g, 1).unwrap(),
        graph.connect(f, g, 9).unwrap(),
    ];

    let status = EdmondsKarp::default().solve(a, g, &mut graph);

    match status {
        Status::Optimal => {
            println!("maximum flow:{}", graph.maximum_flow(a));
            for edge_id in edges {
                println!("{:?}", graph.get_edge(edge_id).unwrap());
            }
        }
        _ => unreachable!(),
    }
}
