use flow_transversal::transversal::matching::Matching;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, BufRead};

// console harness: a set count on the first line, then one line per set of
// whitespace-separated elements terminated by a sentinel 0; prints Y and
// the representatives when a transversal exists, N otherwise
fn main() {
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).unwrap();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let count: usize = lines
        .next()
        .expect("missing set count")
        .unwrap()
        .trim()
        .parse()
        .expect("set count is not a number");

    let mut family = Vec::with_capacity(count);
    for _ in 0..count {
        let line = lines.next().expect("missing set line").unwrap();
        let members: Vec<u64> = line
            .split_whitespace()
            .map(|token| token.parse().expect("element is not a number"))
            .take_while(|&element| element != 0)
            .collect();
        family.push(members);
    }

    let transversal = Matching::default().solve(&family);
    if transversal.complete {
        println!("Y");
        for (set, element) in transversal.representatives {
            println!("{}: {element}", set + 1);
        }
    } else {
        println!("N");
    }
}
