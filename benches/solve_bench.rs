//! Benchmarks for the induction solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use induction_solver::{GameTree, InductionSolver, SolverConfig, TreeBuilder};

/// A chain of alternating decision nodes: every level can take an immediate
/// payout or pass the move on. Depth equals the number of solver passes.
fn chain_description(depth: usize) -> String {
    let mut text = String::new();
    for level in 0..depth {
        let player = if level % 2 == 0 { "A" } else { "B" };
        let next = if level + 1 < depth {
            format!("D{}", level + 1)
        } else {
            format!("T{}", depth)
        };
        text.push_str(&format!(
            "Node: D{level}\nPlayer: {player}\nActions: [take, pass]\ntake -> T{level}\npass -> {next}\n\n"
        ));
        text.push_str(&format!(
            "Terminal: T{level}\nPayoff: A gets {}, B gets {}\n\n",
            level % 7,
            (level + 3) % 7
        ));
    }
    text.push_str(&format!("Terminal: T{depth}\nPayoff: A gets 6, B gets 6\n"));
    text
}

/// A two-level fan: the root picks among `width` opponent nodes, each of
/// which picks among `leaves` terminals. The whole middle rank becomes ready
/// in the first pass.
fn wide_description(width: usize, leaves: usize) -> String {
    let mut text = String::new();
    text.push_str("Node: ROOT\nPlayer: A\nActions: [");
    for i in 0..width {
        if i > 0 {
            text.push_str(", ");
        }
        text.push_str(&format!("a{i}"));
    }
    text.push_str("]\n");
    for i in 0..width {
        text.push_str(&format!("a{i} -> M{i}\n"));
    }
    text.push('\n');

    for i in 0..width {
        text.push_str(&format!("Node: M{i}\nPlayer: B\nActions: ["));
        for j in 0..leaves {
            if j > 0 {
                text.push_str(", ");
            }
            text.push_str(&format!("b{j}"));
        }
        text.push_str("]\n");
        for j in 0..leaves {
            text.push_str(&format!("b{j} -> L{i}_{j}\n"));
        }
        text.push('\n');
        for j in 0..leaves {
            text.push_str(&format!(
                "Terminal: L{i}_{j}\nPayoff: A gets {}, B gets {}\n\n",
                (i + j) % 11,
                (i * j) % 11
            ));
        }
    }
    text
}

fn build(description: &str) -> GameTree {
    TreeBuilder::new()
        .parse(description)
        .expect("benchmark description is well formed")
}

fn parse_benchmark(c: &mut Criterion) {
    let description = chain_description(1_000);

    c.bench_function("parse_chain_1000", |b| {
        b.iter(|| {
            let mut builder = TreeBuilder::new();
            builder.parse(black_box(&description))
        })
    });
}

fn solve_chain_benchmark(c: &mut Criterion) {
    let base = build(&chain_description(1_000));

    c.bench_function("solve_chain_1000", |b| {
        b.iter(|| {
            let mut tree = base.clone();
            let mut solver = InductionSolver::new(SolverConfig::default());
            let solution = solver.solve(&mut tree).expect("chain is solvable");
            black_box(solution)
        })
    });
}

fn solve_wide_benchmark(c: &mut Criterion) {
    let base = build(&wide_description(500, 8));

    c.bench_function("solve_wide_sequential", |b| {
        b.iter(|| {
            let mut tree = base.clone();
            let mut solver = InductionSolver::new(SolverConfig::default());
            black_box(solver.solve(&mut tree).expect("fan is solvable"))
        })
    });

    c.bench_function("solve_wide_parallel", |b| {
        b.iter(|| {
            let mut tree = base.clone();
            let mut solver =
                InductionSolver::new(SolverConfig::default().with_parallel(true));
            black_box(solver.solve(&mut tree).expect("fan is solvable"))
        })
    });
}

criterion_group!(
    benches,
    parse_benchmark,
    solve_chain_benchmark,
    solve_wide_benchmark
);
criterion_main!(benches);
