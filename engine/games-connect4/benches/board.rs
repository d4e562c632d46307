use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use games_connect4::{Board, HeuristicVariant, Player};

/// A middlegame position with discs in every column.
fn midgame() -> Board {
    Board::from_moves(Player::A, &[3, 3, 2, 4, 4, 2, 1, 5, 5, 0, 6, 3])
}

fn bench_move_unmove(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect4_move");
    group.bench_function("move_unmove_all_columns", |b| {
        let mut board = midgame();
        b.iter(|| {
            for col in board.legal_moves() {
                let child = board.play(col);
                black_box(child.move_count());
            }
        });
    });
    group.bench_function("legal_moves", |b| {
        let board = midgame();
        b.iter(|| black_box(board.legal_moves()));
    });
    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect4_eval");
    group.bench_function("check_win", |b| {
        let board = midgame();
        b.iter(|| black_box(board.check_win(Player::A)));
    });
    for variant in [
        HeuristicVariant::Threats,
        HeuristicVariant::CenterColumn,
        HeuristicVariant::CenterBottom,
    ] {
        group.bench_function(format!("heuristic_{}", variant.index()), |b| {
            let board = midgame();
            b.iter(|| black_box(board.heuristic(variant)));
        });
    }
    group.finish();
}

fn bench_clone_vs_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect4_copy");
    group.bench_function("clone_then_move", |b| {
        let board = midgame();
        b.iter_batched(
            || board.clone(),
            |mut copy| {
                copy.make_move(3);
                copy
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_move_unmove, bench_evaluation, bench_clone_vs_undo);
criterion_main!(benches);
