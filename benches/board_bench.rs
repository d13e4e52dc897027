use criterion::{black_box, criterion_group, criterion_main, Criterion};
use masterdrez::core::{apply_move, generate, place, Board, Loc};

fn setup_benchmark(c: &mut Criterion) {
    c.bench_function("generate and place", |b| {
        b.iter(|| place(black_box(generate())).unwrap())
    });
}

fn move_benchmark(c: &mut Criterion) {
    let board = Board::start().unwrap();
    let king = *board.get_piece(&Loc::new(8, 15)).unwrap();

    c.bench_function("copy-on-write move", |b| {
        b.iter(|| apply_move(black_box(&board), black_box(&king), black_box(Loc::new(5, 5))).unwrap())
    });

    c.bench_function("notation round trip", |b| {
        b.iter(|| Board::from_fen(&black_box(&board).to_fen()).unwrap())
    });
}

criterion_group!(benches, setup_benchmark, move_benchmark);
criterion_main!(benches);
