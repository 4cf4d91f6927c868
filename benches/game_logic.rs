use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pairs::core::deck::doubled_identities;
use tui_pairs::core::{Deck, GameSnapshot, GameState, SimpleRng};
use tui_pairs::term::{changed_runs, FrameBuffer, GameView, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.select(0);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
            state.drain_events().for_each(drop);
        })
    });
}

fn bench_deal(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("deal_shuffled_deck", |b| {
        b.iter(|| black_box(Deck::shuffled(&mut rng)))
    });
}

fn bench_miss_cycle(c: &mut Criterion) {
    let mut state = GameState::with_deck(Deck::from_layout(doubled_identities()).unwrap());

    c.bench_function("select_miss_and_rollback", |b| {
        b.iter(|| {
            state.select(black_box(0));
            state.select(black_box(1));
            state.tick(1000);
            state.drain_events().for_each(drop);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();
    state.snapshot_into(&mut snap);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Some(5), vp, &mut fb))
    });
}

fn bench_diff(c: &mut Criterion) {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut state = GameState::new(12345);
    let before = view.render(&state.snapshot(), Some(0), vp);
    state.select(0);
    let after = view.render(&state.snapshot(), Some(0), vp);
    let mut runs = Vec::with_capacity(64);

    c.bench_function("changed_runs_one_flip", |b| {
        b.iter(|| changed_runs(black_box(&before), black_box(&after), &mut runs))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_deal,
    bench_miss_cycle,
    bench_render,
    bench_diff
);
criterion_main!(benches);
