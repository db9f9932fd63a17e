use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{Game, StepResult};
use tui_snake::term::{view, Screen};

fn bench_step(c: &mut Criterion) {
    let mut game = Game::new();
    game.restart();

    c.bench_function("simulation_step", |b| {
        b.iter(|| {
            if game.step() == StepResult::Crashed {
                game.restart();
            }
            black_box(game.snake().head());
        })
    });
}

fn bench_subdivisor_tick(c: &mut Criterion) {
    let mut game = Game::new();
    game.restart();

    c.bench_function("subdivisor_tick", |b| {
        b.iter(|| {
            black_box(game.on_tick());
        })
    });
}

fn bench_field_repaint(c: &mut Criterion) {
    let mut game = Game::new();
    game.restart();
    let mut screen = Screen::new();
    view::draw_border(&mut screen);

    c.bench_function("field_repaint", |b| {
        b.iter(|| {
            view::draw_field(&mut screen, &game);
            black_box(screen.cells().len());
        })
    });
}

criterion_group!(benches, bench_step, bench_subdivisor_tick, bench_field_repaint);
criterion_main!(benches);
