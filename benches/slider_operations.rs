use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::{Scheduler, SliderController, SliderTask, TerminalViewport};

/// A viewport `columns` wide holding `cards` project cards
fn viewport_with_cards(columns: u16, cards: usize) -> TerminalViewport {
    let mut viewport = TerminalViewport::new(columns, 40, 8.0, 16.0, "8px");
    viewport.card_count = cards;
    viewport
}

/// Benchmark recomputing the slider layout
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider_render");

    for card_count in [5, 100, 10_000].iter() {
        let viewport = viewport_with_cards(160, *card_count);
        let mut slider = SliderController::new();

        group.bench_with_input(
            BenchmarkId::from_parameter(card_count),
            card_count,
            |b, _| {
                b.iter(|| black_box(slider.render(black_box(&viewport))));
            },
        );
    }

    group.finish();
}

/// Benchmark paging through every card, releasing the lock between moves
fn bench_page_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider_page_through");

    for card_count in [10, 100, 1000].iter() {
        let viewport = viewport_with_cards(160, *card_count);

        group.bench_with_input(
            BenchmarkId::from_parameter(card_count),
            card_count,
            |b, _| {
                b.iter(|| {
                    let mut scheduler: Scheduler<SliderTask> = Scheduler::new();
                    let mut slider = SliderController::new();
                    slider.render(&viewport);
                    let mut until = Duration::ZERO;
                    while slider.go_next(&viewport, &mut scheduler) {
                        until += Duration::from_millis(600);
                        while let Some(task) = scheduler.next_due(until) {
                            slider.handle_task(task, &viewport);
                        }
                    }
                    black_box(slider.current_index())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a burst of resize events collapsing into one settle
fn bench_resize_burst(c: &mut Criterion) {
    c.bench_function("slider_resize_burst", |b| {
        b.iter(|| {
            let mut scheduler: Scheduler<SliderTask> = Scheduler::new();
            let mut slider = SliderController::new();
            let mut viewport = viewport_with_cards(160, 50);
            slider.render(&viewport);
            for columns in (80..160).rev() {
                viewport.resize(columns, 40);
                slider.on_viewport_resize(&mut scheduler);
            }
            while let Some(task) = scheduler.next_due(Duration::from_secs(1)) {
                slider.handle_task(task, &viewport);
            }
            black_box(slider.view())
        });
    });
}

criterion_group!(benches, bench_render, bench_page_through, bench_resize_burst);
criterion_main!(benches);
