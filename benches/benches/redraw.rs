// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use storyline_date::DateParser;
use storyline_layout::{Character, Event, Location};
use storyline_thumbnail::ThumbnailCache;
use storyline_timeline::{MemoryStore, PointerButton, TimelineConfig, TimelineView};

const NAMES: [&str; 6] = ["Ada", "Bo", "Cy", "Dee", "Eli", "Fay"];
const PLACES: [&str; 3] = ["Harbor", "Mill", "Tower"];

fn store(len: usize) -> MemoryStore {
    let mut store = MemoryStore::new();
    for name in NAMES {
        store.push_character(Character::new(name));
    }
    for place in PLACES {
        store.push_location(Location::new(place));
    }
    // About four events per date, so stacks stay shallow but present.
    for i in 0..len {
        let day = i / 4;
        store.push_event(
            Event::new(format!("event {i}"), format!("{}/{}/1890", day % 28 + 1, day / 28 % 12 + 1))
                .with_characters([NAMES[i % NAMES.len()], NAMES[(i + 2) % NAMES.len()]])
                .with_activity("talks")
                .with_location(PLACES[i % PLACES.len()]),
        );
    }
    store
}

fn view(store: &MemoryStore) -> TimelineView {
    let mut view = TimelineView::with_parts(
        TimelineConfig::default(),
        DateParser::new(1890),
        ThumbnailCache::new(),
    );
    view.resize(Size::new(1_600.0, 900.0), store);
    view.set_visible(true, store);
    view
}

fn bench_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline/redraw");
    for len in [100usize, 1_000, 5_000] {
        let store = store(len);
        let mut view = view(&store);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                black_box(view.redraw(&store).map(|f| f.markers.len()));
            });
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline/drag");
    let len = 1_000;
    let store = store(len);
    group.bench_function("press_move_release", |b| {
        b.iter_batched(
            || (store.clone(), view(&store)),
            |(mut store, mut view)| {
                let grab = view
                    .frame()
                    .and_then(|f| f.markers.first())
                    .map(|m| m.center())
                    .unwrap_or(Point::ZERO);
                view.on_pointer_down(grab, PointerButton::Primary, &store);
                view.on_pointer_move(Point::new(800.0, grab.y), &store);
                view.on_pointer_up(Point::new(800.0, grab.y), PointerButton::Primary, &mut store);
                black_box((store, view));
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

fn bench_hover(c: &mut Criterion) {
    let store = store(1_000);
    let mut view = view(&store);
    let mut group = c.benchmark_group("timeline/hover");
    group.bench_function("sweep", |b| {
        b.iter(|| {
            for x in (0..1_600).step_by(8) {
                black_box(view.on_pointer_move(Point::new(f64::from(x), 450.0), &store));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_redraw, bench_drag, bench_hover);
criterion_main!(benches);
