use std::hint::black_box;
use std::sync::Arc;

use arc_recycle::data::default_catalog;
use arc_recycle::items::Category;
use arc_recycle::view::{derive, FilterState, ViewCache};
use criterion::{criterion_group, criterion_main, Criterion};

fn filter(term: &str, categories: &[Category]) -> FilterState {
    let mut state = FilterState::new();
    state.set_search_term(term);
    for category in categories {
        state.toggle_category(*category);
    }
    state
}

fn bench_derive(c: &mut Criterion) {
    let catalog = default_catalog();
    let unfiltered = FilterState::new();
    let narrowed = filter("parts", &[Category::Mechanical, Category::Industrial]);

    c.bench_function("derive.unfiltered", |b| {
        b.iter(|| derive(black_box(&catalog), black_box(&unfiltered)));
    });

    c.bench_function("derive.search_and_categories", |b| {
        b.iter(|| derive(black_box(&catalog), black_box(&narrowed)));
    });
}

fn bench_view_cache(c: &mut Criterion) {
    let catalog = Arc::new(default_catalog());
    let steady = filter("gear", &[]);
    let states = [filter("g", &[]), filter("ge", &[]), filter("gea", &[])];

    c.bench_function("view_cache.hit", |b| {
        let mut cache = ViewCache::new();
        cache.get(&catalog, &steady);
        b.iter(|| cache.get(&catalog, black_box(&steady)).total);
    });

    c.bench_function("view_cache.typing", |b| {
        let mut cache = ViewCache::new();
        b.iter(|| {
            for state in &states {
                black_box(cache.get(&catalog, state).total);
            }
        });
    });
}

criterion_group!(benches, bench_derive, bench_view_cache);
criterion_main!(benches);
