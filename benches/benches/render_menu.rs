// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trellis_matcher::{Context, CoreMatcher, Matcher, UrlVoter};
use trellis_menu::{ItemId, ItemOption, Menu};
use trellis_render::{ListRenderer, RenderOption, Renderer};

/// A full tree with `fanout` children per item, `depth` levels below the root.
fn gen_menu(fanout: usize, depth: usize) -> (Menu, ItemId, usize) {
    let mut menu = Menu::new();
    let root = menu.create_item("root", []).unwrap();
    let mut frontier = vec![(root, String::new())];
    let mut count = 0;
    for _ in 0..depth {
        let mut next = Vec::with_capacity(frontier.len() * fanout);
        for (parent, path) in frontier {
            for i in 0..fanout {
                let uri = format!("{path}/n{i}");
                let id = menu
                    .add_child(
                        parent,
                        format!("n{i}"),
                        [
                            ItemOption::label(format!("Item {i}")),
                            ItemOption::uri(uri.clone()),
                            ItemOption::position((fanout - i) as i32),
                        ],
                    )
                    .unwrap();
                next.push((id, uri));
                count += 1;
            }
        }
        frontier = next;
    }
    (menu, root, count)
}

fn last_leaf_url(fanout: usize, depth: usize) -> String {
    let step = format!("/n{}", fanout - 1);
    format!("http://localhost{}", step.repeat(depth))
}

fn bench_list_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_render");
    for &(fanout, depth) in &[(4_usize, 3_usize), (8, 3), (6, 4)] {
        let (menu, root, count) = gen_menu(fanout, depth);
        let ctx = Context::new().with_url(last_leaf_url(fanout, depth));
        let renderer = ListRenderer::new(CoreMatcher::new().with_voter(UrlVoter));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("full_f{fanout}_d{depth}"), |b| {
            b.iter(|| {
                let out = renderer
                    .render(&ctx, menu.item(root).unwrap(), &[])
                    .unwrap();
                black_box(out);
            });
        });
        group.bench_function(format!("compressed_f{fanout}_d{depth}"), |b| {
            b.iter(|| {
                let out = renderer
                    .render(&ctx, menu.item(root).unwrap(), &[RenderOption::compressed(true)])
                    .unwrap();
                black_box(out);
            });
        });
        group.bench_function(format!("matching_depth2_f{fanout}_d{depth}"), |b| {
            b.iter(|| {
                let out = renderer
                    .render(&ctx, menu.item(root).unwrap(), &[RenderOption::MatchingDepth(Some(2))])
                    .unwrap();
                black_box(out);
            });
        });
    }
    group.finish();
}

fn bench_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");
    let (menu, root, count) = gen_menu(8, 3);
    let ctx = Context::new().with_url(last_leaf_url(8, 3));
    let matcher = CoreMatcher::new().with_voter(UrlVoter);
    group.throughput(Throughput::Elements(count as u64));
    group.bench_function("is_ancestor_cold", |b| {
        b.iter(|| {
            matcher.clear();
            black_box(matcher.is_ancestor(&ctx, menu.item(root).unwrap(), None));
        });
    });
    group.bench_function("is_ancestor_warm", |b| {
        matcher.is_ancestor(&ctx, menu.item(root).unwrap(), None);
        b.iter(|| black_box(matcher.is_ancestor(&ctx, menu.item(root).unwrap(), None)));
    });
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.bench_function("build_and_reorder_f8_d3", |b| {
        b.iter_batched(
            || (),
            |()| {
                let (mut menu, root, _) = gen_menu(8, 3);
                menu.reorder_children(root);
                black_box(menu);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_list_render, bench_matcher, bench_build);
criterion_main!(benches);
