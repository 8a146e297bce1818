//! Benchmarks for the render selectors.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use marksmith::document::{Leaf, Mark, sample};
use marksmith::input::PrimaryModifier;
use marksmith::render::{
    Attributes, EditorConfig, RenderLeafProps, View, render_leaf, render_tree,
};

fn bench_render_tree(c: &mut Criterion) {
    let nodes = sample();
    let config = EditorConfig::new(PrimaryModifier::Control);

    c.bench_function("render_tree_sample", |b| {
        b.iter(|| render_tree(&config, black_box(&nodes), Attributes::leaf));
    });
}

fn bench_render_leaf(c: &mut Criterion) {
    let leaf = Leaf::new("formatted")
        .with(Mark::Bold)
        .with(Mark::Italic)
        .with(Mark::Code)
        .with(Mark::Underline);

    c.bench_function("render_leaf_all_marks", |b| {
        b.iter(|| {
            render_leaf(RenderLeafProps {
                leaf: black_box(&leaf),
                children: View::text(leaf.text.clone()),
                attributes: Attributes::leaf(&[0, 0]),
            })
        });
    });
}

criterion_group!(benches, bench_render_tree, bench_render_leaf);
criterion_main!(benches);
