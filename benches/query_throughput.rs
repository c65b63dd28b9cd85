//! Query evaluation benchmarks over synthetic layered drawings.
//!
//! Measures:
//! - Immediate and descendant queries as the drawing grows
//! - Reordering a shuffled selection into document order
//!
//! Run benchmarks: `cargo bench --bench query_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use zpath::{DocumentNode, QueryEngine, SvgDocument};
use zpath_query::DocumentOrderIndex;

/// `layers` layers of `groups` groups, each holding `paths` paths.
fn synthetic_drawing(layers: usize, groups: usize, paths: usize) -> String {
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape">"#,
    );
    for l in 0..layers {
        svg.push_str(&format!(r#"<g id="l{l}" inkscape:groupmode="layer">"#));
        for g in 0..groups {
            svg.push_str(&format!(r#"<g id="l{l}g{g}">"#));
            for p in 0..paths {
                svg.push_str(&format!(r#"<path id="l{l}g{g}p{p}" d="M0 0"/>"#));
            }
            svg.push_str("</g>");
        }
        svg.push_str("</g>");
    }
    svg.push_str("</svg>");
    svg
}

fn benchmark_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("expressions");
    let engine = QueryEngine::new();

    for groups in [10, 100, 500] {
        let svg = synthetic_drawing(4, groups, 5);
        let doc = SvgDocument::parse(&svg).expect("Failed to parse drawing");
        let root = doc.root_node();
        group.throughput(Throughput::Elements(doc.nodes().count() as u64));

        for expression in ["/l/g[0]/p", "/l/g[-10:-1]/p[-1]", "//p", "//g/p[0]"] {
            let compiled = engine.compile(expression).expect("Failed to compile");
            group.bench_with_input(
                BenchmarkId::new(expression, groups),
                &groups,
                |b, _| b.iter(|| black_box(compiled.run(root, [root]).len())),
            );
        }
    }

    group.finish();
}

fn benchmark_selection_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_ordering");

    for groups in [100, 1000] {
        let svg = synthetic_drawing(2, groups, 2);
        let doc = SvgDocument::parse(&svg).expect("Failed to parse drawing");
        let mut selection: Vec<_> = doc
            .nodes()
            .filter(|n| n.id().ends_with("p1"))
            .collect();
        selection.reverse();
        group.throughput(Throughput::Elements(selection.len() as u64));

        group.bench_with_input(BenchmarkId::new("index", groups), &groups, |b, _| {
            b.iter(|| {
                let index = DocumentOrderIndex::build(doc.root_node());
                black_box(index.order(selection.iter().copied()).len())
            })
        });
        group.bench_with_input(BenchmarkId::new("single_pass", groups), &groups, |b, _| {
            b.iter(|| {
                black_box(zpath_query::document_order(doc.root_node(), selection.iter().copied()).len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_expressions, benchmark_selection_ordering);
criterion_main!(benches);
