//! Benchmarks for setup/teardown composition.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pagekit_include::SetupTeardownIncluder;
use pagekit_tree::{PageId, PageTree};

/// Build a chain of `depth` suites with fragments at the top and a test page
/// at the bottom. Every level gets `breadth` sibling pages.
fn create_chain(depth: usize, breadth: usize) -> (PageTree, PageId) {
    let mut tree = PageTree::new("");
    let root = tree.root();
    for name in ["SuiteSetUp", "SetUp", "TearDown", "SuiteTearDown"] {
        tree.add_page(root, name).unwrap();
    }

    let mut current = root;
    for level in 0..depth {
        for i in 0..breadth {
            tree.add_page(current, format!("Sibling{i}")).unwrap();
        }
        current = tree.add_page(current, format!("Suite{level}")).unwrap();
    }

    let test = tree.add_page(current, "LoginTest").unwrap();
    tree.set_attribute(test, "Test", true).unwrap();
    tree.set_content(test, "|check|login|").unwrap();
    (tree, test)
}

fn bench_render_depth(c: &mut Criterion) {
    let includer = SetupTeardownIncluder::new();
    let mut group = c.benchmark_group("render_depth");

    for depth in [1, 8, 64] {
        let (tree, test) = create_chain(depth, 4);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| includer.render(&tree, test, true).unwrap());
        });
    }

    group.finish();
}

fn bench_render_non_test(c: &mut Criterion) {
    let includer = SetupTeardownIncluder::new();
    let (tree, _) = create_chain(8, 4);
    let root = tree.root();

    c.bench_function("render_non_test_page", |b| {
        b.iter(|| includer.render(&tree, root, true).unwrap());
    });
}

criterion_group!(benches, bench_render_depth, bench_render_non_test);
criterion_main!(benches);
