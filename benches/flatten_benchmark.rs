//! Flatten benchmark: Measure tree flattening and input layout.
//!
//! Target: a 100-line panel plus input flattens in well under a frame (16ms).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pink::{render_to_lines, Input, Node, Panel, PresenterConfig, Presenter, TermSize, Text};

fn tree(lines: usize, input: &Input) -> Node<'_> {
    let body: Node = (0..lines)
        .map(|i| Node::from(Text::new(format!("Line {i}: the quick brown fox"))))
        .collect();
    Node::sequence([
        Node::from(Panel::new(body).title("bench").padding(1)),
        Node::from(input),
    ])
}

fn flatten_panel(c: &mut Criterion) {
    let mut input = Input::new().width(78);
    input.insert("hello world");

    c.bench_function("flatten_panel_100", |b| {
        b.iter(|| render_to_lines(black_box(&tree(100, &input))))
    });
}

fn input_trimming(c: &mut Criterion) {
    let mut ascii = Input::new().width(40);
    ascii.insert(&"x".repeat(1000));

    let mut wide = Input::new().width(40);
    wide.insert(&"日本語".repeat(300));

    c.bench_function("input_trim_ascii", |b| b.iter(|| black_box(&ascii).render()));
    c.bench_function("input_trim_cjk", |b| b.iter(|| black_box(&wide).render()));
}

fn present_inline(c: &mut Criterion) {
    let input = Input::new().width(78);
    let result = render_to_lines(&tree(20, &input)).expect("tree renders");
    let mut presenter =
        Presenter::with_writer(std::io::sink(), PresenterConfig::fixed(TermSize::new(80, 50)));

    c.bench_function("present_inline", |b| {
        b.iter(|| presenter.present(black_box(&result.lines), result.caret, false))
    });
}

criterion_group!(benches, flatten_panel, input_trimming, present_inline);
criterion_main!(benches);
