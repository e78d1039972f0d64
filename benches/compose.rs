use criterion::{black_box, criterion_group, criterion_main, Criterion};
use handlebars::Handlebars;
use serde_json::json;

use courrier::{Header, Headers};

fn bench_compose_headers(c: &mut Criterion) {
    let headers = Headers::new()
        .with(Header::new(
            "to",
            ["test@test.mailu.io", "admin@test.mailu.io"],
        ))
        .with(Header::new("from", ["admin@test.mailu.io"]))
        .with(Header::new("subject", ["Benchmarks"]));

    c.bench_function("compose_headers", move |b| {
        b.iter(|| black_box(&headers).formatted())
    });
}

fn bench_compose_and_render(c: &mut Criterion) {
    let mut registry = Handlebars::new();
    registry
        .register_template_string("bench", "<h1>Hello, {{name}}!</h1>")
        .unwrap();

    let headers = Headers::new().with(Header::new("subject", ["Benchmarks"]));
    let data = json!({ "name": "World" });

    c.bench_function("compose_and_render", move |b| {
        b.iter(|| {
            let mut message = black_box(&headers).formatted();
            registry
                .render_to_write("bench", &data, &mut message)
                .unwrap();
            message
        })
    });
}

criterion_group!(benches, bench_compose_headers, bench_compose_and_render);
criterion_main!(benches);
