use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yini::{from_str, to_string, Document, Value};

fn sample_document(sections: usize) -> Document {
    let mut doc = Document::new();
    doc.set("app_name", "bench");
    doc.set("debug", false);

    for i in 0..sections {
        let section = doc.section(format!("section_{i}"));
        section.set("host", "localhost");
        section.set("port", 8000 + i as i64);
        section.set("ratio", i as f64 + 0.5);
        section.set(
            "tags",
            Value::Array(vec![
                Value::from("primary"),
                Value::from("replica"),
                Value::Int(i as i64),
            ]),
        );
    }

    doc
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [10, 50, 100, 500].iter() {
        let doc = sample_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&sample_document(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_with_comments(c: &mut Criterion) {
    let mut text = String::from("/* generated bench input */\n");
    for i in 0..200 {
        text.push_str(&format!(
            "^ section_{i} // block {i}\nhost = 'localhost' // local only\nport = {}\n",
            8000 + i
        ));
    }

    c.bench_function("parse_with_comments", |b| {
        b.iter(|| from_str(black_box(&text)))
    });
}

criterion_group!(
    benches,
    benchmark_serialize,
    benchmark_parse,
    benchmark_parse_with_comments
);
criterion_main!(benches);
