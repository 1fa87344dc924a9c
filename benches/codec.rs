use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use escapist::{escape, unescape, Escape, Specials};

const SENTENCE: &str = "It's a \"quoted\" line with a path C:\\temp and some text. ";
const ESCAPED: &str = r"It\'s a \u{1F980}\n tab\there \x41\u00e9 \ud83d\udca9 \\ plain text. ";

fn repeated(unit: &str, times: usize) -> String {
    unit.repeat(times)
}

fn benchmark_escape_sizes(c: &mut Criterion) {
    let specials = Specials::from("'\"");
    let mut group = c.benchmark_group("escape");

    for size in [1, 10, 100, 1000].iter() {
        let text = repeated(SENTENCE, *size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| escape(black_box(text), black_box(&specials)))
        });
    }
    group.finish();
}

fn benchmark_escape_marker_special(c: &mut Criterion) {
    let specials = Specials::from(['\\', '\'', '"']);
    let text = repeated(SENTENCE, 100);

    c.bench_function("escape_marker_special", |b| {
        b.iter(|| escape(black_box(&text), black_box(&specials)))
    });
}

fn benchmark_escape_streaming(c: &mut Criterion) {
    let specials = Specials::from("'\"");
    let text = repeated(SENTENCE, 100);

    c.bench_function("escape_streaming_count", |b| {
        b.iter(|| Escape::new(black_box(&text).chars(), &specials).count())
    });
}

fn benchmark_unescape_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("unescape");

    for size in [1, 10, 100, 1000].iter() {
        let text = repeated(ESCAPED, *size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| unescape(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_unescape_plain(c: &mut Criterion) {
    let text = repeated("no escapes in this text at all, just words. ", 100);

    c.bench_function("unescape_plain_text", |b| {
        b.iter(|| unescape(black_box(&text)))
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let specials = Specials::from("'\"");
    let text = repeated("It's \"fine\". ", 100);

    c.bench_function("roundtrip_quotes", |b| {
        b.iter(|| {
            let escaped = escape(black_box(&text), &specials);
            let _unescaped = unescape(black_box(&escaped)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_escape_sizes,
    benchmark_escape_marker_special,
    benchmark_escape_streaming,
    benchmark_unescape_sizes,
    benchmark_unescape_plain,
    benchmark_roundtrip
);
criterion_main!(benches);
