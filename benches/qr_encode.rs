use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_encode::encoder::QrEncoder;
use rust_qr_encode::encoder::codewords;
use rust_qr_encode::encoder::{Payload, Segment, TextEncoding};
use rust_qr_encode::{ECLevel, EncodeOptions, Encoder, Mode, Version, encode_with};

fn bench_encode_hello_world(c: &mut Criterion) {
    let options = EncodeOptions::new().with_ec_level(ECLevel::Q);
    c.bench_function("encode_hello_world_q", |b| {
        b.iter(|| encode_with(black_box("HELLO WORLD"), &options))
    });
}

fn bench_encode_url(c: &mut Criterion) {
    let options = EncodeOptions::new().with_ec_level(ECLevel::M);
    let url = "https://example.com/products/12345?ref=benchmark&lang=en";
    c.bench_function("encode_url_m", |b| {
        b.iter(|| encode_with(black_box(url), &options))
    });
}

fn bench_encode_large_numeric(c: &mut Criterion) {
    let options = EncodeOptions::new().with_ec_level(ECLevel::L);
    let digits = "0123456789".repeat(300);
    c.bench_function("encode_numeric_3000", |b| {
        b.iter(|| encode_with(black_box(digits.as_str()), &options))
    });
}

fn bench_fixed_mask(c: &mut Criterion) {
    // Skips the eight mask trials
    let options = EncodeOptions::new()
        .with_ec_level(ECLevel::M)
        .with_mask(rust_qr_encode::MaskPattern::Pattern3);
    let text = "The quick brown fox jumps over the lazy dog";
    c.bench_function("encode_fixed_mask", |b| {
        b.iter(|| encode_with(black_box(text), &options))
    });
}

fn bench_select_mask_v10(c: &mut Criterion) {
    let version = Version::new(10).unwrap();
    let text = "A".repeat(200);
    let segment = Segment::encode(
        Mode::Alphanumeric,
        Payload::Text(&text),
        TextEncoding::Latin1,
        None,
    )
    .unwrap();
    let stream = codewords::build(&segment, version, ECLevel::M).unwrap();
    c.bench_function("select_mask_v10", |b| {
        b.iter(|| QrEncoder::select_mask(version, ECLevel::M, black_box(&stream)))
    });
}

fn bench_encode_batch(c: &mut Criterion) {
    let encoder = Encoder::with_options(EncodeOptions::new().with_ec_level(ECLevel::M));
    let owned: Vec<String> = (0..64).map(|i| format!("ITEM-{:05}", i)).collect();
    let texts: Vec<&str> = owned.iter().map(String::as_str).collect();
    c.bench_function("encode_batch_64", |b| {
        b.iter(|| encoder.encode_batch(black_box(&texts)))
    });
}

criterion_group!(
    benches,
    bench_encode_hello_world,
    bench_encode_url,
    bench_encode_large_numeric,
    bench_fixed_mask,
    bench_select_mask_v10,
    bench_encode_batch
);
criterion_main!(benches);
