use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use openmsg_core::ArrayChar;

fn bench_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign");

    for len in [4, 16, 64, 256] {
        let text = "x".repeat(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("capacity_32", len), &text, |b, text| {
            let mut buf = ArrayChar::<32>::new();
            b.iter(|| {
                buf.assign_str(black_box(text));
            });
        });
        group.bench_with_input(BenchmarkId::new("capacity_32_terminated", len), &text, |b, text| {
            let mut buf = ArrayChar::<32, true>::new();
            b.iter(|| {
                buf.assign_str(black_box(text));
            });
        });
    }

    group.finish();
}

fn bench_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("length");

    for len in [0, 15, 63] {
        let buf = ArrayChar::<64>::from_bytes(&vec![b'a'; len]);
        group.bench_with_input(BenchmarkId::from_parameter(len), &buf, |b, buf| {
            b.iter(|| black_box(buf).length(true));
        });
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let short = ArrayChar::<16>::from_str("testmefurther");
    let long = ArrayChar::<64>::from_str("testmefurther");

    c.bench_function("compare/16_vs_64", |b| {
        b.iter(|| black_box(&short) == black_box(&long));
    });
}

criterion_group!(benches, bench_assign, bench_length, bench_compare);
criterion_main!(benches);
