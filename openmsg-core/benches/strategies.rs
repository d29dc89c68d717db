use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use openmsg_core::{
    Accelerated, BigEndian, Bswap, EndianWrapper, LittleEndian, MemoryWrapper, Robust, Scalar,
};

const COUNT: usize = 4096;

fn convert_all<T: Scalar, W: MemoryWrapper>(values: &[T], out: &mut [EndianWrapper<T, BigEndian, W>]) {
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = EndianWrapper::new(*value);
    }
}

fn bench_strategy<T: Scalar, W: MemoryWrapper>(c: &mut Criterion, type_name: &str, values: &[T]) {
    let mut group = c.benchmark_group(format!("to_memory/{}", type_name));
    group.throughput(Throughput::Elements(values.len() as u64));

    let mut out = vec![EndianWrapper::<T, BigEndian, W>::default(); values.len()];
    group.bench_with_input(BenchmarkId::from_parameter(W::NAME), values, |b, values| {
        b.iter(|| convert_all::<T, W>(black_box(values), &mut out));
    });

    group.finish();
}

fn bench_to_memory(c: &mut Criterion) {
    let u16s: Vec<u16> = (0..COUNT as u16).collect();
    let u32s: Vec<u32> = (0..COUNT as u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
    let u64s: Vec<u64> = (0..COUNT as u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect();
    let f64s: Vec<f64> = (0..COUNT).map(|i| i as f64 * 0.5).collect();

    bench_strategy::<u16, Bswap>(c, "u16", &u16s);
    bench_strategy::<u16, Robust>(c, "u16", &u16s);
    bench_strategy::<u16, Accelerated>(c, "u16", &u16s);

    bench_strategy::<u32, Bswap>(c, "u32", &u32s);
    bench_strategy::<u32, Robust>(c, "u32", &u32s);
    bench_strategy::<u32, Accelerated>(c, "u32", &u32s);

    bench_strategy::<u64, Bswap>(c, "u64", &u64s);
    bench_strategy::<u64, Robust>(c, "u64", &u64s);
    bench_strategy::<u64, Accelerated>(c, "u64", &u64s);

    bench_strategy::<f64, Bswap>(c, "f64", &f64s);
    bench_strategy::<f64, Robust>(c, "f64", &f64s);
    bench_strategy::<f64, Accelerated>(c, "f64", &f64s);
}

fn bench_to_host(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_host/u64");

    let memory: Vec<u64> = (0..COUNT as u64)
        .map(|i| Bswap::to_memory::<u64, LittleEndian>(i))
        .collect();
    group.throughput(Throughput::Elements(memory.len() as u64));

    group.bench_function("bswap", |b| {
        b.iter(|| {
            memory
                .iter()
                .map(|m| Bswap::to_host::<u64, BigEndian>(black_box(*m)))
                .fold(0u64, u64::wrapping_add)
        });
    });
    group.bench_function("robust", |b| {
        b.iter(|| {
            memory
                .iter()
                .map(|m| Robust::to_host::<u64, BigEndian>(black_box(*m)))
                .fold(0u64, u64::wrapping_add)
        });
    });
    group.bench_function("accelerated", |b| {
        b.iter(|| {
            memory
                .iter()
                .map(|m| Accelerated::to_host::<u64, BigEndian>(black_box(*m)))
                .fold(0u64, u64::wrapping_add)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_to_memory, bench_to_host);
criterion_main!(benches);
