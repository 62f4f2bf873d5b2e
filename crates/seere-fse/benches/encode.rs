use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use seere_fse::{compress, FseQuant, WeightTensor};

fn bench_compress(c: &mut Criterion) {
    let elements = 65536usize;
    let alphabet = 16usize;
    let mut rng = StdRng::seed_from_u64(42);
    let symbols: Vec<u16> = (0..elements)
        .map(|_| {
            let r: f64 = rng.gen();
            ((r * r * alphabet as f64) as usize).min(alphabet - 1) as u16
        })
        .collect();
    let centroids: Vec<f32> = (0..alphabet).map(|c| c as f32 * 0.0625 - 0.5).collect();

    let mut group = c.benchmark_group("fse");
    group.throughput(Throughput::Bytes((elements * 4) as u64));
    group.bench_function("compress_64k_tensor", |b| {
        b.iter(|| {
            let quant = FseQuant::from_symbols(symbols.clone(), centroids.clone()).unwrap();
            let mut tensor =
                WeightTensor::new("bench.weight", vec![elements], vec![0u8; elements * 4]);
            compress(black_box(&mut tensor), black_box(quant)).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compress);
criterion_main!(benches);
