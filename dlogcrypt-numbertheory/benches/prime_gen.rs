use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dlogcrypt_numbertheory::{find_generator, gen_prime};
use dlogcrypt_traits::randomness::GeneralRng;
use rand_core::OsRng;

pub fn prime_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_generation");
    group.sample_size(50);

    for bit_length in [16u32, 24, 32, 48].iter() {
        let mut rng = GeneralRng::new(OsRng);
        group.bench_with_input(
            BenchmarkId::new("gen_prime", bit_length),
            bit_length,
            |b, &bits| {
                b.iter(|| gen_prime(black_box(bits), &mut rng));
            },
        );
    }

    group.finish();
}

pub fn generator_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator_discovery");
    group.sample_size(50);

    for bit_length in [16u32, 24, 32].iter() {
        let mut rng = GeneralRng::new(OsRng);
        let p = gen_prime(*bit_length, &mut rng);
        group.bench_with_input(BenchmarkId::new("find_generator", bit_length), &p, |b, p| {
            b.iter(|| find_generator(black_box(p)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(number_theory, prime_benchmark, generator_benchmark);
criterion_main!(number_theory);
