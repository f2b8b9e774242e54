use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use smt_keys::{hash::poseidon::Poseidon, KeyDeriver, LeafType};

fn random_addresses() -> Vec<[u8; 20]> {
    let mut rng = ChaChaRng::from_seed([0; 32]);
    (0..1000).map(|_| rng.gen()).collect()
}

pub fn account_key_benchmark(c: &mut Criterion) {
    let deriver = KeyDeriver::new(Poseidon);
    let addresses = random_addresses();

    for leaf in [
        LeafType::Balance,
        LeafType::Nonce,
        LeafType::Code,
        LeafType::CodeLength,
    ] {
        c.bench_with_input(
            BenchmarkId::new(leaf.to_string(), "1k random"),
            &addresses.as_slice(),
            |bencher, addresses| {
                bencher.iter(|| {
                    for address in *addresses {
                        black_box(deriver.account_key(address, leaf).unwrap());
                    }
                });
            },
        );
    }
}

pub fn storage_key_benchmark(c: &mut Criterion) {
    let deriver = KeyDeriver::new(Poseidon);
    let addresses = random_addresses();

    let mut rng = ChaChaRng::from_seed([1; 32]);
    let positions: Vec<[u8; 32]> = (0..addresses.len()).map(|_| rng.gen()).collect();

    c.bench_with_input(
        BenchmarkId::new("storage", "1k random"),
        &(addresses.as_slice(), positions.as_slice()),
        |bencher, (addresses, positions)| {
            bencher.iter(|| {
                for (address, position) in addresses.iter().zip(positions.iter()) {
                    black_box(deriver.storage(address, position).unwrap());
                }
            });
        },
    );
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = account_key_benchmark, storage_key_benchmark
}
criterion_main!(benches);
