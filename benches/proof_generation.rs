use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use dlog_proof::{Group, Proof, Secp256k1, SecureRng, generate_random_number, hash_points};

fn keypair(rng: &mut SecureRng) -> (<Secp256k1 as Group>::Scalar, <Secp256k1 as Group>::Element) {
    let x = Secp256k1::scalar_from_uint(&generate_random_number(rng).unwrap());
    let y = Secp256k1::scalar_mul(&Secp256k1::generator(), &x);
    (x, y)
}

fn bench_proof_generation(c: &mut Criterion) {
    let mut rng = SecureRng::new();
    let (x, y) = keypair(&mut rng);

    c.bench_function("secp256k1_proof_generation", |b| {
        b.iter(|| {
            Proof::<Secp256k1>::prove(black_box(&mut rng), "sid", 1, black_box(&x), &y).unwrap()
        })
    });
}

fn bench_proof_verification(c: &mut Criterion) {
    let mut rng = SecureRng::new();
    let (x, y) = keypair(&mut rng);
    let proof = Proof::<Secp256k1>::prove(&mut rng, "sid", 1, &x, &y).unwrap();

    c.bench_function("secp256k1_proof_verification", |b| {
        b.iter(|| black_box(&proof).verify("sid", 1, black_box(&y)))
    });
}

fn bench_challenge_derivation(c: &mut Criterion) {
    let mut rng = SecureRng::new();
    let (_, y) = keypair(&mut rng);
    let points = [Secp256k1::generator(), y.clone(), y];

    c.bench_function("secp256k1_hash_points", |b| {
        b.iter(|| hash_points::<Secp256k1>(black_box("sid"), black_box(1), black_box(&points)))
    });
}

fn bench_proof_serialization(c: &mut Criterion) {
    let mut rng = SecureRng::new();
    let (x, y) = keypair(&mut rng);
    let proof = Proof::<Secp256k1>::prove(&mut rng, "sid", 1, &x, &y).unwrap();
    let wire = proof.to_str();

    c.bench_function("proof_to_str", |b| b.iter(|| black_box(&proof).to_str()));
    c.bench_function("proof_from_str", |b| {
        b.iter(|| black_box(&wire).parse::<Proof<Secp256k1>>().unwrap())
    });
}

criterion_group!(
    benches,
    bench_proof_generation,
    bench_proof_verification,
    bench_challenge_derivation,
    bench_proof_serialization
);
criterion_main!(benches);
