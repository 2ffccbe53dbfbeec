// Copyright 2024-2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{thread_rng, RngCore};
use streebog_crypto::Digest as _;
use stribog_hash::{
	block::{add_mod512, lps},
	DigestWidth, Streebog,
};

fn bench_streebog(c: &mut Criterion) {
	let mut group = c.benchmark_group("Streebog");

	let mut rng = thread_rng();

	const N: usize = 1 << 16;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);
	group.throughput(Throughput::Bytes(N as u64));

	for width in [DigestWidth::Bits256, DigestWidth::Bits512] {
		let hasher = Streebog::with_width(width);
		group.bench_function(width.to_string(), |bench| bench.iter(|| hasher.compute(&data)));
	}

	group.bench_function("Streebog256-RustCrypto", |bench| {
		bench.iter(|| streebog_crypto::Streebog256::digest(&data))
	});
	group.bench_function("Streebog512-RustCrypto", |bench| {
		bench.iter(|| streebog_crypto::Streebog512::digest(&data))
	});

	group.finish()
}

fn bench_block_transform(c: &mut Criterion) {
	let mut group = c.benchmark_group("Streebog block transform");

	let mut rng = thread_rng();
	let mut a = [0u8; 64];
	let mut b = [0u8; 64];
	rng.fill_bytes(&mut a);
	rng.fill_bytes(&mut b);

	group.throughput(Throughput::Bytes(64));
	group.bench_function("lps", |bench| {
		bench.iter(|| {
			let mut x = a;
			lps(&mut x);
			x
		})
	});
	group.bench_function("add_mod512", |bench| bench.iter(|| add_mod512(&a, &b)));

	group.finish()
}

criterion_group!(hash, bench_streebog, bench_block_transform);
criterion_main!(hash);
