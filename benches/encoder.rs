#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use escode::prelude::*;

pub fn u64_to_bytes_le(x: u64) -> Bytes { Bytes::from(u64::to_le_bytes(x).to_vec()) }

const N_BIG_ARR: usize = 2000;

fn big_arr() -> Value {
    let v: Vec<Value> = (0..N_BIG_ARR).map(|i| Value::from(i as i64)).collect();
    Value::from(v)
}

const N_ARR: usize = 10;
const N_MAP: usize = 10;

fn big_v() -> Value {
    let v0: Vec<Value> = (0..N_ARR).map(|i| Value::from(i as i64)).collect();
    let m: ValueMap = (0..N_MAP)
        .map(|i| (Value::from(u64_to_bytes_le(i as u64)), Value::from(v0.clone())))
        .collect();
    let v: Vec<Value> = std::iter::repeat(m).map(Value::from).take(N_ARR).collect();
    Value::from(v)
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function(
        &format!(
            "Creating a Value of encoded size {}",
            encode(&big_v()).unwrap().len()
        ),
        |b| b.iter(|| black_box(big_v())),
    );
}

fn bench_enc(c: &mut Criterion) {
    let big_v = big_v();
    let enc_len = encode(&big_v).unwrap().len();
    c.bench_function(
        &format!("Encoding a Value, output size of {} bytes", enc_len),
        move |b| b.iter(|| encode(black_box(&big_v))),
    );
}

fn bench_enc_single_alloc(c: &mut Criterion) {
    let big_v = big_v();
    let enc_len = encode(&big_v).unwrap().len();
    c.bench_function(
        &format!(
            "Encoding a Value, output size of {} bytes, buffer preallocated",
            enc_len
        ),
        move |b| {
            b.iter(|| {
                let out = &mut Vec::<u8>::with_capacity(enc_len * 2);
                encode_into(black_box(&big_v), out)
            })
        },
    );
}

fn bench_dec(c: &mut Criterion) {
    let big_v = big_v();
    let enc = encode(&big_v).unwrap();
    c.bench_function(
        &format!("Decoding a Value, input size of {} bytes", enc.len()),
        move |b| b.iter(|| decode_bytes(black_box(enc.clone())).unwrap()),
    );
}

fn bench_enc_flat(c: &mut Criterion) {
    let big_arr = big_arr();
    let enc_len = encode(&big_arr).unwrap().len();
    c.bench_function(
        &format!("Encoding a list, output size of {} bytes", enc_len),
        move |b| b.iter(|| encode(black_box(&big_arr))),
    );
}

fn bench_dec_flat(c: &mut Criterion) {
    let big_arr = big_arr();
    let enc = encode(&big_arr).unwrap();
    c.bench_function(
        &format!("Decoding a list of length {}", enc.len()),
        move |b| b.iter(|| decode(black_box(&enc)).unwrap()),
    );
}

fn bench_index(c: &mut Criterion) {
    let tuple = vec![
        Value::from("users"),
        Value::from(1_000_000i64),
        Value::from_static(b"\x00\xfe\xff\x01"),
    ];
    c.bench_function("Index-encoding a 3-tuple", move |b| {
        b.iter(|| encode_index(black_box(&tuple), false))
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_enc,
    bench_enc_single_alloc,
    bench_dec,
    bench_enc_flat,
    bench_dec_flat,
    bench_index
);
criterion_main!(benches);
