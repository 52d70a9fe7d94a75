// Benchmarks for ClockBound protocol parsing and serialization.

use std::hint::black_box;

use clockbound_proto::protocol::{
    CompareResponse, ConstPackedSizeBytes, FromBytes, NowResponse, Request, ToBytes,
};
use clockbound_proto::unix_time::{Instant, UnixNanos};
use criterion::{Criterion, criterion_group, criterion_main};

const NOW_RESPONSE: [u8; 20] = [
    0x01, 0x01, 0x00, 0x00, 0x16, 0xb9, 0x6a, 0x09, 0x7f, 0x4d, 0x06, 0x87, 0x16, 0xb9, 0x6a,
    0x09, 0x7f, 0x50, 0xd7, 0xbc,
];

fn bench_now_response_decode(c: &mut Criterion) {
    c.bench_function("now_response_decode_exact", |b| {
        b.iter(|| NowResponse::decode_exact(black_box(&NOW_RESPONSE)).unwrap())
    });
}

fn bench_compare_response_from_bytes(c: &mut Criterion) {
    let buf = [1u8, 2, 0, 0, 1];
    c.bench_function("compare_response_from_bytes", |b| {
        b.iter(|| CompareResponse::from_bytes(black_box(&buf)).unwrap())
    });
}

fn bench_request_to_bytes(c: &mut Criterion) {
    let request = Request::Before(UnixNanos(0x1234_5678_9abc_def0));
    c.bench_function("before_request_to_bytes", |b| {
        let mut buf = [0u8; 12];
        b.iter(|| black_box(&request).to_bytes(&mut buf).unwrap())
    });
}

fn bench_instant_encode(c: &mut Criterion) {
    let instant = Instant::new(1_700_000_000, 123_456_789);
    c.bench_function("instant_to_unix_nanos", |b| {
        b.iter(|| UnixNanos::try_from(black_box(instant)).unwrap())
    });
}

fn bench_midpoint(c: &mut Criterion) {
    let (response, _) = NowResponse::from_bytes(&NOW_RESPONSE).unwrap();
    assert_eq!(NowResponse::PACKED_SIZE_BYTES, NOW_RESPONSE.len());
    c.bench_function("now_response_midpoint", |b| {
        b.iter(|| black_box(&response).midpoint())
    });
}

criterion_group!(
    benches,
    bench_now_response_decode,
    bench_compare_response_from_bytes,
    bench_request_to_bytes,
    bench_instant_encode,
    bench_midpoint,
);
criterion_main!(benches);
