#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mojidec::{Encoding, decode, detect};

/// Deterministically build a corpus of roughly `target_len` bytes by
/// repeating a short Japanese sentence in the given encoding.
fn make_corpus(encoding: Encoding, target_len: usize) -> Vec<u8> {
    let seed: &[u8] = match encoding {
        Encoding::ShiftJis => &[
            0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA, 0x82, 0xCC, 0x83, 0x65, 0x83, 0x4C, 0x83, 0x58,
            0x83, 0x67, 0x20,
        ],
        Encoding::EucJp => &[
            0xC6, 0xFC, 0xCB, 0xDC, 0xB8, 0xEC, 0xA4, 0xCE, 0xA5, 0xC6, 0xA5, 0xAD, 0xA5, 0xB9,
            0xA5, 0xC8, 0x20,
        ],
        Encoding::Utf8 => &[
            0xE6, 0x97, 0xA5, 0xE6, 0x9C, 0xAC, 0xE8, 0xAA, 0x9E, 0xE3, 0x81, 0xAE, 0x74, 0x65,
            0x78, 0x74, 0x20,
        ],
        Encoding::Utf16 => &[
            0xE5, 0x65, 0x2C, 0x67, 0x9E, 0x8A, 0x6E, 0x30, 0x74, 0x00, 0x78, 0x00, 0x74, 0x00,
            0x20, 0x00,
        ],
        Encoding::Unknown => unreachable!("no corpus for the inert tag"),
    };
    let mut corpus = Vec::with_capacity(target_len + seed.len());
    while corpus.len() < target_len {
        corpus.extend_from_slice(seed);
    }
    corpus
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for encoding in [
        Encoding::Utf16,
        Encoding::Utf8,
        Encoding::ShiftJis,
        Encoding::EucJp,
    ] {
        let corpus = make_corpus(encoding, 64 * 1024);
        let mut buf = vec![0i32; decode(None, &corpus, encoding)];
        group.throughput(Throughput::Bytes(corpus.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(encoding),
            &corpus,
            |b, corpus| {
                b.iter(|| decode(Some(black_box(buf.as_mut_slice())), black_box(corpus), encoding));
            },
        );
    }
    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    for encoding in [
        Encoding::Utf16,
        Encoding::Utf8,
        Encoding::ShiftJis,
        Encoding::EucJp,
    ] {
        let corpus = make_corpus(encoding, 64 * 1024);
        group.throughput(Throughput::Bytes(corpus.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(encoding),
            &corpus,
            |b, corpus| {
                b.iter(|| detect(black_box(corpus)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_detect);
criterion_main!(benches);
