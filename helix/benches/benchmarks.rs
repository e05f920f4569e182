use criterion::{black_box, criterion_group, criterion_main, Criterion};

use helix::diff::{combine, compare, compare_packed, split, Interval, IntervalList};
use helix::seq::PackedSeq;

fn make_packed(len_bytes: usize, seed: u32) -> Vec<u8> {
    let mut x: u32 = seed;
    let mut v = Vec::with_capacity(len_bytes);
    for _ in 0..len_bytes {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        v.push((x >> 16) as u8);
    }
    v
}

/// 每隔 `every` 字节翻转一位，制造稀疏失配
fn mutate(data: &[u8], every: usize) -> Vec<u8> {
    let mut out = data.to_vec();
    for i in (0..out.len()).step_by(every) {
        out[i] ^= 0x04;
    }
    out
}

fn bench_compare_packed(c: &mut Criterion) {
    let a = make_packed(25_000, 42);
    let b = mutate(&a, 97);
    let (va, vb) = (PackedSeq::new(&a[..]), PackedSeq::new(&b[..]));

    c.bench_function("compare_generic_100kbp", |bch| {
        bch.iter(|| black_box(compare(black_box(&va), black_box(&vb), 0)))
    });
    c.bench_function("compare_packed_100kbp", |bch| {
        bch.iter(|| black_box(compare_packed(black_box(&va), black_box(&vb), 0)))
    });
}

fn bench_combine(c: &mut Criterion) {
    let a = PackedSeq::new(&make_packed(25_000, 7)[..]).to_ascii();
    let b_bytes = mutate(&make_packed(25_000, 7), 13);
    let b = PackedSeq::new(&b_bytes[..]).to_ascii();
    let windows_a = split(&a, 1_000);
    let windows_b = split(&b, 1_000);
    let lists: Vec<IntervalList> = windows_a
        .iter()
        .zip(&windows_b)
        .enumerate()
        .map(|(i, (wa, wb))| compare(*wa, *wb, i * 1_000))
        .collect();

    c.bench_function("combine_100_windows", |bch| {
        bch.iter(|| black_box(combine(black_box(&lists))))
    });

    let dense: Vec<IntervalList> = (0..64)
        .map(|k| (0..500).map(|j| Interval::new(j * 128 + k, j * 128 + k + 1)).collect())
        .collect();
    c.bench_function("combine_64_dense_lists", |bch| {
        bch.iter(|| black_box(combine(black_box(&dense))))
    });
}

fn bench_decode(c: &mut Criterion) {
    let a = make_packed(25_000, 3);
    let view = PackedSeq::new(&a[..]);
    c.bench_function("decode_iter_100kbp", |bch| {
        bch.iter(|| black_box(view.iter().filter(|b| b.code() == 0).count()))
    });
}

criterion_group!(benches, bench_compare_packed, bench_combine, bench_decode);
criterion_main!(benches);
