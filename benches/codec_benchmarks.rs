//! Performance benchmarks for the contact file codec and search filtering.
//!
//! These benchmarks measure:
//! - Encoding and decoding files of different sizes
//! - Building the filtered table view for a query

use chrono::NaiveDate;
use contact_book::codec::{decode, encode};
use contact_book::{ContactRecord, TableView};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build `count` distinct, valid records.
fn make_records(count: usize) -> Vec<ContactRecord> {
    (0..count)
        .map(|i| ContactRecord {
            address: format!("Street {}", i),
            birth_date: NaiveDate::from_ymd_opt(1950 + (i % 50) as i32, 1 + (i % 12) as u32, 1),
            email: format!("user{}@example.com", i),
            phone_numbers: vec![format!("+7900{:07}", i), format!("8800{:07}", i)],
            ..ContactRecord::new("Ivan", format!("Petrov{}", "a".repeat(i % 5)), "Sergeevich")
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in [100, 1_000, 10_000] {
        let records = make_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| encode(black_box(records)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in [100, 1_000, 10_000] {
        let text = encode(&make_records(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| decode(black_box(text)));
        });
    }
    group.finish();
}

fn bench_table_view(c: &mut Criterion) {
    let records = make_records(5_000);
    let mut group = c.benchmark_group("table_view");
    for query in ["", "user42", "no-such-text"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, query| {
            b.iter(|| TableView::build(black_box(&records), query));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_table_view);
criterion_main!(benches);
