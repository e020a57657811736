//! Symbol table benchmarks
//!
//! Interning, descriptor parsing and signature erasure.
//! Run with: `cargo bench --bench symbol_bench`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kava_symbols::{ByteSequence, ByteView, Interner, SymbolTable, WellKnownSymbols};

/// Benchmark interning against a seeded table
fn bench_intern(c: &mut Criterion) {
    let mut group = c.benchmark_group("intern");
    group.throughput(Throughput::Elements(1));

    // Miss: fresh content every iteration
    group.bench_function("intern_new", |b| {
        let table = SymbolTable::bootstrap();
        let mut counter = 0u64;
        b.iter(|| {
            counter += 1;
            table.utf8(&format!("new_name_{}", counter))
        })
    });

    // Hit: content already in the seed
    group.bench_function("intern_seeded", |b| {
        let table = SymbolTable::bootstrap();
        b.iter(|| black_box(table.interner().symbolify(ByteView::new(b"Ljava/lang/Object;"))))
    });

    group.bench_function("lookup_absent", |b| {
        let table = SymbolTable::bootstrap();
        b.iter(|| black_box(table.interner().lookup(ByteView::new(b"Lnot/There;"))))
    });

    group.finish();
}

/// Benchmark symbol comparison against byte comparison
fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");
    group.throughput(Throughput::Elements(1));

    let table = SymbolTable::bootstrap();
    let a = table.utf8("java/lang/invoke/MethodHandleNatives");
    let b2 = table.utf8("java/lang/invoke/MethodHandleNatives");
    let other = table.utf8("java/lang/invoke/MethodHandleImpl");

    group.bench_function("symbol_eq_symbol", |b| {
        b.iter(|| {
            black_box(a == b2);
            black_box(a == other);
        })
    });

    group.bench_function("content_equals", |b| {
        b.iter(|| {
            black_box(a.content_equals(&b2));
            black_box(a.content_equals(&other));
        })
    });

    group.finish();
}

/// Benchmark the content hash over varying lengths
fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_hash");

    for &size in &[1, 16, 256, 4096] {
        let bytes = vec![b'a'; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("byte_view", size), &bytes, |b, bytes| {
            b.iter(|| black_box(ByteView::new(bytes).hash_code()))
        });
    }

    group.finish();
}

/// Benchmark descriptor and signature grammar
fn bench_grammar(c: &mut Criterion) {
    let mut group = c.benchmark_group("grammar");
    group.throughput(Throughput::Elements(1));

    let table = SymbolTable::bootstrap();
    let descriptor = b"[[Ljava/util/concurrent/ConcurrentHashMap;";
    let signature = b"(ILjava/lang/String;[JDLjava/lang/Object;)Ljava/lang/invoke/MethodHandle;";

    group.bench_function("parse_type", |b| {
        b.iter(|| black_box(table.types().get_or_create_valid_type(ByteView::new(descriptor))))
    });

    group.bench_function("parse_signature", |b| {
        b.iter(|| black_box(table.signatures().parse(ByteView::new(signature), 0)))
    });

    let sig = table
        .signatures()
        .get_or_create_valid_signature(ByteView::new(signature))
        .unwrap();

    group.bench_function("parsed_cached", |b| {
        b.iter(|| black_box(table.signatures().parsed(&sig)))
    });

    group.bench_function("to_basic", |b| {
        b.iter(|| black_box(table.signatures().to_basic(&sig, false)))
    });

    group.finish();
}

/// Benchmark seeding a runtime table from the catalog
fn bench_seed(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed");
    let seed = WellKnownSymbols::global().seed();
    group.throughput(Throughput::Elements(seed.len() as u64));

    group.bench_function("copy_catalog", |b| b.iter(|| black_box(Interner::from(seed))));

    group.finish();
}

/// Benchmark concurrent interning
fn bench_concurrent(c: &mut Criterion) {
    use std::thread;

    let mut group = c.benchmark_group("concurrent");

    for &num_threads in &[1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("concurrent_intern", num_threads),
            &num_threads,
            |b, &n| {
                b.iter(|| {
                    let interner = Arc::new(Interner::new());
                    let handles: Vec<_> = (0..n)
                        .map(|i| {
                            let interner = Arc::clone(&interner);
                            thread::spawn(move || {
                                for j in 0..100 {
                                    let text = format!("Lthread{}/Class{};", i % 2, j);
                                    let _ = interner.symbolify(ByteView::new(text.as_bytes()));
                                }
                            })
                        })
                        .collect();

                    for h in handles {
                        h.join().unwrap();
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_intern,
    bench_comparison,
    bench_hash,
    bench_grammar,
    bench_seed,
    bench_concurrent,
);

criterion_main!(benches);
