// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_dropzone::{
    AcceptSpec, DropFile, DropzoneConfig, FileEntry, dedupe, validate_batch,
};

fn files(prefix: &str, len: usize) -> Vec<DropFile> {
    (0..len)
        .map(|i| {
            let ext = if i % 3 == 0 { "txt" } else { "png" };
            DropFile::new(format!("{prefix}{i}.{ext}"), (i as u64 % 200) + 1, "")
        })
        .collect()
}

fn committed(len: usize) -> Vec<FileEntry> {
    files("c", len)
        .into_iter()
        .map(|file| FileEntry {
            file,
            errors: Vec::new(),
        })
        .collect()
}

fn bench_validate_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dropzone/validate_batch");
    let config = DropzoneConfig {
        file_types: AcceptSpec::parse(".png,image/*"),
        min_size: 1,
        max_size: Some(150),
        max_files: 64,
        ..DropzoneConfig::default()
    };

    // The duplicate scan is O(committed * batch); check it against list size.
    for len in [16usize, 128, 1_024] {
        let existing = committed(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("fresh", len), &existing, |b, existing| {
            b.iter_batched(
                || files("n", len),
                |batch| black_box(validate_batch(existing, batch, &config)),
                BatchSize::LargeInput,
            );
        });
        group.bench_with_input(
            BenchmarkId::new("all_duplicates", len),
            &existing,
            |b, existing| {
                b.iter_batched(
                    || files("c", len),
                    |batch| black_box(validate_batch(existing, batch, &config)),
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_dedupe(c: &mut Criterion) {
    let mut group = c.benchmark_group("dropzone/dedupe");

    for len in [128usize, 2_048] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::new("half_repeated", len), |b| {
            b.iter_batched(
                || {
                    let mut list = committed(len / 2);
                    list.extend(committed(len / 2));
                    list
                },
                |list| black_box(dedupe(list)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate_batch, bench_dedupe);
criterion_main!(benches);
