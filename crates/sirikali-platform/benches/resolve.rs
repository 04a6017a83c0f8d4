use criterion::{Criterion, criterion_group, criterion_main};
use sirikali_platform::{Os, ResolverOptions, SearchResolver, TargetResolver};
use std::hint::black_box;

fn bench_resolve(c: &mut Criterion) {
    let root = tempfile::tempdir().unwrap();
    let bin = root.path().join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    std::fs::write(bin.join("cryfs"), b"").unwrap();

    let resolver = SearchResolver::new(ResolverOptions::for_os(Os::Unix).home(root.path()));

    c.bench_function("resolve_home_hit", |b| {
        b.iter(|| resolver.resolve(black_box("cryfs")))
    });
    c.bench_function("resolve_miss", |b| {
        b.iter(|| resolver.resolve(black_box("definitely-nonexistent-tool-xyz")))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
