use std::io::{self, Write};

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tintlog_observability::{ConsoleConfig, LoggerFactory, Severity, entry_point};

fn bench_emit(c: &mut Criterion) {
    let original = entry_point(|args| writeln!(io::sink(), "{args}"));
    let factory = LoggerFactory::new(ConsoleConfig::with_min_severity(Severity::Info));

    let discard = factory.build_emitter(Severity::Debug, original.clone());
    let forward = factory.build_emitter(Severity::Warn, original);

    let mut group = c.benchmark_group("emit");

    group.bench_function("discard", |b| {
        b.iter(|| discard.emit(format_args!("{} {}", black_box("cache miss"), black_box(42))))
    });

    group.bench_function("forward", |b| {
        b.iter(|| forward.emit(format_args!("{} {}", black_box("cache miss"), black_box(42))))
    });

    group.finish();
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);
