use criterion::{Criterion, criterion_group, criterion_main};
use lvlog::prelude::*;
use lvlog::{Flags, Level, LeveledLogger, WriterSink};
use std::hint::black_box;
use std::io;
use std::sync::Arc;
use tempfile::TempDir;

fn discard(flags: Flags) -> LeveledLogger {
    LeveledLogger::with_color(Arc::new(WriterSink::new(io::sink())), flags, false)
}

fn bench_suppressed(c: &mut Criterion) {
    let logger = discard(Flags::STD | Flags::SHORT_FILE);
    logger.set_output_level(Level::Info);

    c.bench_function("debug (suppressed)", |b| {
        b.iter(|| logger.debug(black_box("never formatted")));
    });
    c.bench_function("debugf (suppressed)", |b| {
        b.iter(|| logger.debugf(format_args!("value {}", black_box(42))));
    });
}

fn bench_emitted(c: &mut Criterion) {
    let plain = discard(Flags::NONE);
    c.bench_function("info (no header)", |b| {
        b.iter(|| plain.info(black_box("emitted")));
    });

    let std = discard(Flags::STD | Flags::MICROSECONDS | Flags::SHORT_FILE);
    c.bench_function("info (date, time, short file)", |b| {
        b.iter(|| std.info(black_box("emitted")));
    });
}

#[inline(never)]
fn wrapped(logger: &LeveledLogger) {
    logger.info_depth(1, "through a wrapper");
}

fn bench_caller_depth(c: &mut Criterion) {
    let logger = discard(Flags::SHORT_FILE);
    c.bench_function("info_depth(1) stack walk", |b| {
        b.iter(|| wrapped(black_box(&logger)));
    });
}

fn bench_file_sink(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let sink = lvlog::FileSink::open(tmp.path().join("bench.log").to_string_lossy())
        .expect("failed to open log file");
    let logger = LeveledLogger::with_color(Arc::new(sink), Flags::STD, false);

    c.bench_function("FileSink info", |b| {
        b.iter(|| logger.info(black_box("to disk")));
    });

    logger.flush().expect("flush failed");
}

criterion_group!(
    benches,
    bench_suppressed,
    bench_emitted,
    bench_caller_depth,
    bench_file_sink
);
criterion_main!(benches);
