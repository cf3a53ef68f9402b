use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use thumbview_core_lib::decoder::decode;
use thumbview_core_lib::image::Image;
use thumbview_core_lib::printer::render_listing;
use thumbview_core_lib::test_data::PERF_TEST_OPCODES;
use thumbview_core_lib::walker::walk;

/// Benchmark decoding individual instruction types
fn bench_decode_instruction_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_instruction_types");

    for (raw, desc) in PERF_TEST_OPCODES.iter() {
        group.bench_with_input(BenchmarkId::new("decode", desc), raw, |b, &raw| {
            b.iter(|| decode(black_box(raw)));
        });
    }

    group.finish();
}

/// Benchmark decoding the entire half-word space
fn bench_decode_full_space(c: &mut Criterion) {
    c.bench_function("decode_all_halfwords", |b| {
        b.iter(|| {
            for v in 0..=0xFFFFu32 {
                black_box(decode(black_box(v)));
            }
        });
    });
}

/// Benchmark walking and printing a small looping function
fn bench_walk_function(c: &mut Criterion) {
    let bytes = [
        0x80, 0xB5, // push {r7,lr}
        0x00, 0x20, // mov r0, #0
        0x01, 0x30, // add r0, #1
        0x08, 0x28, // cmp r0, #8
        0xFC, 0xD1, // bne backward
        0x01, 0x49, // ldr r1, [pc, #4]
        0x80, 0xBD, // pop {r7,pc}
        0x00, 0x00, // padding
        0xEF, 0xBE, 0xAD, 0xDE, // literal
    ];
    let image = Image::load_from_bytes(&bytes, 0x0800_0000).unwrap();

    c.bench_function("walk_loop_function", |b| {
        b.iter(|| walk(black_box(&image), black_box(0x0800_0000)));
    });

    c.bench_function("walk_and_render", |b| {
        b.iter(|| {
            let mut graph = walk(black_box(&image), black_box(0x0800_0000));
            render_listing(&mut graph, &image)
        });
    });
}

criterion_group!(
    benches,
    bench_decode_instruction_types,
    bench_decode_full_space,
    bench_walk_function
);
criterion_main!(benches);
