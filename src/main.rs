//! Charon - Cross-Language FFI Marshaling Layer
//!
//! PoC driver: mengukur biaya codec, lifecycle buffer, dan satu
//! panggilan penuh melewati boundary.

use std::collections::HashMap;
use std::time::Instant;

use charon::sample::host;
use charon::{lift, live_buffer_count, lower, CallStatus, Encoder};

fn main() {
    println!("⛵ Charon FFI Marshaling Layer - PoC v0.1");
    println!("=========================================\n");

    benchmark_codec();
    benchmark_lifecycle();
    benchmark_boundary();

    println!("\n✅ All benchmarks complete!");
    println!("   Live buffers at exit: {}", live_buffer_count());
}

fn benchmark_codec() {
    println!("📊 Codec Benchmark (Big-Endian Encode/Decode)");
    println!("---------------------------------------------");

    const ITERATIONS: usize = 1_000_000;

    // Warm up
    for i in 0..1000u64 {
        let buf = lower(&i);
        let _: u64 = lift(buf).unwrap();
    }

    // Benchmark encode scalar
    let start = Instant::now();
    for i in 0..ITERATIONS {
        let mut enc = Encoder::with_capacity(8);
        enc.write_u64(i as u64);
        let _ = enc.finalize();
    }
    let encode_duration = start.elapsed();

    // Benchmark roundtrip string
    let message = "Hello World!".to_string();
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let buf = lower(&message);
        let _: String = lift(buf).unwrap();
    }
    let string_duration = start.elapsed();

    let encode_ns = encode_duration.as_nanos() as f64 / ITERATIONS as f64;
    let string_ns = string_duration.as_nanos() as f64 / ITERATIONS as f64;

    println!("  Operations: {}", ITERATIONS);
    println!(
        "  Scalar encode:    {:.2} ns/op ({:.3} μs/op)",
        encode_ns,
        encode_ns / 1000.0
    );
    println!(
        "  String roundtrip: {:.2} ns/op ({:.3} μs/op)",
        string_ns,
        string_ns / 1000.0
    );
    println!(
        "  Throughput:       {:.2} M ops/sec\n",
        ITERATIONS as f64 / string_duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_lifecycle() {
    println!("📊 Lifecycle Benchmark (Alloc/Free via Entry Points)");
    println!("----------------------------------------------------");

    const ITERATIONS: usize = 1_000_000;

    let before = live_buffer_count();

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let mut status = CallStatus::new();
        let buf = charon::charon_buffer_alloc(64, &mut status);
        charon::charon_buffer_free(buf, &mut status);
    }
    let duration = start.elapsed();

    let ns = duration.as_nanos() as f64 / ITERATIONS as f64;

    println!("  Operations: {}", ITERATIONS);
    println!(
        "  Alloc+free latency: {:.2} ns/op ({:.3} μs/op)",
        ns,
        ns / 1000.0
    );
    println!(
        "  Leak check: {} buffers outstanding\n",
        live_buffer_count() - before
    );
}

fn benchmark_boundary() {
    println!("📊 Boundary Benchmark (Full Call: Lower -> Native -> Lift)");
    println!("----------------------------------------------------------");

    const ITERATIONS: usize = 100_000;

    // Warm up
    for _ in 0..1000 {
        host::string_double("warmup").unwrap();
    }

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        host::string_double("Hello World!").unwrap();
    }
    let string_duration = start.elapsed();

    let start = Instant::now();
    for i in 0..ITERATIONS {
        host::u64_checked_add(i as u64, 1).unwrap();
    }
    let scalar_duration = start.elapsed();

    let mut map = HashMap::new();
    map.insert("one".to_string(), 1);
    map.insert("two".to_string(), 2);
    map.insert("three".to_string(), 3);

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        host::map_insert_zero(map.clone()).unwrap();
    }
    let map_duration = start.elapsed();

    let string_ns = string_duration.as_nanos() as f64 / ITERATIONS as f64;
    let scalar_ns = scalar_duration.as_nanos() as f64 / ITERATIONS as f64;
    let map_ns = map_duration.as_nanos() as f64 / ITERATIONS as f64;

    println!("  Operations: {}", ITERATIONS);
    println!(
        "  Scalar call:  {:.2} ns/op ({:.3} μs/op)",
        scalar_ns,
        scalar_ns / 1000.0
    );
    println!(
        "  String call:  {:.2} ns/op ({:.3} μs/op)",
        string_ns,
        string_ns / 1000.0
    );
    println!(
        "  Map call:     {:.2} ns/op ({:.3} μs/op)",
        map_ns,
        map_ns / 1000.0
    );
    println!(
        "  Throughput:   {:.2} M calls/sec",
        ITERATIONS as f64 / scalar_duration.as_secs_f64() / 1_000_000.0
    );
}
