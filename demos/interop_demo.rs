//! Interop Demo - Simulasi Binding Host
//!
//! Menjalankan urutan panggilan yang sama dengan test app binding di
//! bahasa host: setiap bentuk protokol sekali, plus jalur error, sambil
//! mengukur latency per panggilan dan memverifikasi akuntansi buffer.
//!
//! Usage:
//!   cargo run --release --example interop_demo -- [options]
//!
//! Options:
//!   --repeat <N>     Jumlah pengulangan per operasi (default: 1)
//!   --verbose        Print hasil setiap operasi

use std::collections::HashMap;
use std::time::Instant;

use charon::live_buffer_count;
use charon::sample::host::{self, ArithmeticError};
use charon::sample::Point;

/// Demo configuration
struct DemoConfig {
    repeat: u32,
    verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            repeat: 1,
            verbose: false,
        }
    }
}

fn parse_args() -> DemoConfig {
    let mut config = DemoConfig::default();
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--repeat" => {
                if i + 1 < args.len() {
                    config.repeat = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "--verbose" => config.verbose = true,
            _ => {}
        }
        i += 1;
    }

    config
}

fn run_op<T: std::fmt::Debug>(
    config: &DemoConfig,
    name: &str,
    mut op: impl FnMut() -> T,
) {
    let start = Instant::now();
    let mut last = op();
    for _ in 1..config.repeat {
        last = op();
    }
    let elapsed = start.elapsed();
    let per_call_ns = elapsed.as_nanos() as f64 / config.repeat as f64;

    if config.verbose {
        println!("  {name:<22} {per_call_ns:>9.0} ns/call   -> {last:?}");
    } else {
        println!("  {name:<22} {per_call_ns:>9.0} ns/call");
    }
}

fn main() {
    let config = parse_args();

    println!("⛵ Charon Interop Demo");
    println!("======================\n");
    println!("Repeat per operation: {}\n", config.repeat);

    let baseline = live_buffer_count();

    println!("📊 Scalar operations");
    println!("--------------------");
    run_op(&config, "bool_flip(true)", || host::bool_flip(true).unwrap());
    run_op(&config, "i32_increment(41)", || {
        host::i32_increment(41).unwrap()
    });
    run_op(&config, "f64_increment(1.5)", || {
        host::f64_increment(1.5).unwrap()
    });
    run_op(&config, "void_touch(0)", || host::void_touch(0).unwrap());

    println!("\n📊 Buffer operations");
    println!("--------------------");
    run_op(&config, "string_double", || {
        host::string_double("Hello World!").unwrap()
    });
    run_op(&config, "point_shift", || {
        host::point_shift(&Point { x: 1.0, y: 2.0 }).unwrap()
    });
    run_op(&config, "optional_increment", || {
        host::optional_increment(Some(0)).unwrap()
    });
    run_op(&config, "vector_double", || {
        host::vector_double(vec![
            "one".to_string(),
            "two".to_string(),
            "three".to_string(),
        ])
        .unwrap()
    });
    run_op(&config, "map_insert_zero", || {
        let mut map = HashMap::new();
        map.insert("one".to_string(), 1);
        map.insert("two".to_string(), 2);
        host::map_insert_zero(map).unwrap()
    });

    println!("\n📊 Error channel");
    println!("----------------");
    run_op(&config, "u64 overflow (mapped)", || {
        match host::u64_checked_add(u64::MAX, 1) {
            Err(ArithmeticError::IntegerOverflow(message)) => message,
            other => panic!("expected typed overflow failure, got {other:?}"),
        }
    });
    run_op(&config, "u64 add (success)", || {
        host::u64_checked_add(40, 2).unwrap()
    });

    println!("\n✅ Demo complete!");
    let leaked = live_buffer_count() - baseline;
    if leaked == 0 {
        println!("   Buffer accounting balanced: 0 outstanding");
    } else {
        println!("   ⚠ {leaked} buffers outstanding - this is a bug");
    }
}
