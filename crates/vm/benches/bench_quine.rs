//! Benchmark for testing machine performance with relative-mode self-replication and forking.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use intcode_vm::core::{types::Word, vm::Machine};

const QUINE: &str = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99";

fn test_quine(c: &mut Criterion) {
    let mut group = c.benchmark_group("intcode_vm");
    let machine = Machine::parse(QUINE).expect("invalid program");

    group.bench_function(BenchmarkId::from_parameter("quine"), |b| {
        b.iter(|| {
            let mut fork = machine.fork();
            let outputs = fork.run().collect::<Result<Vec<Word>, _>>().expect("machine fault");

            assert_eq!(outputs.len(), 16);
        });
    });

    group.finish();
}

criterion_group!(benches, test_quine);
criterion_main!(benches);
