use mcbench::compare::GeneratorResults;
use mcbench::prelude::*;

/// Strategies whose draws come entirely from the seeded source.
const SEEDED: [Generator; 5] = [
    Generator::BoundedUniform,
    Generator::Uniform,
    Generator::ShiftedNormal,
    Generator::PowerLaw,
    Generator::ScaledPoisson,
];

fn seeded_values(results: &GeneratorResults) -> Vec<f64> {
    SEEDED
        .iter()
        .map(|&g| results.get(g).unwrap().value)
        .collect()
}

// H0: Different master seeds produce identical reports
// Falsification: Run with seeds 42, 43, 44; compare seeded estimates
#[test]
fn h0_1_different_seeds_produce_different_estimates() {
    let seeds = [42, 43, 44];
    let mut outputs = Vec::new();

    for seed in seeds {
        let config = BenchConfig::builder().samples(500).seed(seed).build();
        let report = run_comparison(&config).unwrap();
        outputs.push((seeded_values(&report.pi), seeded_values(&report.integral)));
    }

    assert_ne!(
        outputs[0], outputs[1],
        "Seed 42 and 43 produced identical estimates"
    );
    assert_ne!(
        outputs[1], outputs[2],
        "Seed 43 and 44 produced identical estimates"
    );
    assert_ne!(
        outputs[0], outputs[2],
        "Seed 42 and 44 produced identical estimates"
    );
}

// H0: Same seed produces different outputs across runs
// Falsification: Run 100 iterations with seed=42; compare all outputs
#[test]
fn h0_2_same_seed_produces_identical_estimates() {
    let mut first_output = (Vec::new(), Vec::new());

    for i in 0..100 {
        let config = BenchConfig::builder().samples(200).seed(42).build();
        let report = run_comparison(&config).unwrap();
        let output = (seeded_values(&report.pi), seeded_values(&report.integral));

        if i == 0 {
            first_output = output;
        } else {
            assert_eq!(output, first_output, "Run {} produced different output", i);
        }
    }
}

// H0: Thread count affects results
#[test]
fn h0_3_thread_count_invariance() {
    use std::thread;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let config = BenchConfig::builder().samples(500).seed(42).build();
                let report = run_comparison(&config).unwrap();
                (seeded_values(&report.pi), seeded_values(&report.integral))
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.join().unwrap());
    }

    for i in 1..results.len() {
        assert_eq!(
            results[0], results[i],
            "Thread {} produced different result",
            i
        );
    }
}

// H0: The OS-backed strategy is secretly seeded
// Falsification: Its mean-value estimate is continuous, so two seeded
// runs reproducing it bitwise would expose a seeded stream
#[test]
fn h0_4_os_backed_strategy_varies_between_runs() {
    let config = BenchConfig::builder().samples(10_000).seed(42).build();

    let report1 = run_comparison(&config).unwrap();
    let report2 = run_comparison(&config).unwrap();

    let v1 = report1.integral.get(Generator::OsUniform).unwrap().value;
    let v2 = report2.integral.get(Generator::OsUniform).unwrap().value;

    assert_ne!(
        v1, v2,
        "random_4 reproduced bitwise across runs despite reading the OS"
    );
}

// H0: Run parameters are lost between config and report
#[test]
fn h0_5_report_records_run_parameters() {
    let config = BenchConfig::builder().samples(321).seed(9).build();
    let report = run_comparison(&config).unwrap();

    assert_eq!(report.samples, 321);
    assert_eq!(report.seed, 9);
}
