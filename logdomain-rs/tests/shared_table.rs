use logdomain_rs::{
    LogDomainError, LogSum, LogSumTable, MtRand, dirichlet_log_with, log_beta_with, log_gamma,
    log_sum_exact,
};
use std::sync::{Arc, OnceLock};
use std::thread;

fn table() -> &'static LogSumTable {
    static TABLE: OnceLock<LogSumTable> = OnceLock::new();
    TABLE.get_or_init(|| LogSumTable::build().expect("default table builds"))
}

fn draws(seed: u32, table: &LogSumTable) -> Vec<Vec<f64>> {
    let mut rng = MtRand::new(seed);
    (0..1000)
        .map(|_| dirichlet_log_with(&mut rng, &[0.1, 5.0, 2.0], table).unwrap())
        .collect()
}

#[test]
fn table_shared_by_scoped_threads() {
    let table = table();
    let serial: Vec<_> = (1..=4).map(|seed| draws(seed, table)).collect();

    let parallel: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (1..=4)
            .map(|seed| s.spawn(move || draws(seed, table)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, parallel, "threads must reproduce the serial streams");
    for x in parallel.iter().flatten() {
        let total: f64 = x.iter().map(|v| v.exp()).sum();
        assert!((total - 1.0).abs() < 1e-9, "components sum to {}", total);
    }
}

#[test]
fn owned_table_behind_arc() {
    let table = Arc::new(
        LogSumTable::build_with(&logdomain_rs::LogSumConfig::default().with_panels(1000)).unwrap(),
    );
    let handles: Vec<_> = (0..3)
        .map(|i| {
            let table = Arc::clone(&table);
            thread::spawn(move || table.log_sum(i as f64, i as f64))
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let v = h.join().unwrap();
        assert!((v - (i as f64 + std::f64::consts::LN_2)).abs() < 1e-12);
    }
    match Arc::try_unwrap(table) {
        Ok(table) => table.release(),
        Err(_) => panic!("all clones were joined"),
    }
}

#[test]
fn table_log_sum_tracks_exact() {
    let table = table();
    let mut rng = MtRand::new(8);
    for _ in 0..100_000 {
        let a = 40.0 * rng.uniform_closed() - 20.0;
        let b = 40.0 * rng.uniform_closed() - 20.0;
        let fast = table.log_sum(a, b);
        let exact = log_sum_exact(a, b);
        assert!(
            (fast - exact).abs() < 1e-9,
            "log_sum({}, {}): table {} vs exact {}",
            a,
            b,
            fast,
            exact
        );
        assert_eq!(fast.to_bits(), table.log_sum(b, a).to_bits());
    }
}

#[test]
fn beta_mean_with_table() {
    let table = table();
    let mut rng = MtRand::new(11);
    let n = 100_000;
    let mean = (0..n)
        .map(|_| log_beta_with(&mut rng, 2.0, 2.0, table).unwrap().exp())
        .sum::<f64>()
        / n as f64;
    assert!((mean - 0.5).abs() < 0.01, "Beta(2,2) mean {}", mean);
}

#[test]
fn errors_propagate_with_question_mark() {
    fn two_gammas(rng: &mut MtRand, a: f64, b: f64) -> logdomain_rs::Result<f64> {
        Ok(log_gamma(rng, a)? + log_gamma(rng, b)?)
    }

    let mut rng = MtRand::new(1);
    assert!(two_gammas(&mut rng, 1.0, 2.0).is_ok());
    let err = two_gammas(&mut rng, 1.0, -1.0).unwrap_err();
    assert_eq!(
        err,
        LogDomainError::InvalidParameter {
            name: "shape",
            value: -1.0
        }
    );
    assert_eq!(err.to_string(), "invalid parameter: shape = -1");
}
