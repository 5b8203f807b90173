use clap::Parser;
use logdomain_rs::{
    Exact, LogDomainError, LogSum, LogSumConfig, LogSumTable, MtRand, dirichlet_log_with,
};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of Dirichlet draws
    #[arg(short, long, default_value_t = 100_000)]
    iterations: usize,

    /// Concentration parameters
    #[arg(short, long, num_args = 1.., default_values_t = vec![0.1, 5.0, 2.0])]
    alphas: Vec<f64>,

    /// Generator seed
    #[arg(short, long, default_value_t = 5489)]
    seed: u32,

    /// Panels in the log-sum table
    #[arg(short, long, default_value_t = logdomain_rs::NUMPANELS)]
    panels: usize,
}

/// Component means of `n` draws, together with the worst closure error
fn run<L: LogSum>(
    rng: &mut MtRand,
    alphas: &[f64],
    n: usize,
    summer: &L,
) -> Result<(Vec<f64>, f64), LogDomainError> {
    let mut means = vec![0.0; alphas.len()];
    let mut worst: f64 = 0.0;
    for _i in 0..n {
        let x = dirichlet_log_with(rng, alphas, summer)?;
        let mut total = 0.0;
        for (m, v) in means.iter_mut().zip(&x) {
            let p = v.exp();
            *m += p;
            total += p;
        }
        worst = worst.max((total - 1.0).abs());
    }
    for m in &mut means {
        *m /= n as f64;
    }
    Ok((means, worst))
}

fn main() -> Result<(), LogDomainError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let args = Args::parse();
    let table = LogSumTable::build_with(&LogSumConfig::default().with_panels(args.panels))?;
    info!(bytes = table.bytes(), "table built");

    let start = Instant::now();
    let (exact, worst_exact) = run(
        &mut MtRand::new(args.seed),
        &args.alphas,
        args.iterations,
        &Exact,
    )?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "exact log-sum");

    let start = Instant::now();
    let (fast, worst_fast) = run(
        &mut MtRand::new(args.seed),
        &args.alphas,
        args.iterations,
        &table,
    )?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "table log-sum");

    let total: f64 = args.alphas.iter().sum();
    for (i, a) in args.alphas.iter().enumerate() {
        println!("{} {} {} {}", a, a / total, exact[i], fast[i]);
    }
    println!("closure error: exact {:e} table {:e}", worst_exact, worst_fast);

    table.release();
    Ok(())
}
