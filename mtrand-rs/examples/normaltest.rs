use clap::Parser;
use mtrand_rs::MtRand;
use std::f64::consts::PI;

#[derive(Parser, Debug)]
#[command(version, about = "Histogram of normal variates against the density", long_about = None)]
struct Args {
    /// Number of variates to draw
    #[arg(short, long, default_value_t = 10_000_000)]
    nvariates: usize,

    /// Number of histogram bins
    #[arg(
        short,
        long,
        default_value_t = 100,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    bins: usize,

    /// Generator seed
    #[arg(short, long, default_value_t = 5489)]
    seed: u32,
}

fn main() {
    let args = Args::parse();
    let mut rng = MtRand::new(args.seed);

    let mut variate = vec![0.0f64; args.nvariates];
    let mut bin = vec![0usize; args.bins];

    rng.fill_normal(&mut variate);

    let minv = variate.iter().cloned().fold(f64::INFINITY, f64::min);
    let maxv = variate.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let binwidth = (maxv - minv) / args.bins as f64;

    for &v in &variate {
        let mut j = ((v - minv) / binwidth).floor() as usize;
        if j >= args.bins {
            j = args.bins - 1; // guard against max edge
        }
        bin[j] += 1;
    }

    // Expected count from the density at the bin centre
    let a = args.nvariates as f64 * binwidth / (2.0 * PI).sqrt();
    for (i, count) in bin.iter().enumerate() {
        let x = binwidth * (i as f64 + 0.5) + minv;
        let expected = a * (-0.5 * x * x).exp();
        println!("{} {} {}", x, count, expected);
    }
}
