use clap::Parser;
use mtrand_rs::MtRand;

const NBINS: usize = 500;
const XMAX: f64 = 10.0;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of iterations to run
    #[arg(short, long)]
    iterations: usize,

    /// Generator seed
    #[arg(short, long, default_value_t = 5489)]
    seed: u32,
}

/// Inversion sampler used as the reference
fn inversion(rng: &mut MtRand) -> f64 {
    -rng.uniform_open().ln()
}

fn main() {
    let mut real = [0u64; NBINS];
    let mut sim = [0u64; NBINS];

    let args = Args::parse();
    let mut rng = MtRand::new(args.seed);
    let scale = NBINS as f64 / XMAX;

    for _i in 0..args.iterations {
        let x0 = inversion(&mut rng);
        if x0 < XMAX {
            real[(scale * x0).floor() as usize] += 1;
        }
        let x1 = rng.exponential();
        if x1 < XMAX {
            sim[(scale * x1).floor() as usize] += 1;
        }
    }

    for i in 0..NBINS {
        println!("{} {} {}", i as f64 / scale, real[i], sim[i]);
        if real[i] == 0 && sim[i] == 0 {
            break;
        }
    }
}
