use totsu_boolrelax::prelude::*;
use totsu_boolrelax::*;

use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use anyhow::Result;
use num_traits::Num;

type La = FloatGeneric<f64>;
type ABoolLp = BoolLp<La>;
type ASolve = TotsuSolve<La>;

fn num_by_env<N: Num + std::fmt::Display>(e: &str) -> Option<N>
{
    if let Some(v) = std::env::var(e).ok()
                     .and_then(|s| {N::from_str_radix(&s, 10).ok()}) {
        log::info!("{}: {}", e, v);
        Some(v)
    }
    else {
        None
    }
}

fn set_par_by_env(p: &mut SolverParam<f64>)
{
    p.max_iter = num_by_env("MAX_ITER").or(p.max_iter);
    p.eps_acc = num_by_env("EPS_ACC").unwrap_or(p.eps_acc);
    p.eps_inf = num_by_env("EPS_INF").unwrap_or(p.eps_inf);
    p.eps_zero = num_by_env("EPS_ZERO").unwrap_or(p.eps_zero);
    p.log_period = num_by_env("LOG_PERIOD").unwrap_or(p.log_period);
}

/// main
fn main() -> Result<()> {
    env_logger::init();

    //----- make a random boolean LP

    let m: usize = num_by_env("M").unwrap_or(300);
    let n: usize = num_by_env("N").unwrap_or(100);
    let seed: u64 = num_by_env("SEED").unwrap_or(0);
    let n_thresh: usize = num_by_env("N_THRESH").unwrap_or(100);

    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let lp = ABoolLp::random(m, n, &mut rng);
    log::debug!("A: {:?}", lp.mat_a().size());

    //----- solve the relaxation

    let s = ASolve::new().par(|p| {
        p.max_iter = Some(1_000_000);
        set_par_by_env(p);
    });

    let rlx = solve_relaxed(&lp, &s)?;
    println!("status: {}", rlx.status());
    println!("relaxed optimal value (lower bound): {:.4}", rlx.value());

    let x_rlx = match rlx.x() {
        Some(x) => x,
        None => return Ok(()),
    };

    //----- sweep thresholds

    let points = sweep(&lp, x_rlx, &linspace_thresholds(n_thresh), 0.)?;

    println!("{:>9} {:>10} {:>13} {:>8}", "threshold", "objective", "max_violation", "feasible");
    for p in &points {
        println!("{:>9.3} {:>10.4} {:>13.4} {:>8}", p.threshold, p.objective, p.max_violation, p.feasible);
    }

    match best_feasible(&points, lp.objective_sense()) {
        Some(b) => {
            println!("best feasible threshold {:.3}: objective {:.4}, gap to lower bound {:.4}",
                b.threshold, b.objective, b.objective - rlx.value());
        },
        None => println!("no feasible rounded candidate"),
    }

    Ok(())
}
