use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use totsu_boolrelax::prelude::*;
use totsu_boolrelax::*;

type La = FloatGeneric<f64>;

type ABoolLp = BoolLp<La>;
type ASolve = TotsuSolve<La>;

//

#[test]
fn test_sweep_random()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let lp = ABoolLp::random(30, 10, &mut Xoshiro256StarStar::seed_from_u64(0));
    let s = ASolve::new().par(|p| {p.max_iter = Some(100_000)});

    let rlx = solve_relaxed(&lp, &s).unwrap();
    assert_eq!(rlx.status(), RelaxStatus::Optimal);

    let x_rlx = rlx.x().unwrap();
    assert_eq!(x_rlx.len(), 10);
    for &x in x_rlx {
        assert!((0. ..= 1.).contains(&x));
    }

    let thresholds: Vec<f64> = linspace_thresholds(11);
    let points = sweep(&lp, x_rlx, &thresholds, 0.).unwrap();
    assert_eq!(points.len(), 11);

    for (p, &t) in points.iter().zip(&thresholds) {
        assert_eq!(p.threshold, t);
        assert_eq!(p.feasible, lp.is_feasible(&p.x_hat));
        assert_eq!(p.feasible, p.max_violation <= 0.);

        // relaxed optimum is a lower bound of every feasible candidate
        if p.feasible {
            assert!(rlx.value() <= p.objective + 1e-3 * (1. + p.objective.abs()));
        }
    }

    // t = 0 selects everything, which violates A x <= A 1 / 2
    assert!(points[0].x_hat.iter().all(|&v| v == 1.));
    assert!(!points[0].feasible);

    match best_feasible(&points, Sense::Minimize) {
        Some(b) => {
            assert!(b.feasible);
            assert!(points.iter().filter(|p| p.feasible).all(|p| b.objective <= p.objective));
        },
        None => assert!(points.iter().all(|p| !p.feasible)),
    }
}

//

#[test]
fn test_sweep_invalid()
{
    let lp = ABoolLp::random(3, 2, &mut Xoshiro256StarStar::seed_from_u64(0));

    let rslt = sweep(&lp, &[0.2, 0.8], &[0.5, 2.0], 0.);
    assert_eq!(rslt.err(), Some(RelaxError::InvalidThreshold));
}
