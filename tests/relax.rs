use float_eq::assert_float_eq;
use totsu_boolrelax::prelude::*;
use totsu_boolrelax::*;

type La = FloatGeneric<f64>;

type AMatBuild = MatBuild<La>;
type ASolve = TotsuSolve<La>;

fn solver() -> ASolve
{
    ASolve::new().par(|p| {p.max_iter = Some(100_000)})
}

//

#[test]
fn test_relax1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // minimize -x0 - 2 x1  s.t.  x0 + x1 <= 1
    let vec_c = AMatBuild::col(&[-1., -2.]);
    let mat_a = AMatBuild::new(MatType::General(1, 2)).iter_rowmaj(&[
        1., 1.,
    ]);
    let vec_b = AMatBuild::col(&[1.]);

    let lp = BoolLp::new(vec_c, mat_a, vec_b).unwrap();
    let rlx = solve_relaxed(&lp, &solver()).unwrap();
    println!("{}", rlx.status());

    assert_eq!(rlx.status(), RelaxStatus::Optimal);
    assert_float_eq!(rlx.x().unwrap(), [0., 1.].as_ref(), abs_all <= 1e-3);
    assert_float_eq!(rlx.value(), -2., abs <= 1e-3);
}

//

#[test]
fn test_relax2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // fractional optimum: maximize x0 + x1 + x2  s.t.  2 x0 + 2 x1 + 2 x2 <= 3
    let vec_c = AMatBuild::col(&[1., 1., 1.]);
    let mat_a = AMatBuild::new(MatType::General(1, 3)).iter_rowmaj(&[
        2., 2., 2.,
    ]);
    let vec_b = AMatBuild::col(&[3.]);

    let lp = BoolLp::new(vec_c, mat_a, vec_b).unwrap().sense(Sense::Maximize);
    let outcome = relax_and_round(&lp, &solver(), 0.5, 0.).unwrap();

    assert_eq!(outcome.relaxed.status(), RelaxStatus::Optimal);
    assert_float_eq!(outcome.relaxed.value(), 1.5, abs <= 1e-3);
    for &x in outcome.relaxed.x().unwrap() {
        assert!((0. ..= 1.).contains(&x));
    }

    // the relaxed optimum bounds every boolean candidate from above
    let rounded = outcome.rounded.unwrap();
    if rounded.feasible {
        assert!(rounded.objective <= outcome.relaxed.value() + 1e-3);
    }
}

//

#[test]
fn test_relax_infeasible()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // x <= -1 contradicts x >= 0
    let vec_c = AMatBuild::col(&[1.]);
    let mat_a = AMatBuild::new(MatType::General(1, 1)).iter_rowmaj(&[
        1.,
    ]);
    let vec_b = AMatBuild::col(&[-1.]);

    let lp = BoolLp::new(vec_c, mat_a, vec_b).unwrap();
    let outcome = relax_and_round(&lp, &solver(), 0.5, 0.).unwrap();
    println!("{}", outcome.relaxed.status());

    assert_eq!(outcome.relaxed.status(), RelaxStatus::Infeasible);
    assert_eq!(outcome.relaxed.value(), f64::INFINITY);
    assert!(outcome.rounded.is_none());
}

//

#[test]
fn test_relax_input_errors()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let vec_c = AMatBuild::col(&[1., 1.]);
    let mat_a = AMatBuild::new(MatType::General(2, 2));
    let vec_b = AMatBuild::col(&[1.]);

    let rslt = BoolLp::new(vec_c, mat_a, vec_b);
    assert_eq!(rslt.err(), Some(RelaxError::SizeMismatch));

    let vec_c = AMatBuild::col(&[1., 1.]);
    let mat_a = AMatBuild::new(MatType::General(1, 2));
    let vec_b = AMatBuild::col(&[1.]);

    let lp = BoolLp::new(vec_c, mat_a, vec_b).unwrap();
    let rslt = relax_and_round(&lp, &solver(), 1.5, 0.);
    assert_eq!(rslt.err(), Some(RelaxError::InvalidThreshold));
}
