use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;
use totsu_boolrelax::prelude::*;
use totsu_boolrelax::*;
use totsu_boolrelax::rounding::round_threshold;
use totsu_boolrelax::feasibility::{is_feasible, is_feasible_tol};

type La = FloatGeneric<f64>;

type AMatBuild = MatBuild<La>;

fn ones(x_hat: &[f64]) -> Vec<usize>
{
    x_hat.iter().enumerate().filter(|(_, v)| **v == 1.).map(|(i, _)| i).collect()
}

//

#[test]
fn test_scenarios()
{
    let mat_a = AMatBuild::new(MatType::General(1, 2)).iter_rowmaj(&[
        1., 1.,
    ]);
    let vec_b = AMatBuild::col(&[1.]);

    let x_hat = round_threshold(&[0.6, 0.3], 0.5).unwrap();
    assert_eq!(x_hat, vec![1., 0.]);
    assert!(is_feasible(&mat_a, &vec_b, &x_hat));

    let x_hat = round_threshold(&[0.9, 0.9], 0.5).unwrap();
    assert_eq!(x_hat, vec![1., 1.]);
    assert!(!is_feasible(&mat_a, &vec_b, &x_hat));

    let x_hat = round_threshold(&[0.0, 0.4], 0.).unwrap();
    assert_eq!(x_hat, vec![1., 1.]);
}

//

#[test]
fn test_monotonic_idempotent()
{
    let mut rng = Xoshiro256StarStar::seed_from_u64(0);

    for _ in 0.. 20 {
        let x_rlx: Vec<f64> = (0.. 50).map(|_| rng.gen()).collect();
        let t1: f64 = rng.gen();
        let t2: f64 = (t1 + (1. - t1) * rng.gen::<f64>()).min(1.);

        let lo = ones(&round_threshold(&x_rlx, t1).unwrap());
        let hi = ones(&round_threshold(&x_rlx, t2).unwrap());
        assert!(hi.iter().all(|i| lo.contains(i)));

        assert_eq!(round_threshold(&x_rlx, t1), round_threshold(&x_rlx, t1));
    }
}

//

#[test]
fn test_row_permutation()
{
    let mut rng = Xoshiro256StarStar::seed_from_u64(1);

    let (m, n) = (8, 5);
    let mat_a = AMatBuild::new(MatType::General(m, n)).by_fn(|_, _| rng.gen());
    let vec_b = AMatBuild::new(MatType::General(m, 1)).by_fn(|_, _| 2. * rng.gen::<f64>());

    let mut perm: Vec<usize> = (0.. m).collect();
    perm.shuffle(&mut rng);

    let mat_pa = AMatBuild::new(MatType::General(m, n)).by_fn(|r, c| mat_a[(perm[r], c)]);
    let vec_pb = AMatBuild::new(MatType::General(m, 1)).by_fn(|r, _| vec_b[(perm[r], 0)]);

    for _ in 0.. 20 {
        let x_rlx: Vec<f64> = (0.. n).map(|_| rng.gen()).collect();
        let x_hat = round_threshold(&x_rlx, 0.5).unwrap();

        assert_eq!(
            is_feasible(&mat_a, &vec_b, &x_hat),
            is_feasible(&mat_pa, &vec_pb, &x_hat),
        );
        assert_eq!(
            is_feasible_tol(&mat_a, &vec_b, &x_hat, 1e-9),
            is_feasible_tol(&mat_pa, &vec_pb, &x_hat, 1e-9),
        );
    }
}
