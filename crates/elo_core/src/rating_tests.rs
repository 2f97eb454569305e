use super::*;

fn flat_k(k: f64) -> EloEngine {
    EloEngine::new(KFactorSchedule {
        high_k: k,
        mid_k: k,
        base_k: k,
        ..KFactorSchedule::STANDARD
    })
    .unwrap()
}

#[test]
fn test_expected_score_equal_ratings() {
    for r in [0.0, 1500.0, 2400.0, -300.0] {
        assert!((expected_score(r, r) - 0.5).abs() < 1e-12);
    }
}

#[test]
fn test_expected_score_symmetry() {
    let pairs = [(1500.0, 1600.0), (2400.0, 1200.0), (1000.0, 1000.5), (3000.0, 0.0)];
    for (a, b) in pairs {
        let sum = expected_score(a, b) + expected_score(b, a);
        assert!((sum - 1.0).abs() < 1e-12, "sum was {} for ({}, {})", sum, a, b);
    }
}

#[test]
fn test_expected_score_favours_higher_rating() {
    assert!(expected_score(1900.0, 1500.0) > 0.9);
    assert!(expected_score(1500.0, 1900.0) < 0.1);
}

#[test]
fn test_k_factor_boundaries() {
    assert_eq!(k_factor(2400.0), 16.0);
    assert_eq!(k_factor(2399.0), 24.0);
    assert_eq!(k_factor(2000.0), 24.0);
    assert_eq!(k_factor(1999.0), 32.0);
    assert_eq!(k_factor(1500.0), 32.0);
}

#[test]
fn test_tie_at_equal_ratings_is_stable() {
    let mut pair = RatingPair::new(1700.0, 1700.0);
    pair.update(Outcome::Tie);
    assert_eq!(pair, RatingPair::new(1700.0, 1700.0));
}

#[test]
fn test_update_from_defaults() {
    let pair = RatingPair::default();
    assert_eq!(pair.updated(Outcome::Win), RatingPair::new(1516.0, 1484.0));
    assert_eq!(pair.updated(Outcome::Loss), RatingPair::new(1484.0, 1516.0));
    // updated() leaves the original alone
    assert_eq!(pair, RatingPair::default());
}

#[test]
fn test_different_k_factors_are_not_zero_sum() {
    // A sits in the top tier (K=16), B in the base tier (K=32).
    let pair = RatingPair::new(2400.0, 1500.0).updated(Outcome::Loss);
    assert_eq!(pair, RatingPair::new(2384.0, 1532.0));
}

#[test]
fn test_rounding_is_half_to_even() {
    // K=5 at equal ratings gives deltas of exactly +/-2.5.
    let engine = flat_k(5.0);
    let mut pair = RatingPair::new(1500.0, 1500.0);
    engine.apply(&mut pair, Outcome::Win);
    assert_eq!(pair, RatingPair::new(1502.0, 1498.0));

    // K=3 gives +/-1.5, which lands on the even neighbour 2.
    let engine = flat_k(3.0);
    let mut pair = RatingPair::new(1500.0, 1500.0);
    engine.apply(&mut pair, Outcome::Loss);
    assert_eq!(pair, RatingPair::new(1498.0, 1502.0));
}

#[test]
fn test_deltas_are_whole_numbers() {
    let engine = EloEngine::default();
    let pair = RatingPair::new(1523.0, 1611.0);
    for outcome in [Outcome::Win, Outcome::Tie, Outcome::Loss] {
        let (da, db) = engine.deltas(&pair, outcome);
        assert_eq!(da, da.trunc());
        assert_eq!(db, db.trunc());
    }
}

#[test]
fn test_step_helpers() {
    assert_eq!(
        step_comparative(70, 1500.0, 1500.0),
        RatingPair::new(1484.0, 1516.0)
    );
    assert_eq!(
        step_absolute(4, 3, 1500.0, 1500.0),
        RatingPair::new(1516.0, 1484.0)
    );
    assert_eq!(
        step_signed_difference(0, 1500.0, 1500.0),
        RatingPair::new(1500.0, 1500.0)
    );
}

#[test]
fn test_try_new_rejects_non_finite() {
    assert!(RatingPair::try_new(1500.0, 1500.0).is_ok());
    assert!(matches!(
        RatingPair::try_new(f64::NAN, 1500.0),
        Err(EloError::InvalidParameter(_))
    ));
    assert!(matches!(
        RatingPair::try_new(1500.0, f64::INFINITY),
        Err(EloError::InvalidParameter(_))
    ));
}

#[test]
fn test_schedule_validation() {
    assert!(KFactorSchedule::default().validate().is_ok());

    let inverted = KFactorSchedule {
        mid_threshold: 2500.0,
        ..KFactorSchedule::STANDARD
    };
    assert!(matches!(
        EloEngine::new(inverted),
        Err(EloError::InvalidParameter(_))
    ));

    let zero_k = KFactorSchedule {
        base_k: 0.0,
        ..KFactorSchedule::STANDARD
    };
    assert!(zero_k.validate().is_err());

    let nan_k = KFactorSchedule {
        high_k: f64::NAN,
        ..KFactorSchedule::STANDARD
    };
    assert!(nan_k.validate().is_err());
}

#[test]
fn test_replay_records_every_step() {
    let trajectory = replay(RatingPair::default(), &[70, 70, 30, 50], ScoreProtocol::Comparative)
        .unwrap();
    assert_eq!(trajectory.len(), 4);
    assert_eq!(trajectory[0], RatingPair::new(1484.0, 1516.0));
}

#[test]
fn test_replay_empty_corpus() {
    assert!(matches!(
        replay(RatingPair::default(), &[], ScoreProtocol::Comparative),
        Err(EloError::InvalidCorpus(_))
    ));
}

#[test]
fn test_replay_paired() {
    let trajectory = replay_paired(RatingPair::default(), &[5, 3], &[4, 3]).unwrap();
    assert_eq!(
        trajectory,
        vec![
            RatingPair::new(1516.0, 1484.0),
            // A is now favoured, so a tie costs it a point
            RatingPair::new(1515.0, 1485.0),
        ]
    );

    assert!(matches!(
        replay_paired(RatingPair::default(), &[5, 3], &[4]),
        Err(EloError::InvalidCorpus(_))
    ));
}
