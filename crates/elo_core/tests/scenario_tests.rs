use elo_core::{
    bootstrap_batch, bootstrap_shuffle, from_comparative_score, replay, summarize, EloError,
    Outcome, RatingPair, ScoreProtocol, DEFAULT_RATING,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn ccr_corpus_trajectory() {
    let corpus: [i64; 4] = [70, 70, 30, 50];

    let outcomes: Vec<Outcome> = corpus.iter().map(|&s| from_comparative_score(s)).collect();
    assert_eq!(
        outcomes,
        vec![Outcome::Loss, Outcome::Loss, Outcome::Win, Outcome::Tie]
    );

    let trajectory = replay(RatingPair::default(), &corpus, ScoreProtocol::Comparative).unwrap();
    assert_eq!(
        trajectory,
        vec![
            RatingPair::new(1484.0, 1516.0),
            RatingPair::new(1469.0, 1531.0),
            RatingPair::new(1488.0, 1512.0),
            RatingPair::new(1489.0, 1511.0),
        ]
    );
}

#[test]
fn bootstrap_series_summarizes() {
    let corpus: Vec<i64> = (0..40).map(|i| (i * 37) % 100).collect();

    let mut rng = StdRng::seed_from_u64(2024);
    let series = bootstrap_shuffle(
        &corpus,
        ScoreProtocol::Comparative,
        200,
        DEFAULT_RATING,
        DEFAULT_RATING,
        &mut rng,
    )
    .unwrap();
    assert_eq!(series.len(), 200);

    let (a, b) = series.summaries().unwrap();
    assert!(a.mean.is_finite() && b.mean.is_finite());
    assert!(a.std_dev >= 0.0 && b.std_dev >= 0.0);
    assert_eq!(summarize(&series.rating_a).unwrap(), a);
}

#[test]
fn bootstrap_batch_prefers_better_subject() {
    // A always scores 4 or 5, B always 1 or 2: every batch is a win for A.
    let scores_a: Vec<i64> = (0..50).map(|i| 4 + i % 2).collect();
    let scores_b: Vec<i64> = (0..50).map(|i| 1 + i % 2).collect();

    let mut rng = StdRng::seed_from_u64(5);
    let series = bootstrap_batch(&scores_a, &scores_b, 100, 1500.0, 1500.0, &mut rng).unwrap();
    let last = series.last().unwrap();
    assert!(last.rating_a > last.rating_b);
    assert!(series.gaps().windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn errors_abort_without_partial_output() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = bootstrap_shuffle(&[50], ScoreProtocol::Comparative, 0, 1500.0, 1500.0, &mut rng)
        .unwrap_err();
    assert!(matches!(err, EloError::InvalidParameter(_)));

    let err = bootstrap_batch(&[1, 2, 3], &[1, 2, 3], 10, 1500.0, 1500.0, &mut rng).unwrap_err();
    assert!(matches!(err, EloError::InvalidCorpus(_)));
    assert!(err.to_string().starts_with("Invalid corpus"));
}
