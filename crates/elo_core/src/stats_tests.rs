use super::*;

#[test]
fn test_summarize_population_std_dev() {
    let summary = summarize(&[1500.0, 1520.0, 1480.0]).unwrap();
    assert_eq!(summary.mean, 1500.0);
    assert!((summary.std_dev - 16.3299).abs() < 1e-3);
}

#[test]
fn test_summarize_single_value() {
    let summary = summarize(&[1234.0]).unwrap();
    assert_eq!(summary.mean, 1234.0);
    assert_eq!(summary.std_dev, 0.0);
}

#[test]
fn test_summarize_empty_series() {
    assert_eq!(summarize(&[]), Err(EloError::EmptySeries));
}

#[test]
fn test_normal_pdf_peak() {
    let peak = normal_pdf(0.0, 0.0, 1.0);
    assert!((peak - 0.398_942_28).abs() < 1e-8);
    assert!(normal_pdf(1.0, 0.0, 1.0) < peak);
    assert!((normal_pdf(1.0, 0.0, 1.0) - normal_pdf(-1.0, 0.0, 1.0)).abs() < 1e-12);
}

#[test]
fn test_density_curve_spans_range() {
    let summary = Summary {
        mean: 1800.0,
        std_dev: 200.0,
    };
    let curve = summary.density_curve(1000.0, 2600.0, 100);
    assert_eq!(curve.len(), 100);
    assert_eq!(curve[0].0, 1000.0);
    assert_eq!(curve[99].0, 2600.0);

    let (peak_x, _) = curve
        .iter()
        .copied()
        .fold((0.0, f64::MIN), |best, p| if p.1 > best.1 { p } else { best });
    assert!((peak_x - 1800.0).abs() < 20.0);
}

#[test]
fn test_histogram_counts_and_density() {
    let hist = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 2).unwrap();
    assert_eq!(hist.edges, vec![0.0, 2.0, 4.0]);
    // 4.0 belongs to the last bin
    assert_eq!(hist.counts, vec![2, 3]);

    let area: f64 = hist.densities.iter().map(|d| d * 2.0).sum();
    assert!((area - 1.0).abs() < 1e-12);
}

#[test]
fn test_histogram_single_value() {
    let hist = histogram(&[1500.0, 1500.0], 10).unwrap();
    assert_eq!(hist.counts.iter().sum::<usize>(), 2);
    assert_eq!(hist.edges.first(), Some(&1499.5));
    assert_eq!(hist.edges.last(), Some(&1500.5));
}

#[test]
fn test_histogram_errors() {
    assert_eq!(histogram(&[], 10), Err(EloError::EmptySeries));
    assert!(matches!(
        histogram(&[1.0], 0),
        Err(EloError::InvalidParameter(_))
    ));
}

#[test]
fn test_expected_score_curve() {
    let curve = expected_score_curve(-1000.0, 1000.0, 50);
    assert_eq!(curve.len(), 50);
    assert!(curve.windows(2).all(|w| w[1].1 > w[0].1));
    assert!(curve[0].1 < 0.01);
    assert!(curve[49].1 > 0.99);

    let midpoint = expected_score_curve(0.0, 0.0, 1);
    assert_eq!(midpoint, vec![(0.0, 0.5)]);
}

#[test]
fn test_gain_curve() {
    let curve = gain_curve(32.0, -400.0, 400.0, 3);
    assert_eq!(curve.len(), 3);
    // Winning as a 400-point underdog earns K * 10/11
    assert!((curve[0].1 - 32.0 * 10.0 / 11.0).abs() < 1e-9);
    assert!((curve[1].1 - 16.0).abs() < 1e-12);
    assert!((curve[2].1 - 32.0 / 11.0).abs() < 1e-9);
}

#[test]
fn test_linspace_edges() {
    assert_eq!(linspace(0.0, 1.0, 0).count(), 0);
    assert_eq!(linspace(3.0, 9.0, 1).collect::<Vec<_>>(), vec![3.0]);
    assert_eq!(
        linspace(0.0, 1.0, 5).collect::<Vec<_>>(),
        vec![0.0, 0.25, 0.5, 0.75, 1.0]
    );
}
