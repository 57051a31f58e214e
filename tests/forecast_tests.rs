//! End-to-end checks against the sample degree files

use grade_forecast::error::GradeError;
use grade_forecast::forecast::{
    project_final_score, required_average_for_target, score_projection_series, ProjectionRange,
};
use grade_forecast::loader::parse_degree_file;
use grade_forecast::models::Degree;
use grade_forecast::prompt::{resolve_target, TargetOutcome};
use grade_forecast::report::{ChartFormat, ChartRenderer, ChartSpec, ChartTheme};
use std::fs;
use std::path::Path;

fn sample(name: &str) -> Degree {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("samples/degrees")
        .join(name);
    parse_degree_file(&path).expect("sample degree should load")
}

#[test]
fn physics_year_scores() {
    let degree = sample("physics.toml");

    let year2 = &degree.years[0];
    assert_eq!(year2.total_credits(), 120);
    assert!((year2.score_percentage().unwrap() - 75.25).abs() < 1e-9);
    assert!(!year2.is_in_progress());

    let year3 = &degree.years[1];
    assert_eq!(year3.total_credits(), 45);
    assert!((year3.score_percentage().unwrap() - 75.5).abs() < 1e-9);
    assert!(year3.is_in_progress());
}

#[test]
fn physics_degree_score() {
    let degree = sample("physics.toml");
    let score = degree.score().unwrap();

    assert_eq!(score.score, 75);
    assert!(score.is_projected);
    assert!((degree.remaining_weight() - 0.4).abs() < 1e-9);
}

#[test]
fn physics_targets() {
    let degree = sample("physics.toml");

    assert_eq!(required_average_for_target(&degree, 70.0), Ok(68));
    assert_eq!(required_average_for_target(&degree, 90.0), Ok(98));
    match required_average_for_target(&degree, 95.0) {
        Err(GradeError::TargetGradeNotPossible { required }) => assert!(required > 100.0),
        other => panic!("expected an unreachable target, got {other:?}"),
    }
}

#[test]
fn required_average_reaches_the_target() {
    let degree = sample("physics.toml");
    for target in [60, 65, 70, 75, 80, 85, 90] {
        let required = required_average_for_target(&degree, f64::from(target)).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let projected = project_final_score(&degree, required as f64).unwrap();
        assert!(projected >= i64::from(target), "target {target}");
    }
}

#[test]
fn physics_projection_series() {
    let degree = sample("physics.toml");
    let points = score_projection_series(&degree, 40.0, 100.0, 5.0).unwrap();

    assert_eq!(points.len(), 13);
    assert_eq!(points[0].average, 40.0);
    assert_eq!(points[0].final_score, 52);
    assert_eq!(points[12].average, 100.0);
    assert_eq!(points[12].final_score, 91);
    assert!(points
        .windows(2)
        .all(|pair| pair[0].final_score <= pair[1].final_score));
}

#[test]
fn projection_stop_above_hundred_is_rejected() {
    let degree = sample("physics.toml");
    assert!(matches!(
        score_projection_series(&degree, 40.0, 105.0, 5.0),
        Err(GradeError::TargetGradeNotPossible { .. })
    ));
}

#[test]
fn final_year_degree() {
    let degree = sample("final_year.toml");

    assert!((degree.years[0].score_percentage().unwrap() - 62.0).abs() < 1e-9);
    assert!((degree.years[1].score_percentage().unwrap() - 229.0 / 3.0).abs() < 1e-9);
    assert!((degree.exact_score().unwrap() - 70.6).abs() < 1e-9);
    assert_eq!(degree.calculate_score(), Ok(71));

    assert_eq!(required_average_for_target(&degree, 70.0), Ok(75));
    assert_eq!(project_final_score(&degree, 75.0), Ok(70));
}

#[test]
fn unreachable_target_falls_back_to_projection() {
    let degree = sample("physics.toml");
    let range = ProjectionRange::new(50.0, 100.0, 10.0);

    let outcome = resolve_target(&degree, 95.0, &range, |_| Ok(true)).unwrap();
    let TargetOutcome::Projection { points, .. } = outcome else {
        panic!("expected the projection");
    };
    assert_eq!(points.len(), 6);
}

#[test]
fn projection_chart_files() {
    let degree = sample("physics.toml");
    let points = ProjectionRange::default().project(&degree).unwrap();
    let spec = ChartSpec::projection(
        degree.display_name(),
        &degree.score().unwrap(),
        &points,
        ChartTheme::default(),
    );
    assert_eq!(spec.title, "BSc Physics: current score 75% (projected)");

    let dir = tempfile::tempdir().unwrap();
    for format in [ChartFormat::Html, ChartFormat::Markdown] {
        let path = dir
            .path()
            .join(format!("physics_projection.{}", format.extension()));
        format.renderer().generate(&spec, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("BSc Physics"));
    }
}
