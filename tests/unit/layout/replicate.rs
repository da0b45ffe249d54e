use super::*;
use crate::geometry::measure::SlideGeometry;

/// Strip with back-to-back slides of the given extents (no gaps).
fn strip(container_extent: f64, extents: &[f64]) -> MeasuredStrip {
    let mut edge = 0.0;
    let slides = extents
        .iter()
        .map(|&extent| {
            edge += extent;
            SlideGeometry {
                extent,
                ending_edge: edge,
            }
        })
        .collect();
    MeasuredStrip {
        container_extent,
        content_extent: edge,
        slides,
    }
}

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("slide{i}")).collect()
}

#[test]
fn single_slide_filling_the_container_replicates_twice() {
    // Container 500, one slide of 500: removing it leaves zero coverage,
    // so two extra passes are planned and the strip triples.
    let measured = strip(500.0, &[500.0]);
    let result = plan(&measured, &labels(1));

    assert_eq!(result.slides.len(), 3);
    assert_eq!(result.slide_edges, vec![500.0, 1000.0, 1500.0]);
    assert_eq!(result.effective_content_extent, 1500.0);
}

#[test]
fn ample_content_is_left_unreplicated() {
    // Container 200, four slides of 250: removing any one slide still
    // leaves 750 >= 200 of coverage.
    let measured = strip(200.0, &[250.0, 250.0, 250.0, 250.0]);
    let slides = labels(4);
    let result = plan(&measured, &slides);

    assert_eq!(result.slides, slides);
    assert_eq!(result.slide_edges, vec![250.0, 500.0, 750.0, 1000.0]);
    assert_eq!(result.effective_content_extent, 1000.0);
}

#[test]
fn short_content_replicates_until_the_container_is_covered() {
    // One 200px pass inside a 500px container: floor(500/200) + 1 = 3
    // extra passes, four in total.
    let measured = strip(500.0, &[100.0, 100.0]);
    let result = plan(&measured, &labels(2));

    assert_eq!(result.slides.len(), 8);
    assert_eq!(
        result.slide_edges,
        vec![100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0]
    );
    assert_eq!(result.effective_content_extent, 800.0);
    assert!(result.effective_content_extent >= measured.container_extent);
}

#[test]
fn replicas_inherit_original_spacing() {
    // Non-uniform extents with a gap between the slides.
    let measured = MeasuredStrip {
        container_extent: 350.0,
        content_extent: 400.0,
        slides: vec![
            SlideGeometry {
                extent: 120.0,
                ending_edge: 120.0,
            },
            SlideGeometry {
                extent: 250.0,
                ending_edge: 400.0,
            },
        ],
    };
    let result = plan(&measured, &labels(2));

    // Content exceeds the container, so a single extra pass suffices.
    assert_eq!(result.slides.len(), 4);
    assert_eq!(result.slide_edges, vec![120.0, 400.0, 520.0, 800.0]);
    assert_eq!(result.effective_content_extent, 800.0);
}

#[test]
fn expanded_sequence_repeats_the_original_order() {
    let measured = strip(500.0, &[500.0]);
    let result = plan(&measured, &vec!["only".to_string()]);
    assert!(result.slides.iter().all(|s| s.as_str() == "only"));
}

#[test]
fn no_slides_is_a_noop_plan() {
    let measured = MeasuredStrip::unavailable();
    let result = plan::<String>(&measured, &[]);
    assert_eq!(result, ReplicationPlan::empty());
}

#[test]
fn degenerate_extent_never_replicates() {
    // Zero-sized content cannot be tiled; the plan passes through.
    let measured = strip(300.0, &[0.0]);
    let slides = labels(1);
    let result = plan(&measured, &slides);

    assert_eq!(result.slides, slides);
    assert_eq!(result.slide_edges, vec![0.0]);
    assert_eq!(result.effective_content_extent, 0.0);
}

#[test]
fn planning_is_idempotent() {
    let measured = strip(500.0, &[120.0, 80.0, 300.0]);
    let slides = labels(3);
    assert_eq!(plan(&measured, &slides), plan(&measured, &slides));
}

#[test]
fn replication_covers_non_uniform_distributions() {
    // Sweep of skewed slide-size mixes against a range of containers:
    // after planning, the strip must always cover the container.
    let distributions: &[&[f64]] = &[
        &[10.0],
        &[600.0],
        &[10.0, 590.0],
        &[50.0, 50.0, 500.0],
        &[300.0, 1.0, 1.0, 1.0],
        &[120.0, 80.0, 240.0, 60.0, 33.0],
        &[1.5, 2.5, 3.25, 400.0, 0.75],
    ];
    for container in [50.0, 120.0, 250.0, 499.0, 500.0, 501.0, 777.0] {
        for extents in distributions {
            let measured = strip(container, extents);
            let result = plan(&measured, &labels(extents.len()));
            assert!(
                result.effective_content_extent >= container,
                "gap for container {container} with extents {extents:?}"
            );
            assert_eq!(result.slides.len(), result.slide_edges.len());
        }
    }
}

#[test]
fn rotate_initial_rotates_before_measurement() {
    let slides = vec![0, 1, 2, 3];
    assert_eq!(rotate_initial(2, slides.clone()), vec![2, 3, 0, 1]);
    assert_eq!(rotate_initial(0, slides.clone()), vec![0, 1, 2, 3]);
    // An out-of-range start leaves the order unchanged.
    assert_eq!(rotate_initial(4, slides.clone()), vec![0, 1, 2, 3]);
    assert_eq!(rotate_initial(9, slides), vec![0, 1, 2, 3]);
    assert_eq!(rotate_initial::<u8>(1, Vec::new()), Vec::<u8>::new());
}
