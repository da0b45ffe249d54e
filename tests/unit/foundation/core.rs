use super::*;

#[test]
fn left_resolves_to_canonical_horizontal() {
    let frame = Direction::Left.resolve();
    assert_eq!(frame.axis, Axis::Horizontal);
    assert_eq!(frame.travel, Travel::Forward);
    assert_eq!(frame.rotation, None);
}

#[test]
fn right_resolves_to_mirrored_horizontal() {
    let frame = Direction::Right.resolve();
    assert_eq!(frame.axis, Axis::Horizontal);
    assert_eq!(frame.travel, Travel::Reverse);
    assert_eq!(
        frame.rotation,
        Some(FrameRotation {
            axis: RotationAxis::Y,
            degrees: 180.0,
        })
    );
}

#[test]
fn up_resolves_to_canonical_vertical() {
    let frame = Direction::Up.resolve();
    assert_eq!(frame.axis, Axis::Vertical);
    assert_eq!(frame.travel, Travel::Forward);
    assert_eq!(frame.rotation, None);
}

#[test]
fn down_resolves_to_mirrored_vertical() {
    let frame = Direction::Down.resolve();
    assert_eq!(frame.axis, Axis::Vertical);
    assert_eq!(frame.travel, Travel::Reverse);
    assert_eq!(
        frame.rotation,
        Some(FrameRotation {
            axis: RotationAxis::X,
            degrees: 180.0,
        })
    );
}

#[test]
fn direction_serde_is_lowercase() {
    assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
    let d: Direction = serde_json::from_str("\"right\"").unwrap();
    assert_eq!(d, Direction::Right);
}

#[test]
fn speed_rejects_non_positive_and_non_finite() {
    assert!(Speed::new(0.0).is_err());
    assert!(Speed::new(-25.0).is_err());
    assert!(Speed::new(f64::NAN).is_err());
    assert!(Speed::new(f64::INFINITY).is_err());
    assert_eq!(Speed::new(80.0).unwrap().px_per_sec, 80.0);
}

#[test]
fn speed_default_is_50() {
    assert_eq!(Speed::default().px_per_sec, 50.0);
}

#[test]
fn speed_serializes_as_bare_number() {
    let s: Speed = serde_json::from_str("80").unwrap();
    assert_eq!(s.px_per_sec, 80.0);
    assert_eq!(serde_json::to_string(&s).unwrap(), "80.0");
}

#[test]
fn generated_ids_do_not_collide() {
    let ids: std::collections::HashSet<String> = (0..64)
        .map(|_| MarqueeId::generate().as_str().to_owned())
        .collect();
    assert_eq!(ids.len(), 64);
    assert!(ids.iter().all(|id| id.starts_with("marquee_")));
}

#[test]
fn named_ids_are_prefixed() {
    assert_eq!(MarqueeId::from_name("hero").as_str(), "marquee_hero");
}
