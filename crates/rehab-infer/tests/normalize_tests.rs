mod common;

use common::{person_from_body_points, standing_person};
use rehab_base::Vec2;
use rehab_infer::{
    filter_body_keypoints, normalize, BodyPart, InferError, Keypoint, Person, CLASSIFY_SIZE,
    HISTORY_SIZE,
};

const EPS: f32 = 1e-3;

fn transformed(person: &Person, f: impl Fn(Vec2<f32>) -> Vec2<f32>) -> Person {
    Person::new(
        person
            .keypoints
            .iter()
            .map(|k| Keypoint {
                position: f(k.position),
                ..*k
            })
            .collect(),
    )
}

fn assert_close(a: &[f32], b: &[f32]) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        assert!((x - y).abs() < EPS, "{x} != {y}");
    }
}

#[test]
fn test_filter_drops_facial_keypoints() {
    let person = standing_person();
    let (xs, ys) = filter_body_keypoints(&person);
    assert_eq!(xs.len(), 12);
    assert_eq!(ys.len(), 12);
    // left shoulder comes first once the face is removed
    assert_eq!((xs[0], ys[0]), (120.0, 60.0));
}

#[test]
fn test_facial_keypoints_do_not_affect_normalization() {
    let person = standing_person();
    let moved_face = Person::new(
        person
            .keypoints
            .iter()
            .map(|k| {
                if k.body_part.is_facial() {
                    Keypoint {
                        position: Vec2::new(-5000.0, 9000.0),
                        ..*k
                    }
                } else {
                    *k
                }
            })
            .collect(),
    );

    let a = normalize(&person, CLASSIFY_SIZE).unwrap();
    let b = normalize(&moved_face, CLASSIFY_SIZE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_unit_square_maps_to_box_corners() {
    let person = person_from_body_points(&[
        (BodyPart::LeftShoulder, 0.0, 0.0),
        (BodyPart::RightShoulder, 1.0, 0.0),
        (BodyPart::LeftHip, 0.0, 1.0),
        (BodyPart::RightHip, 1.0, 1.0),
    ]);

    let frame = normalize(&person, 28.0).unwrap();
    assert_close(frame.xs(), &[0.0, 28.0, 0.0, 28.0]);
    assert_close(frame.ys(), &[0.0, 0.0, 28.0, 28.0]);
}

#[test]
fn test_aspect_ratio_preserved_and_centered() {
    // 2 wide, 1 tall: x spans the box, y is centered in it
    let person = person_from_body_points(&[
        (BodyPart::LeftWrist, 0.0, 0.0),
        (BodyPart::RightWrist, 2.0, 1.0),
    ]);

    let frame = normalize(&person, 28.0).unwrap();
    assert_close(frame.xs(), &[0.0, 28.0]);
    assert_close(frame.ys(), &[7.0, 21.0]);
}

#[test]
fn test_output_within_box() {
    let person = standing_person();
    for size in [CLASSIFY_SIZE, HISTORY_SIZE] {
        let frame = normalize(&person, size).unwrap();
        assert_eq!(frame.size(), size);
        for &v in frame.xs().iter().chain(frame.ys()) {
            assert!((-EPS..=size + EPS).contains(&v), "{v} outside [0, {size}]");
        }
    }
}

/// Bodies with different positions, spreads and aspect ratios
fn sample_people() -> Vec<Person> {
    vec![
        standing_person(),
        // entirely in negative coordinates
        person_from_body_points(&[
            (BodyPart::LeftShoulder, -300.0, -400.0),
            (BodyPart::RightShoulder, -100.0, -380.0),
            (BodyPart::LeftHip, -280.0, -120.0),
            (BodyPart::RightAnkle, -150.0, -50.0),
        ]),
        // tiny spread near the origin
        person_from_body_points(&[
            (BodyPart::LeftHip, 0.002, 0.004),
            (BodyPart::RightHip, 0.006, 0.0041),
            (BodyPart::LeftKnee, 0.003, 0.005),
        ]),
        // wide and flat, x extent dominates
        person_from_body_points(&[
            (BodyPart::LeftWrist, 10.0, 50.0),
            (BodyPart::RightWrist, 910.0, 52.0),
            (BodyPart::LeftElbow, 300.0, 49.0),
        ]),
    ]
}

/// Largest extent of the body keypoints
fn spread(person: &Person) -> f32 {
    let (xs, ys) = filter_body_keypoints(person);
    let extent = |v: &[f32]| {
        v.iter().copied().fold(f32::NEG_INFINITY, f32::max)
            - v.iter().copied().fold(f32::INFINITY, f32::min)
    };
    extent(&xs).max(extent(&ys))
}

#[test]
fn test_translation_invariance() {
    for person in sample_people() {
        let reference = normalize(&person, CLASSIFY_SIZE).unwrap();
        let extent = spread(&person);
        for (dx, dy) in [(-0.7, 4.1), (3.0, -2.5), (12.0, 12.0)] {
            let shifted = transformed(&person, |p| p + Vec2::new(dx * extent, dy * extent));
            let frame = normalize(&shifted, CLASSIFY_SIZE).unwrap();
            assert_close(reference.xs(), frame.xs());
            assert_close(reference.ys(), frame.ys());
        }
    }
}

#[test]
fn test_scale_invariance() {
    for person in sample_people() {
        let reference = normalize(&person, HISTORY_SIZE).unwrap();
        for factor in [3.7, 0.05, 120.0] {
            let scaled = transformed(&person, |p| p * factor);
            let frame = normalize(&scaled, HISTORY_SIZE).unwrap();
            assert_close(reference.xs(), frame.xs());
            assert_close(reference.ys(), frame.ys());
        }
    }
}

#[test]
fn test_negative_scale_mirrors_within_box() {
    for person in sample_people() {
        let reference = normalize(&person, CLASSIFY_SIZE).unwrap();
        for factor in [-1.0, -2.5] {
            let mirrored = transformed(&person, |p| p * factor);
            let frame = normalize(&mirrored, CLASSIFY_SIZE).unwrap();
            let flip = |v: &[f32]| v.iter().map(|x| CLASSIFY_SIZE - x).collect::<Vec<_>>();
            assert_close(&flip(reference.xs()), frame.xs());
            assert_close(&flip(reference.ys()), frame.ys());
        }
    }
}

#[test]
fn test_input_vector_is_xs_then_ys() {
    let person = person_from_body_points(&[
        (BodyPart::LeftKnee, 0.0, 0.0),
        (BodyPart::RightKnee, 1.0, 1.0),
    ]);
    let frame = normalize(&person, 28.0).unwrap();
    let input = frame.input_vector();
    assert_eq!(input.len(), 4);
    assert_close(&input, &[0.0, 28.0, 0.0, 28.0]);
}

#[test]
fn test_coincident_keypoints_are_invalid_input() {
    let person = person_from_body_points(&[
        (BodyPart::LeftHip, 5.0, 5.0),
        (BodyPart::RightHip, 5.0, 5.0),
        (BodyPart::LeftKnee, 5.0, 5.0),
    ]);
    let result = normalize(&person, CLASSIFY_SIZE);
    assert!(matches!(result, Err(InferError::InvalidInput(_))));
}

#[test]
fn test_single_keypoint_is_invalid_input() {
    let person = person_from_body_points(&[(BodyPart::LeftHip, 5.0, 5.0)]);
    assert!(matches!(
        normalize(&person, CLASSIFY_SIZE),
        Err(InferError::InvalidInput(_))
    ));
}

#[test]
fn test_face_only_person_is_invalid_input() {
    let person = person_from_body_points(&[
        (BodyPart::Nose, 1.0, 1.0),
        (BodyPart::LeftEye, 2.0, 0.0),
    ]);
    assert!(matches!(
        normalize(&person, CLASSIFY_SIZE),
        Err(InferError::InvalidInput(_))
    ));
}

#[test]
fn test_non_finite_coordinates_are_invalid_input() {
    let person = person_from_body_points(&[
        (BodyPart::LeftHip, 0.0, 0.0),
        (BodyPart::RightHip, f32::NAN, 1.0),
    ]);
    assert!(matches!(
        normalize(&person, CLASSIFY_SIZE),
        Err(InferError::InvalidInput(_))
    ));

    let person = person_from_body_points(&[
        (BodyPart::LeftHip, 0.0, f32::INFINITY),
        (BodyPart::RightHip, 1.0, 1.0),
    ]);
    assert!(matches!(
        normalize(&person, CLASSIFY_SIZE),
        Err(InferError::InvalidInput(_))
    ));
}

#[test]
fn test_non_finite_facial_keypoint_is_ignored() {
    let person = person_from_body_points(&[
        (BodyPart::Nose, f32::NAN, f32::NAN),
        (BodyPart::LeftHip, 0.0, 0.0),
        (BodyPart::RightHip, 1.0, 1.0),
    ]);
    let frame = normalize(&person, CLASSIFY_SIZE).unwrap();
    assert_close(frame.xs(), &[0.0, 28.0]);
}

#[test]
fn test_non_positive_size_is_invalid_input() {
    let person = standing_person();
    assert!(matches!(
        normalize(&person, 0.0),
        Err(InferError::InvalidInput(_))
    ));
}
