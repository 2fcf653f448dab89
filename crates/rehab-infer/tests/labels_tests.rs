use rehab_infer::exercise::EXERCISE_COUNT;
use rehab_infer::ExerciseLabel;

#[test]
fn test_label_table_indices() {
    assert_eq!(ExerciseLabel::ALL.len(), EXERCISE_COUNT);
    for (i, label) in ExerciseLabel::ALL.iter().enumerate() {
        assert_eq!(label.class_index(), i + 1);
        assert_eq!(ExerciseLabel::from_class_index(i + 1), Some(*label));
    }
}

#[test]
fn test_label_names() {
    assert_eq!(ExerciseLabel::from_class_index(1).unwrap().as_str(), "deep squat");
    assert_eq!(
        ExerciseLabel::from_class_index(9).unwrap().to_string(),
        "standing shoulder internal-external rotation"
    );
    assert_eq!(
        ExerciseLabel::from_class_index(10).unwrap(),
        ExerciseLabel::StandingShoulderScaption
    );
}

#[test]
fn test_unmapped_indices() {
    assert_eq!(ExerciseLabel::from_class_index(0), None);
    assert_eq!(ExerciseLabel::from_class_index(11), None);
}

#[test]
fn test_label_from_str() {
    assert_eq!("side lunge".parse::<ExerciseLabel>(), Ok(ExerciseLabel::SideLunge));
    assert!("jumping jack".parse::<ExerciseLabel>().is_err());
}
