use rehab_base::Vec2;
use serde::{Deserialize, Serialize};

/// Number of body parts reported per person by the pose estimator
pub const BODY_PART_COUNT: usize = 17;

/// Body parts in PoseNet/COCO order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyPart {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl BodyPart {
    pub const ALL: [BodyPart; BODY_PART_COUNT] = [
        BodyPart::Nose,
        BodyPart::LeftEye,
        BodyPart::RightEye,
        BodyPart::LeftEar,
        BodyPart::RightEar,
        BodyPart::LeftShoulder,
        BodyPart::RightShoulder,
        BodyPart::LeftElbow,
        BodyPart::RightElbow,
        BodyPart::LeftWrist,
        BodyPart::RightWrist,
        BodyPart::LeftHip,
        BodyPart::RightHip,
        BodyPart::LeftKnee,
        BodyPart::RightKnee,
        BodyPart::LeftAnkle,
        BodyPart::RightAnkle,
    ];

    /// Nose, eyes and ears carry no information about limb movement
    pub fn is_facial(self) -> bool {
        matches!(
            self,
            BodyPart::Nose
                | BodyPart::LeftEye
                | BodyPart::RightEye
                | BodyPart::LeftEar
                | BodyPart::RightEar
        )
    }
}

impl From<BodyPart> for usize {
    fn from(part: BodyPart) -> usize {
        part as usize
    }
}

impl TryFrom<usize> for BodyPart {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        BodyPart::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid body part index: {}. Must be in range 0-{}.",
                value,
                BODY_PART_COUNT - 1
            )
        })
    }
}

/// A single detected landmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub body_part: BodyPart,
    pub position: Vec2<f32>,
    #[serde(default)]
    pub score: f32,
}

/// All keypoints detected for one body in one frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Person {
    pub keypoints: Vec<Keypoint>,
    #[serde(default)]
    pub score: f32,
}

impl Person {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self {
            keypoints,
            score: 1.0,
        }
    }

    /// Build a person from positions given in [`BodyPart::ALL`] order
    pub fn from_positions(positions: [Vec2<f32>; BODY_PART_COUNT]) -> Self {
        let keypoints = BodyPart::ALL
            .iter()
            .zip(positions)
            .map(|(&body_part, position)| Keypoint {
                body_part,
                position,
                score: 1.0,
            })
            .collect();
        Self::new(keypoints)
    }

    pub fn keypoint(&self, part: BodyPart) -> Option<&Keypoint> {
        self.keypoints.iter().find(|k| k.body_part == part)
    }
}
