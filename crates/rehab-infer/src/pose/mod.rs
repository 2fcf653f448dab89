mod normalize;
mod types;

pub use normalize::{filter_body_keypoints, normalize, NormalizedFrame, CLASSIFY_SIZE, HISTORY_SIZE};
pub use types::{BodyPart, Keypoint, Person, BODY_PART_COUNT};
