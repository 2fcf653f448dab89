use crate::InferError;

use super::types::Person;

/// Coordinate box size for classifier input
pub const CLASSIFY_SIZE: f32 = 28.0;

/// Coordinate box size for recorded history frames
pub const HISTORY_SIZE: f32 = 255.0;

/// Keypoints of one frame after filtering and rescaling
///
/// `xs` and `ys` always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFrame {
    xs: Vec<f32>,
    ys: Vec<f32>,
    size: f32,
}

impl NormalizedFrame {
    pub fn xs(&self) -> &[f32] {
        &self.xs
    }

    pub fn ys(&self) -> &[f32] {
        &self.ys
    }

    /// Size `S` of the `[0, S]` box the frame was normalized into
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Number of keypoints in the frame
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Flatten as all x coordinates followed by all y coordinates
    pub fn input_vector(&self) -> Vec<f32> {
        let mut input = Vec::with_capacity(self.xs.len() * 2);
        input.extend_from_slice(&self.xs);
        input.extend_from_slice(&self.ys);
        input
    }
}

/// Split the non-facial keypoints of a person into x and y sequences, in input order
pub fn filter_body_keypoints(person: &Person) -> (Vec<f32>, Vec<f32>) {
    person
        .keypoints
        .iter()
        .filter(|k| !k.body_part.is_facial())
        .map(|k| (k.position.x, k.position.y))
        .unzip()
}

#[derive(Debug, Clone, Copy)]
struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    fn of(values: &[f32]) -> Self {
        values.iter().fold(
            Extent {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |e, &v| Extent {
                min: e.min.min(v as f64),
                max: e.max.max(v as f64),
            },
        )
    }

    fn span(self) -> f64 {
        self.max - self.min
    }

    fn center(self) -> f64 {
        (self.max + self.min) / 2.0
    }
}

/// Center the body keypoints of a person and scale them isotropically into `[0, size]`
///
/// ```text
/// scale = max(xMax - xMin, yMax - yMin)
/// x'    = ((x - (xMax + xMin) / 2) / scale + 0.5) * size
/// ```
///
/// The aspect ratio is preserved: the larger extent spans the full box, the
/// smaller one is centered inside it.
///
/// # Errors
/// `InferError::InvalidInput` when no body keypoints remain after filtering,
/// when a coordinate is not finite, or when all keypoints coincide (zero extent).
pub fn normalize(person: &Person, size: f32) -> Result<NormalizedFrame, InferError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(InferError::InvalidInput(format!(
            "normalization size must be positive, got {size}"
        )));
    }

    if person
        .keypoints
        .iter()
        .any(|k| !k.body_part.is_facial() && !k.position.is_finite())
    {
        return Err(InferError::InvalidInput(
            "keypoint coordinates must be finite".to_string(),
        ));
    }
    let (xs, ys) = filter_body_keypoints(person);
    if xs.is_empty() {
        return Err(InferError::InvalidInput(
            "person has no body keypoints".to_string(),
        ));
    }

    let x_extent = Extent::of(&xs);
    let y_extent = Extent::of(&ys);
    let scale = x_extent.span().max(y_extent.span());
    if scale <= 0.0 {
        return Err(InferError::InvalidInput(format!(
            "all {} body keypoints coincide, cannot normalize a zero extent",
            xs.len()
        )));
    }

    let size = size as f64;
    let rescale = |v: f32, center: f64| (((v as f64 - center) / scale + 0.5) * size) as f32;

    let x_center = x_extent.center();
    let y_center = y_extent.center();
    Ok(NormalizedFrame {
        xs: xs.iter().map(|&x| rescale(x, x_center)).collect(),
        ys: ys.iter().map(|&y| rescale(y, y_center)).collect(),
        size: size as f32,
    })
}
