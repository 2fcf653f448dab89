use crate::InferError;
use num_traits::Float;

/// Convert raw class scores into a probability distribution
///
/// The largest score is subtracted before exponentiation, so finite inputs
/// never overflow. NaN or infinite inputs yield NaN probabilities.
pub fn softmax<T: Float>(logits: &[T]) -> Vec<T> {
    let max = logits.iter().copied().fold(T::neg_infinity(), T::max);
    let shift = if max.is_finite() { max } else { T::zero() };

    let exps: Vec<T> = logits.iter().map(|&v| (v - shift).exp()).collect();
    let sum = exps.iter().fold(T::zero(), |acc, &e| acc + e);
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the largest raw score
///
/// Ties resolve to the first occurrence. NaN entries never win; if every entry
/// is NaN the first index is returned. `None` only for an empty slice.
pub fn argmax<T: Float>(values: &[T]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let mut best: Option<(usize, T)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    Some(best.map_or(0, |(i, _)| i))
}

/// Pick the winning class and its probability in percent
///
/// Returns `(class_index, probability)`. The probability is
/// `softmax(scores)[class_index] * 100`, or `-1.0` when that value is not finite.
pub fn score(scores: &[f32]) -> Result<(usize, f32), InferError> {
    let class_index = argmax(scores).ok_or_else(|| InferError::ShapeMismatch {
        expected: "at least one class score".to_string(),
        got: "0 scores".to_string(),
    })?;

    let probability = softmax(scores)[class_index] * 100.0;
    let probability = if probability.is_finite() {
        probability
    } else {
        super::UNDEFINED_PROBABILITY
    };

    Ok((class_index, probability))
}
