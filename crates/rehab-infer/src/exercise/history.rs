use crate::pose::{normalize, NormalizedFrame, Person, HISTORY_SIZE};
use crate::InferError;
use std::collections::VecDeque;

/// Normalized frames recorded during one exercise session
///
/// Growth is an explicit policy: [`FrameHistory::unbounded`] keeps every frame,
/// [`FrameHistory::bounded`] evicts the oldest frame once full.
#[derive(Debug, Clone)]
pub struct FrameHistory {
    frames: VecDeque<NormalizedFrame>,
    capacity: Option<usize>,
    size: f32,
    evicted: usize,
}

impl FrameHistory {
    pub fn unbounded() -> Self {
        Self {
            frames: VecDeque::new(),
            capacity: None,
            size: HISTORY_SIZE,
            evicted: 0,
        }
    }

    /// History that keeps at most `capacity` frames (at least one)
    pub fn bounded(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
            ..Self::unbounded()
        }
    }

    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        match capacity {
            Some(capacity) => Self::bounded(capacity),
            None => Self::unbounded(),
        }
    }

    /// Set the normalization box size for recorded frames (builder pattern)
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames dropped by the capacity limit since the last clear
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    pub fn get(&self, index: usize) -> Option<&NormalizedFrame> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedFrame> {
        self.frames.iter()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.evicted = 0;
    }

    /// Append a frame, returning the frame evicted to make room, if any
    pub fn push(&mut self, frame: NormalizedFrame) -> Option<NormalizedFrame> {
        let evicted = match self.capacity {
            Some(capacity) if self.frames.len() >= capacity => {
                self.evicted += 1;
                self.frames.pop_front()
            }
            _ => None,
        };
        if evicted.is_some() {
            log::debug!(
                "frame history full ({} frames), dropped oldest frame",
                self.frames.len() + 1
            );
        }
        self.frames.push_back(frame);
        evicted
    }

    /// Normalize the body keypoints of a person and append them
    pub fn record(&mut self, person: &Person) -> Result<(), InferError> {
        let frame = normalize(person, self.size)?;
        self.push(frame);
        Ok(())
    }

    /// Render the recorded frames as text, three lines per frame
    ///
    /// Frames are numbered from the start of the session, so numbering
    /// continues past evicted frames.
    pub fn describe(&self) -> Vec<String> {
        self.frames
            .iter()
            .enumerate()
            .flat_map(|(i, frame)| {
                [
                    format!("Frame {}", self.evicted + i),
                    format!("X: {:?}", frame.xs()),
                    format!("Y: {:?}", frame.ys()),
                ]
            })
            .collect()
    }

    /// Dump the recorded frames to the log
    ///
    /// Placeholder: this performs no analysis over the sequence yet, it only
    /// logs every frame at info level.
    pub fn estimate_exercise(&self) {
        log::info!("frame history: {} frames", self.frames.len());
        for line in self.describe() {
            log::info!("{}", line);
        }
    }
}

impl Default for FrameHistory {
    fn default() -> Self {
        Self::unbounded()
    }
}
