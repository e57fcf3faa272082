//! Carousel selection over the four faces and the geometry of the drawn ring.

use shared::domain::Face;

pub const FACE_COUNT: usize = Face::ALL.len();

/// Which face is currently at the front of the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselController {
    index: usize,
}

impl CarouselController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the selection by `direction` faces, wrapping in both directions.
    pub fn rotate(&mut self, direction: i64) {
        let n = FACE_COUNT as i64;
        // Reduce first so extreme directions cannot overflow.
        let step = direction.rem_euclid(n);
        self.index = ((self.index as i64 + step) % n) as usize;
    }

    pub fn next(&mut self) {
        self.rotate(1);
    }

    pub fn previous(&mut self) {
        self.rotate(-1);
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_face(&self) -> Face {
        Face::ALL[self.index]
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.index as f32 * (360.0 / FACE_COUNT as f32)
    }
}

/// A ring of thin segments, four of which carry the content faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub segments: usize,
    pub radius: f32,
    pub height: f32,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            segments: 28,
            radius: 420.0,
            height: 520.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentView {
    pub index: usize,
    pub face: Option<Face>,
    pub offset_x: f32,
    pub facing: f32,
    pub brightness: f32,
}

impl RingLayout {
    pub fn step_degrees(&self) -> f32 {
        360.0 / self.segments as f32
    }

    pub fn segment_angle(&self, segment: usize) -> f32 {
        segment as f32 * self.step_degrees()
    }

    pub fn content_segments(&self) -> [usize; FACE_COUNT] {
        let quarter = self.segments as f32 / FACE_COUNT as f32;
        std::array::from_fn(|k| (quarter * k as f32).round() as usize % self.segments)
    }

    pub fn face_at_segment(&self, segment: usize) -> Option<Face> {
        self.content_segments()
            .iter()
            .position(|&s| s == segment)
            .and_then(Face::from_index)
    }

    /// Cosine of the segment's angle away from the viewer; 1.0 is head-on.
    pub fn facing(&self, segment: usize, rotation_deg: f32) -> f32 {
        (self.segment_angle(segment) - rotation_deg).to_radians().cos()
    }

    pub fn brightness(&self, segment: usize, rotation_deg: f32) -> f32 {
        0.35 + 0.45 * self.facing(segment, rotation_deg).max(0.0)
    }

    pub fn horizontal_offset(&self, segment: usize, rotation_deg: f32) -> f32 {
        self.radius * (self.segment_angle(segment) - rotation_deg).to_radians().sin()
    }

    /// Front-facing segments ordered back to front, ready for painting.
    pub fn visible_segments(&self, rotation_deg: f32) -> Vec<SegmentView> {
        let mut visible: Vec<SegmentView> = (0..self.segments)
            .map(|index| SegmentView {
                index,
                face: self.face_at_segment(index),
                offset_x: self.horizontal_offset(index, rotation_deg),
                facing: self.facing(index, rotation_deg),
                brightness: self.brightness(index, rotation_deg),
            })
            .filter(|segment| segment.facing > 0.0)
            .collect();
        visible.sort_by(|a, b| a.facing.total_cmp(&b.facing));
        visible
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
