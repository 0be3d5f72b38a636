pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// The three logical navigation gestures, whatever input produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIntent {
    Forward,
    Backward,
    FlipSheet(usize),
}

/// Horizontal swipe recognizer shared by touch and mouse input.
///
/// Leftward travel reads as "forward" (the page is pulled towards the spine),
/// rightward travel as "backward". Travel must strictly exceed the threshold.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            start_x: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn moved_past(&self, x: f32) -> bool {
        self.start_x
            .map(|start| (x - start).abs() > self.threshold)
            .unwrap_or(false)
    }

    pub fn finish(&mut self, x: f32) -> Option<NavIntent> {
        let start = self.start_x.take()?;
        if start - x > self.threshold {
            Some(NavIntent::Forward)
        } else if x - start > self.threshold {
            Some(NavIntent::Backward)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

pub fn key_intent(key: &str) -> Option<NavIntent> {
    match key {
        "ArrowRight" | "PageDown" | " " => Some(NavIntent::Forward),
        "ArrowLeft" | "PageUp" => Some(NavIntent::Backward),
        _ => None,
    }
}
