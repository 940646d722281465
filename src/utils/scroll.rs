/// Eased scroll from one vertical offset to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self { from, to, duration_ms: duration_ms.max(0.0) }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out_quad(progress)
    }
}

pub fn ease_in_out_quad(x: f64) -> f64 {
    if x < 0.5 {
        (x * 2.0).powi(2) / 2.0
    } else {
        1.0 - ((1.0 - x) * 2.0).powi(2) / 2.0
    }
}
