/// When a reveal group animates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTrigger {
    /// On first display.
    Mount,
    /// Whenever the group intersects the viewport.
    InView,
}

/// Timing of a group's children, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Default for Stagger {
    fn default() -> Self {
        Self { delay_children: 0.3, stagger_children: 0.2 }
    }
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * (index as f64)
    }

    pub fn item_style(&self, index: usize, visible: bool) -> String {
        // Hiding is immediate, only the way in is staggered.
        let delay = if visible { self.delay_for(index) } else { 0.0 };
        format!("transition-delay: {:.1}s;", delay)
    }
}

pub fn item_class(visible: bool) -> &'static str {
    if visible {
        "reveal-item opacity-100 translate-y-0"
    } else {
        "reveal-item opacity-0 translate-y-5"
    }
}
