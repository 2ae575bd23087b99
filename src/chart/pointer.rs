/// Raw pointer input over the chart's interaction surface, already
/// translated into chart-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Enter,
    Move { x: f32 },
    Leave,
}

/// What changed after feeding an event to the [`PointerTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerChange {
    pub moved: bool,
    pub hover_changed: bool,
}

/// Last known horizontal pointer position and hover state.
///
/// The x coordinate starts at `0.0` and is kept after the pointer leaves,
/// so the chart keeps tracing the last hovered sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    x: f32,
    hovering: bool,
}

impl PointerTracker {
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn handle(&mut self, event: PointerEvent) -> PointerChange {
        let mut change = PointerChange::default();
        match event {
            PointerEvent::Enter => {
                change.hover_changed = !self.hovering;
                self.hovering = true;
            }
            PointerEvent::Leave => {
                change.hover_changed = self.hovering;
                self.hovering = false;
            }
            PointerEvent::Move { x } => {
                if x.is_finite() && x != self.x {
                    self.x = x;
                    change.moved = true;
                }
            }
        }
        change
    }
}
