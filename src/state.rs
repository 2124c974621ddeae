#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintPhase {
    Idle,
    Drawing,
    AwaitingTextInput,
}

impl PaintPhase {
    /// While a text prompt is pending, drawing input is suspended; tool and
    /// color selection stay live.
    pub fn accepts_drawing_input(self) -> bool {
        !matches!(self, Self::AwaitingTextInput)
    }
}

pub fn can_transition(from: PaintPhase, to: PaintPhase) -> bool {
    matches!(
        (from, to),
        (PaintPhase::Idle, PaintPhase::Drawing)
            | (PaintPhase::Drawing, PaintPhase::Idle)
            | (PaintPhase::Idle, PaintPhase::AwaitingTextInput)
            | (PaintPhase::AwaitingTextInput, PaintPhase::Idle)
    ) || from == to
}
