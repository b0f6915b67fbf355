use crate::model::{BodyID, Orrery};

/// What a click asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Follow this planet with the camera.
    Focus(BodyID),
    /// The star was clicked. It sits at the system origin, so rather than
    /// chasing it the camera flies to a fixed framing around it.
    FlyToStar(BodyID),
    /// Clicked empty space.
    Cleared,
}

/// Hover and selection state. `focused` is the body the camera follows;
/// `selected` is the body whose details are on screen. They differ only for
/// the star, which can be selected but is never followed.
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    hovered: Option<BodyID>,
    focused: Option<BodyID>,
    selected: Option<BodyID>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<BodyID> {
        self.hovered
    }

    pub fn focused(&self) -> Option<BodyID> {
        self.focused
    }

    pub fn selected(&self) -> Option<BodyID> {
        self.selected
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    /// Records the result of the latest pick. Returns true if it changed.
    pub fn hover(&mut self, hit: Option<BodyID>) -> bool {
        let changed = self.hovered != hit;
        self.hovered = hit;
        changed
    }

    pub fn click(&mut self, orrery: &Orrery) -> ClickOutcome {
        match self.hovered {
            Some(id) if orrery.get_body(id).is_star() => {
                self.focused = None;
                self.selected = Some(id);
                ClickOutcome::FlyToStar(id)
            }
            Some(id) => {
                self.focused = Some(id);
                self.selected = Some(id);
                ClickOutcome::Focus(id)
            }
            None => {
                self.clear();
                ClickOutcome::Cleared
            }
        }
    }

    /// Closing the detail panel also lets go of the camera.
    pub fn close_panel(&mut self) {
        self.clear();
    }

    pub fn clear(&mut self) {
        self.focused = None;
        self.selected = None;
    }
}
