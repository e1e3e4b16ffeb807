//! View state controller: selection plus narrow/wide layout.

use crate::message::MessageId;

/// Widest viewport (logical pixels) still rendered as a single pane.
pub const NARROW_MAX_WIDTH: f32 = 768.0;

/// Presentation mode chosen by viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Two panes side by side.
    #[default]
    Wide,
    /// Exactly one pane at a time.
    Narrow,
}

impl LayoutMode {
    /// Pure function of the current viewport width; recomputed on every
    /// resize, no hysteresis.
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width <= NARROW_MAX_WIDTH {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Which panes are visible right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneSet {
    /// Message list pane.
    pub list: bool,
    /// Message detail pane.
    pub detail: bool,
}

/// Holds the selected message and the layout mode, and derives what to
/// render.
#[derive(Debug, Default)]
pub struct ViewState {
    selected: Option<MessageId>,
    mode: LayoutMode,
}

impl ViewState {
    /// Creates a view state for the given initial width.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            selected: None,
            mode: LayoutMode::from_width(width),
        }
    }

    /// Selects a message. Valid even for ids not present in the current
    /// snapshot; the detail pane degrades to its placeholder then.
    pub fn select(&mut self, id: MessageId) {
        self.selected = Some(id);
    }

    /// Returns to the list. Only meaningful in narrow mode; in wide
    /// mode both panes are already visible, so this is a no-op rather
    /// than an error.
    pub fn back(&mut self) {
        if self.mode == LayoutMode::Narrow {
            self.selected = None;
        }
    }

    /// Clears the selection unconditionally, as on logout.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Recomputes the layout mode after a viewport resize.
    pub fn resize(&mut self, width: f32) {
        self.mode = LayoutMode::from_width(width);
    }

    /// Currently selected message id, possibly dangling.
    #[must_use]
    pub fn selected(&self) -> Option<&MessageId> {
        self.selected.as_ref()
    }

    /// Current layout mode.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Which panes to render: wide always shows both; narrow shows the
    /// detail pane only while a message is selected.
    #[must_use]
    pub fn visible_panes(&self) -> PaneSet {
        match self.mode {
            LayoutMode::Wide => PaneSet {
                list: true,
                detail: true,
            },
            LayoutMode::Narrow => {
                let detail = self.selected.is_some();
                PaneSet {
                    list: !detail,
                    detail,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_threshold_selects_mode() {
        assert_eq!(LayoutMode::from_width(1024.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(768.0), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_width(500.0), LayoutMode::Narrow);
    }

    #[test]
    fn wide_mode_always_shows_both_panes() {
        let mut view = ViewState::new(1024.0);
        assert_eq!(
            view.visible_panes(),
            PaneSet {
                list: true,
                detail: true
            }
        );

        view.select("x".into());
        assert_eq!(
            view.visible_panes(),
            PaneSet {
                list: true,
                detail: true
            }
        );
    }

    #[test]
    fn back_is_a_noop_in_wide_mode() {
        let mut view = ViewState::new(1024.0);
        view.select("x".into());
        view.back();
        assert_eq!(view.selected(), Some(&"x".into()));
    }

    #[test]
    fn narrow_mode_shows_one_pane_at_a_time() {
        let mut view = ViewState::new(500.0);
        assert_eq!(
            view.visible_panes(),
            PaneSet {
                list: true,
                detail: false
            }
        );

        view.select("x".into());
        assert_eq!(
            view.visible_panes(),
            PaneSet {
                list: false,
                detail: true
            }
        );

        view.back();
        assert_eq!(
            view.visible_panes(),
            PaneSet {
                list: true,
                detail: false
            }
        );
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn resize_recomputes_mode_and_keeps_selection() {
        let mut view = ViewState::new(1024.0);
        view.select("x".into());

        view.resize(500.0);
        assert_eq!(view.mode(), LayoutMode::Narrow);
        assert_eq!(view.selected(), Some(&"x".into()));

        view.resize(1400.0);
        assert_eq!(view.mode(), LayoutMode::Wide);
    }
}
