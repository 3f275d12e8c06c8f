use crate::config::DragScrollConfig;
use crate::pointer::PointerSample;

/// Element scrolled by a [`DragScrollController`].
pub trait ScrollTarget {
    /// Current horizontal scroll offset in pixels.
    fn scroll_offset(&self) -> f64;
    fn set_scroll_offset(&mut self, offset: f64);
    /// Left edge of the element's bounding rect, in viewport coordinates.
    fn bounding_left(&self) -> f64;
    /// Toggle the "active" styling shown while a drag session runs.
    fn set_active(&mut self, active: bool);
}

/// Anchors captured on press; lives until release or leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub anchor_pointer_x: f64,
    pub anchor_scroll_offset: f64,
}

/// What a controller callback did with an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    Ignored,
    Started { anchor_x: f64, scroll_offset: f64 },
    /// The caller must suppress the event's default action.
    Scrolled { delta: f64, scroll_offset: f64 },
    Ended,
}

impl DragOutcome {
    pub fn should_prevent_default(&self) -> bool {
        matches!(self, DragOutcome::Scrolled { .. })
    }
}

pub struct DragScrollController<T: ScrollTarget> {
    target: T,
    config: DragScrollConfig,
    session: Option<DragSession>,
}

impl<T: ScrollTarget> DragScrollController<T> {
    pub fn new(target: T, config: DragScrollConfig) -> Self {
        Self {
            target,
            config,
            session: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &DragScrollConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn press_start(&mut self, sample: &PointerSample) -> DragOutcome {
        if !sample.is_primary_press() {
            return DragOutcome::Ignored;
        }

        let anchor_pointer_x = self.element_x(sample);
        let anchor_scroll_offset = self.target.scroll_offset();

        self.target.set_active(true);
        self.session = Some(DragSession {
            anchor_pointer_x,
            anchor_scroll_offset,
        });

        DragOutcome::Started {
            anchor_x: anchor_pointer_x,
            scroll_offset: anchor_scroll_offset,
        }
    }

    pub fn pointer_move(&mut self, sample: &PointerSample) -> DragOutcome {
        let Some(session) = self.session else {
            return DragOutcome::Ignored;
        };

        let delta = self.element_x(sample) - session.anchor_pointer_x;
        let scroll_offset = session.anchor_scroll_offset - delta * self.config.sensitivity;
        self.target.set_scroll_offset(scroll_offset);

        DragOutcome::Scrolled {
            delta,
            scroll_offset,
        }
    }

    pub fn press_end(&mut self) -> DragOutcome {
        if self.session.take().is_none() {
            return DragOutcome::Ignored;
        }
        self.target.set_active(false);
        DragOutcome::Ended
    }

    /// Leaving the element ends the session exactly like a release.
    pub fn pointer_leave(&mut self) -> DragOutcome {
        self.press_end()
    }

    fn element_x(&self, sample: &PointerSample) -> f64 {
        sample.element_x(self.config.coordinate_preference, self.target.bounding_left())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoordinatePreference;
    use crate::pointer::PointerButton;

    #[derive(Debug, Default)]
    struct RecordingTarget {
        scroll_offset: f64,
        left: f64,
        active: bool,
        scroll_writes: Vec<f64>,
        active_toggles: Vec<bool>,
    }

    impl RecordingTarget {
        fn at(scroll_offset: f64, left: f64) -> Self {
            Self {
                scroll_offset,
                left,
                ..Self::default()
            }
        }
    }

    impl ScrollTarget for RecordingTarget {
        fn scroll_offset(&self) -> f64 {
            self.scroll_offset
        }

        fn set_scroll_offset(&mut self, offset: f64) {
            self.scroll_offset = offset;
            self.scroll_writes.push(offset);
        }

        fn bounding_left(&self) -> f64 {
            self.left
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
            self.active_toggles.push(active);
        }
    }

    fn controller(scroll_offset: f64, sensitivity: f64) -> DragScrollController<RecordingTarget> {
        DragScrollController::new(
            RecordingTarget::at(scroll_offset, 0.0),
            DragScrollConfig::default().with_sensitivity(sensitivity),
        )
    }

    #[test]
    fn non_primary_press_never_starts_a_session() {
        for button in [
            PointerButton::Auxiliary,
            PointerButton::Secondary,
            PointerButton::Other(3),
        ] {
            let mut controller = controller(40.0, 1.0);
            let press = PointerSample::from_client_x(100.0).with_button(button);

            assert_eq!(controller.press_start(&press), DragOutcome::Ignored);
            assert!(!controller.is_dragging());

            let outcome = controller.pointer_move(&PointerSample::from_client_x(10.0));
            assert_eq!(outcome, DragOutcome::Ignored);
            assert!(!outcome.should_prevent_default());
            assert_eq!(controller.target().scroll_offset, 40.0);
            assert!(controller.target().scroll_writes.is_empty());
            assert!(controller.target().active_toggles.is_empty());
        }
    }

    #[test]
    fn move_scrolls_opposite_to_pointer_delta() {
        let mut controller = controller(300.0, 1.0);
        controller.press_start(&PointerSample::from_client_x(200.0));

        let outcome = controller.pointer_move(&PointerSample::from_client_x(260.0));
        assert_eq!(
            outcome,
            DragOutcome::Scrolled {
                delta: 60.0,
                scroll_offset: 240.0
            }
        );
        assert!(outcome.should_prevent_default());

        // Offsets are computed from the press anchors, not accumulated.
        controller.pointer_move(&PointerSample::from_client_x(150.0));
        assert_eq!(controller.target().scroll_offset, 350.0);
        assert_eq!(controller.target().scroll_writes, vec![240.0, 350.0]);
    }

    #[test]
    fn sensitivity_scales_the_delta() {
        let mut controller = controller(100.0, 2.0);
        controller.press_start(&PointerSample::from_client_x(50.0));
        controller.pointer_move(&PointerSample::from_client_x(40.0));
        assert_eq!(controller.target().scroll_offset, 120.0);
    }

    #[test]
    fn harness_scenario_with_page_coordinates() {
        for sensitivity in [1.0, 2.0] {
            let mut controller = DragScrollController::new(
                RecordingTarget::at(0.0, 36.0),
                DragScrollConfig::default().with_sensitivity(sensitivity),
            );

            let press = PointerSample::from_page_x(493.0, 0.0)
                .with_button(PointerButton::Primary);
            controller.press_start(&press);
            controller.pointer_move(&PointerSample::from_page_x(271.0, 0.0));
            assert_eq!(controller.target().scroll_offset, 222.0 * sensitivity);

            controller.press_end();
            assert!(!controller.is_dragging());
        }
    }

    #[test]
    fn scrolled_page_uses_one_coordinate_space() {
        let config =
            DragScrollConfig::default().with_coordinate_preference(CoordinatePreference::PageFirst);
        let mut controller = DragScrollController::new(RecordingTarget::at(10.0, 20.0), config);

        controller.press_start(&PointerSample::from_page_x(700.0, 200.0));
        assert_eq!(controller.session().map(|s| s.anchor_pointer_x), Some(480.0));

        controller.pointer_move(&PointerSample::from_page_x(650.0, 200.0));
        assert_eq!(controller.target().scroll_offset, 60.0);
    }

    #[test]
    fn release_and_leave_stop_scrolling() {
        let mut controller = controller(0.0, 1.0);
        controller.press_start(&PointerSample::from_client_x(100.0));
        assert!(controller.target().active);
        assert_eq!(controller.press_end(), DragOutcome::Ended);
        assert!(!controller.target().active);

        assert_eq!(
            controller.pointer_move(&PointerSample::from_client_x(0.0)),
            DragOutcome::Ignored
        );
        assert_eq!(controller.target().scroll_offset, 0.0);

        controller.press_start(&PointerSample::from_client_x(100.0));
        assert_eq!(controller.pointer_leave(), DragOutcome::Ended);
        controller.pointer_move(&PointerSample::from_client_x(0.0));
        assert!(controller.target().scroll_writes.is_empty());
    }

    #[test]
    fn double_release_is_a_no_op() {
        let mut controller = controller(0.0, 1.0);
        controller.press_start(&PointerSample::from_client_x(100.0));

        assert_eq!(controller.press_end(), DragOutcome::Ended);
        assert_eq!(controller.pointer_leave(), DragOutcome::Ignored);
        assert_eq!(controller.press_end(), DragOutcome::Ignored);

        assert!(!controller.is_dragging());
        assert_eq!(controller.target().active_toggles, vec![true, false]);
    }

    #[test]
    fn repeated_press_re_anchors() {
        let mut controller = controller(0.0, 1.0);
        controller.press_start(&PointerSample::from_client_x(100.0));
        controller.pointer_move(&PointerSample::from_client_x(80.0));
        assert_eq!(controller.target().scroll_offset, 20.0);

        controller.press_start(&PointerSample::from_client_x(80.0));
        assert_eq!(
            controller.session(),
            Some(&DragSession {
                anchor_pointer_x: 80.0,
                anchor_scroll_offset: 20.0
            })
        );
        controller.pointer_move(&PointerSample::from_client_x(80.0));
        assert_eq!(controller.target().scroll_offset, 20.0);
    }

    #[test]
    fn malformed_move_uses_zero_coordinate() {
        let mut controller = controller(50.0, 1.0);
        controller.press_start(&PointerSample::from_client_x(10.0));
        controller.pointer_move(&PointerSample::default());
        assert_eq!(controller.target().scroll_offset, 60.0);
    }
}
