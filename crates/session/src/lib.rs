//! The inspection state machine.
//!
//! One [`InspectionSession`] lives per toggle-on/toggle-off cycle of the
//! inspector. It tracks the hover overlay, the two-click measurement
//! sub-state, and the deadlines that dismiss the hint banner and reset a
//! shown measurement.
//! Timers are modelled as deadlines checked by [`InspectionSession::poll`],
//! so teardown can invalidate them synchronously.

#![forbid(unsafe_code)]

use std::time::{Duration, Instant};

use inspect_dom::{Document, NodeId};
use inspect_geometry::{MeasurementResult, measure};
use inspect_overlay::{MeasurementVisuals, OverlayRenderer, OverlayStyle};

/// How long a finished measurement stays on screen before the session
/// returns to plain hovering.
pub const MEASUREMENT_RESET_DELAY: Duration = Duration::from_secs(3);

/// How long the second-click hint banner stays up before dismissing itself.
pub const HINT_DISMISS_DELAY: Duration = Duration::from_secs(3);

const SECOND_CLICK_HINT: &str = "Click a second element to measure";

/// Listener attachment boundary. The host wires real pointer listeners
/// here; attachment can fail on pages that refuse injection.
pub trait EventHooks {
    fn attach(&mut self) -> anyhow::Result<()>;
    fn detach(&mut self);
}

/// Hooks for hosts that deliver events by calling the session directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl EventHooks for NoopHooks {
    fn attach(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn detach(&mut self) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Hovering,
    AwaitingSecondElement,
}

/// What a click did, reported to the caller for logging and capture flow.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Overlay self-hit, unknown element, or inspection off.
    Ignored,
    FirstSelected,
    MeasurementShown(MeasurementResult),
    /// Same element clicked twice, selection dropped.
    Deselected,
}

pub struct InspectionSession<Hooks: EventHooks> {
    mode: Mode,
    hooks: Hooks,
    style: OverlayStyle,
    renderer: Option<OverlayRenderer>,
    visuals: MeasurementVisuals,
    hovered: Option<NodeId>,
    first_element: Option<NodeId>,
    pending_reset: Option<Instant>,
    hint_dismiss: Option<Instant>,
}

impl<Hooks: EventHooks> InspectionSession<Hooks> {
    pub fn new(hooks: Hooks) -> Self {
        Self {
            mode: Mode::Idle,
            hooks,
            style: OverlayStyle::default(),
            renderer: None,
            visuals: MeasurementVisuals::new(),
            hovered: None,
            first_element: None,
            pending_reset: None,
            hint_dismiss: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_enabled(&self) -> bool {
        self.mode != Mode::Idle
    }

    /// The element the pointer is currently over, when inspecting.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Enable or disable inspection. Disabling from any state synchronously
    /// removes every injected node and invalidates the pending auto-reset.
    pub fn toggle(&mut self, doc: &mut Document, enable: bool) {
        if enable == self.is_enabled() {
            return;
        }
        if enable {
            if let Err(error) = self.hooks.attach() {
                log::warn!("could not attach inspection listeners: {error:#}");
                return;
            }
            let mut renderer = OverlayRenderer::new(doc);
            renderer.set_style(doc, self.style.clone());
            self.renderer = Some(renderer);
            self.visuals
                .show_badge(doc, &self.style.primary, &self.style.contrast);
            doc.set_cursor(Some("crosshair"));
            self.mode = Mode::Hovering;
            log::debug!("inspection enabled");
        } else {
            self.teardown(doc);
            log::debug!("inspection disabled");
        }
    }

    fn teardown(&mut self, doc: &mut Document) {
        if let Some(renderer) = self.renderer.take() {
            renderer.destroy(doc);
        }
        self.visuals.clear_all(doc);
        doc.set_cursor(None);
        self.hovered = None;
        self.first_element = None;
        self.pending_reset = None;
        self.hint_dismiss = None;
        self.mode = Mode::Idle;
        self.hooks.detach();
    }

    /// Track the pointer. `target` is the topmost element under the cursor,
    /// or `None` when the pointer left the page.
    pub fn pointer_move(&mut self, doc: &mut Document, target: Option<NodeId>) {
        if self.mode == Mode::Idle {
            return;
        }
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        match target {
            Some(node) if doc.contains(node) && !doc.is_inspector_node(node) => {
                self.hovered = Some(node);
                renderer.show_on_element(doc, node);
            }
            Some(_) => {}
            None => {
                self.hovered = None;
                renderer.hide(doc);
            }
        }
    }

    /// Feed a click into the measurement sub-state.
    pub fn click(&mut self, doc: &mut Document, target: NodeId, now: Instant) -> ClickOutcome {
        if self.mode == Mode::Idle || !doc.contains(target) || doc.is_inspector_node(target) {
            return ClickOutcome::Ignored;
        }

        // A click while a result is still displayed dismisses it first and
        // counts as a fresh first selection.
        if self.mode == Mode::AwaitingSecondElement && self.first_element.is_none() {
            self.reset_measurement(doc);
            self.mode = Mode::Hovering;
        }

        match self.mode {
            Mode::Idle => ClickOutcome::Ignored,
            Mode::Hovering => self.select_first(doc, target, now),
            Mode::AwaitingSecondElement => self.select_second(doc, target, now),
        }
    }

    fn select_first(&mut self, doc: &mut Document, target: NodeId, now: Instant) -> ClickOutcome {
        let Some(rect) = doc.layout_rect(target) else {
            return ClickOutcome::Ignored;
        };
        self.first_element = Some(target);
        self.visuals.show_highlight(doc, &rect, &self.style.secondary);
        self.visuals.show_hint(doc, SECOND_CLICK_HINT);
        self.hint_dismiss = Some(now + HINT_DISMISS_DELAY);
        self.mode = Mode::AwaitingSecondElement;
        ClickOutcome::FirstSelected
    }

    fn select_second(&mut self, doc: &mut Document, target: NodeId, now: Instant) -> ClickOutcome {
        let Some(first) = self.first_element else {
            return ClickOutcome::Ignored;
        };
        if first == target {
            self.reset_measurement(doc);
            self.mode = Mode::Hovering;
            return ClickOutcome::Deselected;
        }
        let (Some(first_rect), Some(second_rect)) =
            (doc.layout_rect(first), doc.layout_rect(target))
        else {
            return ClickOutcome::Ignored;
        };

        let result = measure(&first_rect, &second_rect);
        self.visuals
            .show_highlight(doc, &second_rect, &self.style.secondary);
        self.visuals.hide_hint(doc);
        self.hint_dismiss = None;
        self.visuals.show_result(doc, &result);
        self.first_element = None;
        self.pending_reset = Some(now + MEASUREMENT_RESET_DELAY);
        log::debug!(
            "measured h={} v={} d={}",
            result.horizontal_gap,
            result.vertical_gap,
            result.edge_distance
        );
        ClickOutcome::MeasurementShown(result)
    }

    fn reset_measurement(&mut self, doc: &mut Document) {
        self.visuals.clear_measurement(doc);
        self.visuals.hide_hint(doc);
        self.first_element = None;
        self.pending_reset = None;
        self.hint_dismiss = None;
    }

    /// Fire any expired deadline: the hint banner dismisses itself without
    /// touching the selection, and the auto-reset clears the displayed
    /// measurement. Returns whether the measurement was cleared.
    pub fn poll(&mut self, doc: &mut Document, now: Instant) -> bool {
        if let Some(dismiss) = self.hint_dismiss
            && now >= dismiss
        {
            self.visuals.hide_hint(doc);
            self.hint_dismiss = None;
        }
        let Some(deadline) = self.pending_reset else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.reset_measurement(doc);
        if self.mode == Mode::AwaitingSecondElement {
            self.mode = Mode::Hovering;
        }
        true
    }

    /// The cancel key: equivalent to toggling off.
    pub fn cancel(&mut self, doc: &mut Document) {
        if self.is_enabled() {
            self.teardown(doc);
        }
    }

    /// Re-theme the live overlay, or just remember the style for the next
    /// toggle-on when idle.
    pub fn apply_style(&mut self, doc: &mut Document, style: OverlayStyle) {
        self.style = style;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.set_style(doc, self.style.clone());
            self.visuals
                .show_badge(doc, &self.style.primary, &self.style.contrast);
            if let Some(node) = self.hovered {
                renderer.show_on_element(doc, node);
            }
        }
    }
}
