//! Geometry of the editor/output split.
//!
//! A small state machine: normal, or mid-drag on the divider, with an
//! orthogonal fullscreen state and a derived compact-width flag. All units
//! are terminal cells. The one hard invariant is the clamp: the output
//! panel height stays within `[MIN_OUTPUT_HEIGHT, 0.9 × container height]`
//! at every intermediate step of a drag, not just at rest.

use anyhow::Result;

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;

pub const MIN_OUTPUT_HEIGHT: u16 = 3;
pub const MAX_OUTPUT_FRACTION: f32 = 0.9;
pub const COLLAPSED_PRESET: u16 = 3;
pub const DEFAULT_EXPANDED_PRESET: u16 = 15;

/// Below this container width the sandbox switches to its compact
/// presentation (no tab bar chrome, shorter status line).
pub const COMPACT_WIDTH_BREAKPOINT: u16 = 80;

/// Host-environment fullscreen, consumed best-effort. An implementation
/// that cannot comply returns an error and the controller falls back to a
/// chrome-hiding presentation instead of failing the toggle.
pub trait FullscreenHost {
    fn request_fullscreen(&mut self) -> Result<()>;
    fn exit_fullscreen(&mut self) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FullscreenState {
    #[default]
    Off,
    /// The host honoured the request.
    Host,
    /// The host refused; the sandbox hides its own chrome instead.
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragState {
    Idle,
    Active { grab_row: u16, start_height: u16 },
}

pub struct LayoutController {
    container_width: u16,
    container_height: u16,
    output_height: u16,
    expanded_preset: u16,
    drag: DragState,
    fullscreen: FullscreenState,
}

impl LayoutController {
    pub fn new(width: u16, height: u16, expanded_preset: u16) -> LayoutController {
        let mut controller = LayoutController {
            container_width: width,
            container_height: height,
            output_height: expanded_preset,
            expanded_preset,
            drag: DragState::Idle,
            fullscreen: FullscreenState::Off,
        };
        controller.output_height = controller.clamped(expanded_preset);
        controller
    }

    pub fn output_height(&self) -> u16 {
        self.output_height
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.drag, DragState::Active { .. })
    }

    pub fn fullscreen(&self) -> FullscreenState {
        self.fullscreen
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen != FullscreenState::Off
    }

    pub fn is_compact(&self) -> bool {
        self.container_width < COMPACT_WIDTH_BREAKPOINT
    }

    pub fn drag_start(&mut self, row: u16) {
        self.drag = DragState::Active {
            grab_row: row,
            start_height: self.output_height,
        };
    }

    /// Recomputes the panel height from the pointer delta. Dragging the
    /// divider up grows the output panel.
    pub fn drag_to(&mut self, row: u16) {
        if let DragState::Active {
            grab_row,
            start_height,
        } = self.drag
        {
            let delta = i32::from(grab_row) - i32::from(row);
            let target = (i32::from(start_height) + delta).clamp(0, i32::from(u16::MAX));
            self.output_height = self.clamped(target as u16);
        }
    }

    pub fn drag_end(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Keyboard toggle between the collapsed and expanded presets,
    /// independent of any drag in progress.
    pub fn toggle_preset(&mut self) {
        self.output_height = if self.output_height > COLLAPSED_PRESET {
            self.clamped(COLLAPSED_PRESET)
        } else {
            self.clamped(self.expanded_preset)
        };
    }

    /// New container geometry. Returns true when the embedded editor widget
    /// should be asked to re-run its own layout, which is every time — the
    /// widget owns an internal canvas this controller knows nothing about.
    pub fn container_resized(&mut self, width: u16, height: u16) -> bool {
        self.container_width = width;
        self.container_height = height;
        self.output_height = self.clamped(self.output_height);
        true
    }

    pub fn toggle_fullscreen(&mut self, host: &mut dyn FullscreenHost) -> FullscreenState {
        self.fullscreen = match self.fullscreen {
            FullscreenState::Off => match host.request_fullscreen() {
                Ok(()) => FullscreenState::Host,
                Err(err) => {
                    tracing::debug!(%err, "host fullscreen unavailable, using fallback");
                    FullscreenState::Fallback
                }
            },
            FullscreenState::Host | FullscreenState::Fallback => {
                if let Err(err) = host.exit_fullscreen() {
                    tracing::debug!(%err, "host fullscreen exit failed");
                }
                FullscreenState::Off
            }
        };
        self.fullscreen
    }

    /// Mirrors fullscreen changes the host performed on its own.
    pub fn host_fullscreen_changed(&mut self, active: bool) {
        if !active && self.fullscreen == FullscreenState::Host {
            self.fullscreen = FullscreenState::Off;
        }
    }

    fn max_output_height(&self) -> u16 {
        let max = (f32::from(self.container_height) * MAX_OUTPUT_FRACTION) as u16;
        max.max(MIN_OUTPUT_HEIGHT)
    }

    fn clamped(&self, height: u16) -> u16 {
        height.clamp(MIN_OUTPUT_HEIGHT, self.max_output_height())
    }
}
