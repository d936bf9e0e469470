use anyhow::bail;

use super::*;

struct AgreeableHost;

impl FullscreenHost for AgreeableHost {
    fn request_fullscreen(&mut self) -> Result<()> {
        Ok(())
    }
    fn exit_fullscreen(&mut self) -> Result<()> {
        Ok(())
    }
}

struct RefusingHost;

impl FullscreenHost for RefusingHost {
    fn request_fullscreen(&mut self) -> Result<()> {
        bail!("fullscreen not supported here")
    }
    fn exit_fullscreen(&mut self) -> Result<()> {
        bail!("nothing to exit")
    }
}

fn controller() -> LayoutController {
    LayoutController::new(120, 40, DEFAULT_EXPANDED_PRESET)
}

#[test]
fn height_stays_clamped_at_every_drag_step() {
    let mut layout = controller();
    let max = (40.0 * MAX_OUTPUT_FRACTION) as u16;

    layout.drag_start(30);
    for row in [25, 15, 5, 0, 39, 60, 2] {
        layout.drag_to(row);
        assert!(
            (MIN_OUTPUT_HEIGHT..=max).contains(&layout.output_height()),
            "row {row} produced {}",
            layout.output_height()
        );
    }
}

#[test]
fn dragging_up_grows_the_output_panel() {
    let mut layout = controller();
    let before = layout.output_height();
    layout.drag_start(30);
    layout.drag_to(25);
    assert_eq!(layout.output_height(), before + 5);
    layout.drag_end();
}

#[test]
fn moves_after_drag_end_are_ignored() {
    let mut layout = controller();
    layout.drag_start(30);
    layout.drag_to(20);
    layout.drag_end();
    let settled = layout.output_height();
    layout.drag_to(0);
    assert_eq!(layout.output_height(), settled);
    assert!(!layout.is_resizing());
}

#[test]
fn preset_toggle_flips_between_collapsed_and_expanded() {
    let mut layout = controller();
    assert_eq!(layout.output_height(), DEFAULT_EXPANDED_PRESET);
    layout.toggle_preset();
    assert_eq!(layout.output_height(), COLLAPSED_PRESET);
    layout.toggle_preset();
    assert_eq!(layout.output_height(), DEFAULT_EXPANDED_PRESET);
}

#[test]
fn container_resize_reclamps_the_panel() {
    let mut layout = controller();
    layout.drag_start(30);
    layout.drag_to(0); // pinned to the max for a 40-row container
    layout.drag_end();

    let needs_editor_layout = layout.container_resized(120, 20);
    assert!(needs_editor_layout);
    let max = (20.0 * MAX_OUTPUT_FRACTION) as u16;
    assert_eq!(layout.output_height(), max);
}

#[test]
fn compact_flag_follows_the_width_breakpoint() {
    let mut layout = controller();
    assert!(!layout.is_compact());
    layout.container_resized(COMPACT_WIDTH_BREAKPOINT - 1, 40);
    assert!(layout.is_compact());
}

#[test]
fn fullscreen_uses_the_host_when_it_cooperates() {
    let mut layout = controller();
    assert_eq!(
        layout.toggle_fullscreen(&mut AgreeableHost),
        FullscreenState::Host
    );
    assert_eq!(
        layout.toggle_fullscreen(&mut AgreeableHost),
        FullscreenState::Off
    );
}

#[test]
fn refused_fullscreen_falls_back_without_failing() {
    let mut layout = controller();
    assert_eq!(
        layout.toggle_fullscreen(&mut RefusingHost),
        FullscreenState::Fallback
    );
    assert!(layout.is_fullscreen());
    // Toggling out of the fallback also survives a refusing host.
    assert_eq!(
        layout.toggle_fullscreen(&mut RefusingHost),
        FullscreenState::Off
    );
}

#[test]
fn host_initiated_exit_is_mirrored() {
    let mut layout = controller();
    layout.toggle_fullscreen(&mut AgreeableHost);
    layout.host_fullscreen_changed(false);
    assert_eq!(layout.fullscreen(), FullscreenState::Off);
}

#[test]
fn fallback_presentation_ignores_host_change_events() {
    let mut layout = controller();
    layout.toggle_fullscreen(&mut RefusingHost);
    layout.host_fullscreen_changed(false);
    assert_eq!(layout.fullscreen(), FullscreenState::Fallback);
}
