use super::*;

use std::time::Duration;

use crate::animation::timeline::{Property, TickAnimation};
use crate::foundation::error::{FlowError, FlowResult};
use crate::host::RenderRequest;
use crate::rotation::state::SurfaceId;

#[derive(Default)]
struct RecordingHost {
    rendered: Vec<&'static str>,
    groups: Vec<TickAnimation>,
    fail: bool,
}

impl FlowHost<&'static str> for RecordingHost {
    fn render(&mut self, req: RenderRequest<'_, &'static str>) -> FlowResult<()> {
        if self.fail {
            return Err(FlowError::tick("boom"));
        }
        self.rendered.push(req.frame);
        Ok(())
    }

    fn animate(&mut self, group: TickAnimation) -> FlowResult<()> {
        self.groups.push(group);
        Ok(())
    }
}

fn configured_view() -> FlowView<&'static str> {
    let mut view = FlowView::new();
    view.frames(["a", "b", "c"])
        .fade_duration(1000)
        .between_duration(5000);
    view
}

#[test]
fn flow_is_refused_while_no_frames_are_configured() {
    let mut view: FlowView<&'static str> = FlowView::new();
    assert!(view.is_frame_empty());
    view.flow();
    assert!(!view.is_flowing());
}

#[test]
fn flow_and_pause_are_idempotent() {
    let mut view = configured_view();
    view.flow();
    view.flow();
    assert!(view.is_flowing());
    view.pause();
    view.pause();
    assert!(!view.is_flowing());
}

#[test]
fn every_mutator_stops_a_running_rotation() {
    let checks: Vec<fn(&mut FlowView<&'static str>)> = vec![
        |v| {
            v.scale(2.0);
        },
        |v| {
            v.fade_duration(500);
        },
        |v| {
            v.between_duration(2000);
        },
        |v| {
            v.translate_x(10);
        },
        |v| {
            v.translate_xs([1, 2]);
        },
        |v| {
            v.translate_y(-10);
        },
        |v| {
            v.translate_ys([3, 4]);
        },
        |v| {
            v.frame("d");
        },
        |v| {
            v.frames(["e", "f"]);
        },
    ];
    for mutate in checks {
        let mut view = configured_view();
        view.flow();
        assert!(view.is_flowing());
        mutate(&mut view);
        assert!(!view.is_flowing(), "mutator left the rotation running");
    }
}

#[test]
fn five_ticks_walk_the_frame_cycle() {
    let mut view = configured_view();
    let mut host = RecordingHost::default();
    let t0 = std::time::Instant::now();
    view.flow();

    for k in 0..5u64 {
        assert!(view.pump(t0 + Duration::from_millis(6000 * k), &mut host));
    }
    assert_eq!(host.rendered, vec!["a", "b", "c", "a", "b"]);
}

#[test]
fn missing_offsets_omit_translation_but_keep_rotating() {
    let mut view = configured_view();
    let mut host = RecordingHost::default();
    let t0 = std::time::Instant::now();
    view.flow();
    for k in 0..3u64 {
        view.pump(t0 + Duration::from_millis(6000 * k), &mut host);
    }

    assert_eq!(host.rendered, vec!["a", "b", "c"]);
    for group in &host.groups {
        assert!(
            group
                .tracks()
                .iter()
                .all(|t| t.property == Property::Opacity)
        );
    }
}

#[test]
fn configured_offsets_show_up_in_dispatched_groups() {
    let mut view = configured_view();
    view.translate_x(40).translate_y(-16);
    let mut host = RecordingHost::default();
    view.flow();
    view.pump(std::time::Instant::now(), &mut host);

    let tracks = host.groups[0].tracks();
    assert!(tracks.iter().any(|t| t.property == Property::TranslateX));
    assert!(tracks.iter().any(|t| t.property == Property::TranslateY));
    assert_eq!(host.groups[0].surface(), SurfaceId(0));
}

#[test]
fn invalid_scale_is_ignored() {
    let mut view = configured_view();
    view.scale(0.0).scale(-1.0).scale(f32::NAN);
    assert_eq!(view.config().scale, 1.0);
    view.scale(0.5);
    assert_eq!(view.config().scale, 0.5);
}

#[test]
fn tick_failure_surfaces_only_as_a_stopped_rotation() {
    let mut view = configured_view();
    let mut host = RecordingHost {
        fail: true,
        ..Default::default()
    };
    view.flow();
    view.pump(std::time::Instant::now(), &mut host);
    assert!(!view.is_flowing());

    // The widget stays usable.
    host.fail = false;
    view.flow();
    assert!(view.is_flowing());
}

#[test]
fn dropping_a_flowing_view_stops_cleanly() {
    let mut view = configured_view();
    view.flow();
    drop(view);
}
