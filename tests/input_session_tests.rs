use camera_lab::core::{Button, Controller, FrameInput, InputSession};
use camera_lab::{Camera, CameraKind, Settings, ViewSource};
use glam::Vec2;
use std::f32::consts::TAU;

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn test_first_cursor_sample_produces_no_delta() {
        let mut session = InputSession::new();
        session.cursor_moved(400.0, 300.0);
        assert_eq!(session.pointer_delta(), Vec2::ZERO, "first sample only seeds history");

        session.cursor_moved(410.0, 295.0);
        assert_eq!(session.pointer_delta(), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_reset_pointer_restores_first_sample_rule() {
        let mut session = InputSession::new();
        session.cursor_moved(0.0, 0.0);
        session.cursor_moved(5.0, 5.0);
        session.reset_pointer();

        session.cursor_moved(500.0, 500.0);
        assert_eq!(session.take_frame().pointer_delta, Vec2::ZERO);
    }

    #[test]
    fn test_deltas_accumulate_within_a_frame() {
        let mut session = InputSession::new();
        session.cursor_moved(0.0, 0.0);
        session.cursor_moved(3.0, 1.0);
        session.cursor_moved(7.0, -2.0);
        session.scroll(1.0);
        session.scroll(0.5);

        let frame = session.take_frame();
        assert_eq!(frame.pointer_delta, Vec2::new(7.0, -2.0));
        assert_eq!(frame.scroll_delta, 1.5);
    }

    #[test]
    fn test_buttons_in_press_order() {
        let mut session = InputSession::new();
        session.set_button(Button::KeyD, true);
        session.set_button(Button::KeyW, true);
        session.set_button(Button::MouseLeft, true);
        session.set_button(Button::KeyD, false);

        assert_eq!(session.get_down_keys(), &[Button::KeyW, Button::MouseLeft]);
        assert!(session.is_down(Button::KeyW));
        assert!(!session.is_down(Button::KeyD));
    }

    #[test]
    fn test_release_all_clears_held_buttons() {
        let mut session = InputSession::new();
        session.set_button(Button::KeyW, true);
        session.set_button(Button::KeyA, true);
        session.release_all();

        assert!(session.take_frame().held.is_empty());
    }
}

#[cfg(test)]
mod camera_input_tests {
    use super::*;

    #[test]
    fn test_held_keys_move_free_look_each_frame() {
        let mut camera = Camera::from_settings(CameraKind::FreeLook, &Settings::default());
        let mut session = InputSession::new();
        session.set_button(Button::KeyW, true);

        let start = camera.eye_position();
        for _ in 0..10 {
            let frame = session.take_frame();
            camera.apply_input(&frame, 0.1);
        }

        // 10 frames * 0.1 s * 3 units/s along -Z
        let travelled = start - camera.eye_position();
        assert!((travelled.z - 3.0).abs() < 1e-4, "travelled {:?}", travelled);
    }

    #[test]
    fn test_strafe_keys_cancel() {
        let mut camera = Camera::from_settings(CameraKind::FreeLook, &Settings::default());
        let start = camera.eye_position();
        let input = FrameInput {
            held: vec![Button::KeyA, Button::KeyD],
            ..FrameInput::default()
        };
        camera.apply_input(&input, 0.5);
        assert!(camera.eye_position().abs_diff_eq(start, 1e-6));
    }

    #[test]
    fn test_orbit_drag_changes_angles() {
        let mut camera = Camera::from_settings(CameraKind::Orbit, &Settings::default());
        let mut session = InputSession::new();
        session.cursor_moved(100.0, 100.0);
        session.set_button(Button::MouseLeft, true);
        session.cursor_moved(150.0, 100.0);

        camera.apply_input(&session.take_frame(), 0.016);

        let Camera::Orbit { camera: orbit, .. } = &camera else {
            panic!("expected orbit camera");
        };
        // 50 px of an 800 px default viewport, one turn per width
        assert!((orbit.swivel_radians() - 50.0 * TAU / 800.0).abs() < 1e-6);
        assert_eq!(orbit.pitch_radians(), 0.0);
    }

    #[test]
    fn test_free_look_scroll_zooms_fov() {
        let mut camera = Camera::from_settings(CameraKind::FreeLook, &Settings::default());
        let input = FrameInput {
            scroll_delta: 10.0,
            ..FrameInput::default()
        };
        camera.apply_input(&input, 0.016);

        let Camera::FreeLook(inner) = &camera else {
            panic!("expected free-look camera");
        };
        assert_eq!(inner.zoom(), 35.0);
    }
}
