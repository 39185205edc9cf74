use camera_lab::core::{Button, Viewport};
use camera_lab::replay::{self, InputScript, ScriptFrame};
use camera_lab::{Camera, CameraKind, Settings, ViewSource};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_4, PI};

fn held_for(frames: usize, button: Button) -> InputScript {
    InputScript {
        frames: (0..frames)
            .map(|_| ScriptFrame {
                held: vec![button],
                ..ScriptFrame::default()
            })
            .collect(),
    }
}

#[cfg(test)]
mod free_look_replay_tests {
    use super::*;

    #[test]
    fn test_one_second_of_forward_travels_movement_speed() {
        let mut camera = Camera::from_settings(CameraKind::FreeLook, &Settings::default());
        let records = replay::run(&mut camera, &held_for(60, Button::KeyW), Viewport::default());

        assert_eq!(records.len(), 60);
        let last = records.last().unwrap();
        assert!(
            last.eye.abs_diff_eq(Vec3::new(0.0, 0.0, 0.0), 1e-4),
            "expected to end at the origin, got {:?}",
            last.eye
        );
    }

    #[test]
    fn test_records_are_numbered_in_order() {
        let mut camera = Camera::from_settings(CameraKind::FreeLook, &Settings::default());
        let records = replay::run(&mut camera, &held_for(5, Button::KeyD), Viewport::default());
        let numbers: Vec<u64> = records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_cursor_script_turns_camera() {
        let script = InputScript::from_json(
            r#"{ "frames": [
                { "cursor": [400.0, 300.0] },
                { "cursor": [440.0, 300.0] }
            ] }"#,
        )
        .unwrap();
        let mut camera = Camera::from_settings(CameraKind::FreeLook, &Settings::default());
        let records = replay::run(&mut camera, &script, Viewport::default());

        assert_ne!(records[0].view, records[1].view, "second sample should yaw the camera");

        let Camera::FreeLook(inner) = &camera else {
            panic!("expected free-look camera");
        };
        // 40 px at 0.25 deg/px
        assert_eq!(inner.yaw(), -80.0);
    }
}

#[cfg(test)]
mod orbit_replay_tests {
    use super::*;

    #[test]
    fn test_drag_script_orbits_around_focus() {
        let script = InputScript::from_json(
            r#"{ "frames": [
                { "held": ["MouseLeft"], "cursor": [100.0, 100.0] },
                { "held": ["MouseLeft"], "cursor": [150.0, 100.0] },
                { "held": ["MouseLeft"], "cursor": [150.0, 80.0] },
                { "cursor": [400.0, 400.0] }
            ] }"#,
        )
        .unwrap();
        let mut camera = Camera::from_settings(CameraKind::Orbit, &Settings::default());
        let records = replay::run(&mut camera, &script, Viewport::default());

        assert_eq!(records[0].eye, Vec3::new(0.0, 0.0, 10.0));
        for record in &records {
            assert!((record.eye.length() - 10.0).abs() < 1e-4);
        }
        assert_ne!(records[1].eye, records[0].eye);
        assert_ne!(records[2].eye, records[1].eye);
        assert_eq!(records[3].eye, records[2].eye, "motion without a drag is ignored");
    }

    #[test]
    fn test_scroll_script_dollies() {
        let script = InputScript::from_json(r#"{ "frames": [ { "scroll": 2.0 }, { "scroll": -6.0 } ] }"#).unwrap();
        let mut camera = Camera::from_settings(CameraKind::Orbit, &Settings::default());
        let records = replay::run(&mut camera, &script, Viewport::default());

        // Scrolling away from the user moves out by a quarter unit per line
        assert!((records[0].eye.z - 10.5).abs() < 1e-6);
        assert!((records[1].eye.z - 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_drag_speed_follows_replay_viewport() {
        let script = InputScript::from_json(
            r#"{ "frames": [
                { "held": ["MouseLeft"], "cursor": [0.0, 150.0] },
                { "held": ["MouseLeft"], "cursor": [200.0, 75.0] }
            ] }"#,
        )
        .unwrap();
        let mut camera = Camera::from_settings(CameraKind::Orbit, &Settings::default());
        replay::run(&mut camera, &script, Viewport::new(400, 300));

        let Camera::Orbit { camera: orbit, .. } = &camera else {
            panic!("expected orbit camera");
        };
        // Half the width is half a turn; a quarter of the height upwards is PI / 4
        assert!((orbit.swivel_radians() - PI).abs() < 1e-5);
        assert!((orbit.pitch_radians() - FRAC_PI_4).abs() < 1e-5);
    }
}

#[cfg(test)]
mod determinism_tests {
    use super::*;

    fn mixed_script() -> InputScript {
        InputScript::from_json(
            r#"{ "frames": [
                { "dt": 0.02, "held": ["KeyW"], "cursor": [10.0, 10.0] },
                { "dt": 0.03, "held": ["KeyW", "KeyA"], "cursor": [35.0, -4.0] },
                { "dt": 0.01, "held": ["MouseLeft"], "cursor": [60.0, 22.0], "scroll": 1.5 },
                { "dt": 0.05, "held": ["KeyS", "KeyD", "MouseLeft"], "cursor": [12.0, 40.0] },
                { "scroll": -3.0 }
            ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_replaying_twice_is_bit_identical() {
        for kind in [CameraKind::FreeLook, CameraKind::Orbit] {
            let settings = Settings::default();
            let script = mixed_script();

            let mut first_camera = Camera::from_settings(kind, &settings);
            let first = replay::run(&mut first_camera, &script, Viewport::new(1024, 768));
            let mut second_camera = Camera::from_settings(kind, &settings);
            let second = replay::run(&mut second_camera, &script, Viewport::new(1024, 768));

            assert_eq!(first, second, "{:?} replay diverged", kind);
            assert_eq!(first_camera, second_camera);
        }
    }

    #[test]
    fn test_records_match_final_camera_state() {
        let mut camera = Camera::from_settings(CameraKind::Orbit, &Settings::default());
        let viewport = Viewport::new(640, 480);
        let records = replay::run(&mut camera, &mixed_script(), viewport);

        let last = records.last().unwrap();
        assert_eq!(last.view, camera.view_matrix());
        assert_eq!(last.projection, camera.projection_matrix(viewport));
        assert_eq!(last.eye, camera.eye_position());
    }

    #[test]
    fn test_records_serialize_to_json() {
        let mut camera = Camera::from_settings(CameraKind::FreeLook, &Settings::default());
        let records = replay::run(&mut camera, &held_for(2, Button::KeyS), Viewport::default());
        let json = serde_json::to_string(&records).unwrap();
        assert!(json.contains("\"number\":1"));
        assert!(json.contains("\"projection\""));
    }
}
