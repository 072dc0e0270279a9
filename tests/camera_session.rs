//! End-to-end camera session: TOML options and scene JSON in, matrices,
//! rays and input-driven motion out.

use glam::{Mat4, Vec3, Vec4};
use marchcam::{
    Camera, InputEvent, InputProcessor, MouseButton, Options, SceneCameraData,
};

const SCENE: &str = r#"{
    "camera": {
        "position": [0.0, 0.0, 5.0],
        "look": [0.0, 0.0, -1.0],
        "up": [0.0, 1.0, 0.0],
        "heightAngle": 0.7853982
    },
    "lights": [{"type": "directional", "direction": [0, -1, 0]}]
}"#;

const OPTIONS: &str = r"
[screen]
width = 800
height = 600
near_plane = 0.1
far_plane = 100.0
";

fn session() -> (Options, Camera) {
    let options = Options::from_toml_str(OPTIONS).unwrap();
    options.validate().unwrap();
    let data = SceneCameraData::from_json_str(SCENE).unwrap();
    data.validate().unwrap();
    let camera = Camera::new(&data, &options.screen);
    (options, camera)
}

#[test]
fn loaded_scene_produces_expected_frustum() {
    let (_, cam) = session();
    let expected_height = 2.0 * 100.0 * (0.7853982_f32 / 2.0).tan();
    assert_eq!(cam.view_plane_height(), expected_height);
    assert!((cam.view_plane_height() - 82.84).abs() < 0.01);
    assert!((cam.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    assert_eq!(cam.position_homogeneous(), Vec4::new(0.0, 0.0, 5.0, 1.0));
}

#[test]
fn walk_and_look_keeps_matrices_consistent() {
    let (options, mut cam) = session();
    let mut input = InputProcessor::with_options(&options);

    let _ = input.handle_event(
        InputEvent::Key {
            key: "KeyD".into(),
            pressed: true,
        },
        &mut cam,
    );
    for _ in 0..10 {
        assert!(input.tick(0.1, &mut cam));
    }
    assert!(cam.position().abs_diff_eq(Vec3::new(0.75, 0.0, 5.0), 1e-5));

    let _ = input.handle_event(
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        },
        &mut cam,
    );
    for step in 1..=5 {
        let _ = input.handle_event(
            InputEvent::CursorMoved {
                x: step as f32 * 12.0,
                y: step as f32 * -4.0,
            },
            &mut cam,
        );
    }

    let product = cam.inverse_view_matrix() * cam.view_matrix();
    assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-4));
    let eye = cam.view_matrix().transform_point3(cam.position());
    assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-4));

    let (width, height) = cam.viewport();
    let center = cam
        .ray_direction(height / 2, width / 2)
        .truncate()
        .normalize();
    assert!(center.abs_diff_eq(cam.look().normalize(), 2e-3));
}

#[test]
fn degenerate_inputs_are_rejected_upstream() {
    let bad_options = Options::from_toml_str(
        "[screen]\nnear_plane = 5.0\nfar_plane = 1.0\n",
    )
    .unwrap();
    assert!(bad_options.validate().is_err());

    let bad_scene = SceneCameraData::from_json_str(
        r#"{"camera": {"position": [0,0,0], "look": [0,1,0],
            "up": [0,1,0], "heightAngle": 0.8}}"#,
    )
    .unwrap();
    assert!(bad_scene.validate().is_err());
}
