//! Command-line driver for the marchcam camera core.

use std::path::{Path, PathBuf};

use marchcam::{
    Camera, CameraUniform, InputEvent, InputProcessor, MarchError,
    MouseButton, Options, SceneCameraData,
};

/// Frame time used for the scripted walk.
const FRAME_SECONDS: f32 = 1.0 / 60.0;

fn parse_args() -> Option<(Option<PathBuf>, PathBuf)> {
    let args: Vec<PathBuf> =
        std::env::args_os().skip(1).map(PathBuf::from).collect();
    match args.as_slice() {
        [scene] => Some((None, scene.clone())),
        [options, scene] => Some((Some(options.clone()), scene.clone())),
        _ => None,
    }
}

fn run(
    options_path: Option<&Path>,
    scene_path: &Path,
) -> Result<(), MarchError> {
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    options.validate()?;

    let data = SceneCameraData::load(scene_path)?;
    data.validate()?;

    let mut camera = Camera::new(&data, &options.screen);
    let mut input = InputProcessor::with_options(&options);

    // Walk forward for half a second, then drag the view to the right.
    let _ = input.handle_event(
        InputEvent::Key {
            key: "KeyW".into(),
            pressed: true,
        },
        &mut camera,
    );
    for _ in 0..30 {
        let _ = input.tick(FRAME_SECONDS, &mut camera);
    }
    let _ = input.handle_event(
        InputEvent::Key {
            key: "KeyW".into(),
            pressed: false,
        },
        &mut camera,
    );
    let _ = input
        .handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 }, &mut camera);
    let _ = input.handle_event(
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        },
        &mut camera,
    );
    let _ = input
        .handle_event(InputEvent::CursorMoved { x: 40.0, y: 0.0 }, &mut camera);

    let uniform = CameraUniform::from_camera(&camera, &options.render);
    log::info!("eye: {}", camera.position());
    log::info!("look: {}", camera.look());
    log::info!("view matrix: {}", camera.view_matrix());
    log::info!("uniform block: {} bytes", uniform.as_bytes().len());

    let (width, height) = camera.viewport();
    let corners = [
        (0, 0),
        (0, width - 1),
        (height - 1, 0),
        (height - 1, width - 1),
    ];
    for (row, col) in corners {
        log::info!(
            "ray ({row}, {col}): {}",
            camera.ray_direction(row, col).truncate().normalize()
        );
    }
    Ok(())
}

fn main() -> Result<(), MarchError> {
    env_logger::init();

    let Some((options_path, scene_path)) = parse_args() else {
        log::error!("Usage: marchcam [OPTIONS.toml] SCENE.json");
        std::process::exit(1);
    };

    run(options_path.as_deref(), &scene_path)
        .inspect_err(|e| log::error!("{e}"))
}
