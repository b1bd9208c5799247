//! A single textured cube spinning with wall-clock time.
//!
//! Setup is linear: acquire a surface and GL context, build the shader
//! program, upload the cube, create a placeholder texture, then loop one draw
//! per display refresh while the real crate image decodes in the background.

use std::time::Instant;

use glow::HasContext;

use crate::{
    abs::{App, Texture},
    render::{
        loader::ImageLoader,
        meshing,
        transform::{self, Transforms},
    },
};

mod abs;
mod render;

/// Fixed name of the drawable surface, used as the window title.
const SURFACE_ID: &str = "game-surface";
/// Decoded in the background and swapped in over the placeholder.
const CRATE_IMAGE_PATH: &str = "assets/crate.png";

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr) => {{
        let vert = $crate::abs::Shader::new(
            &$gl,
            glow::VERTEX_SHADER,
            include_str!(concat!(
                "render/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
        )
        .map_err(|log| format!("vertex shader failed to compile: {log}"))?;
        let frag = $crate::abs::Shader::new(
            &$gl,
            glow::FRAGMENT_SHADER,
            include_str!(concat!(
                "render/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )
        .map_err(|log| format!("fragment shader failed to compile: {log}"))?;
        $crate::abs::ShaderProgram::new(&$gl, &[&vert, &frag])
            .map_err(|log| format!("shader program failed to link: {log}"))?
    }};
}

fn main() {
    if let Err(err) = setup_logger() {
        eprintln!("failed to install logger: {err}");
    }
    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn setup_logger() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
}

/// Runs setup and the render loop. Any `Err` means setup aborted before a
/// single draw call was issued.
fn run() -> Result<(), String> {
    let mut app = App::new(SURFACE_ID, WINDOW_WIDTH, WINDOW_HEIGHT)?;
    log::info!("acquired '{SURFACE_ID}' surface ({WINDOW_WIDTH}x{WINDOW_HEIGHT})");

    let program = shader_program!(cube, app.gl);
    program.validate(
        &["a_position", "a_tex_coord"],
        &["u_model", "u_view", "u_projection", "u_sampler"],
    )?;
    program.use_program();

    let mesh = meshing::build_cube_mesh(&app.gl)?;
    let mut texture = Texture::placeholder(&app.gl)?;
    let mut image_load = ImageLoader::spawn(CRATE_IMAGE_PATH);

    let transforms = Transforms::new(WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32);
    program.set_uniform("u_view", transforms.view);
    program.set_uniform("u_projection", transforms.projection);
    program.set_uniform("u_sampler", 0i32);
    log::info!("setup complete, entering render loop");

    let start = Instant::now();
    'running: loop {
        for event in app.event_pump.poll_iter() {
            if let sdl2::event::Event::Quit { .. } = event {
                break 'running;
            }
        }

        // Placeholder -> loaded happens at most once; poll() goes quiet after
        // the image has been handed over.
        if let Some(image) = image_load.poll() {
            texture.upload_image(&image);
            log::info!(
                "crate texture loaded ({}x{})",
                texture.width(),
                texture.height()
            );
        }

        program.set_uniform(
            "u_model",
            transform::model_matrix(start.elapsed().as_secs_f32()),
        );

        unsafe {
            app.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        texture.bind(0);
        mesh.draw();

        app.window.gl_swap_window();
    }

    Ok(())
}
