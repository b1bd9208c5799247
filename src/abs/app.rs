//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a new [`App`] instance with the specified title, width, and height.
    ///
    /// A core profile 3.3 context is requested first; if the driver refuses it,
    /// one retry is made with GLES 3.0 before giving up. Without a context there
    /// is nothing to render into, so both failing is an error for the caller to
    /// surface, not something to limp past.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        let window = video_subsystem
            .window(title, width, height)
            .opengl()
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let gl_context = match window.gl_create_context() {
            Ok(gl_context) => gl_context,
            Err(err) => {
                log::warn!("no core profile 3.3 context ({err}) - retrying with GLES 3.0");
                let gl_attr = video_subsystem.gl_attr();
                gl_attr.set_context_profile(sdl2::video::GLProfile::GLES);
                gl_attr.set_context_version(3, 0);
                window
                    .gl_create_context()
                    .map_err(|err| format!("no usable OpenGL context: {err}"))?
            }
        };
        window.gl_make_current(&gl_context)?;
        if let Err(err) = video_subsystem.gl_set_swap_interval(sdl2::video::SwapInterval::VSync) {
            log::warn!("vsync unavailable: {err}");
        }
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        unsafe {
            gl.clear_color(0.1, 0.2, 0.3, 1.0);
            gl.enable(glow::DEPTH_TEST);
            gl.enable(glow::CULL_FACE);
            gl.cull_face(glow::BACK);
            gl.front_face(glow::CCW);
        }

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }
}
