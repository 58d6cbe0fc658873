mod present;

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info, warn};
use mandelbrot_explorer::{
    config::{Config, Settings},
    input::Command,
    pixel::Pixel,
    render::Renderer,
    screen,
    viewport::{Outcome, Viewport, ViewportController},
};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use present::Presenter;

const TITLE: &str = "Mandelbrot Set";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let settings = Config::parse().settings()?;
    info!(
        "{}x{} pixels, {} iterations, {} render threads, view {}",
        settings.size.width(),
        settings.size.height(),
        settings.max_iterations,
        settings.threads,
        settings.viewport
    );

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title(&settings.viewport))
        .with_inner_size(PhysicalSize::new(
            settings.size.width(),
            settings.size.height(),
        ))
        .build(&event_loop)
        .context("failed to create window")?;

    let mut explorer = Explorer::new(&settings, &window)?;
    window.request_redraw();

    event_loop.run(move |event, _, control_flow| {
        // Frames only change in response to input, so sleep between events.
        control_flow.set_wait();
        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if let Some(command) = Command::from_keyboard_input(&input) {
                        match explorer.apply(command) {
                            Outcome::Redraw => {
                                window.set_title(&title(explorer.controller.viewport()));
                                window.request_redraw();
                            }
                            Outcome::Unchanged => {}
                            Outcome::Quit => *control_flow = ControlFlow::Exit,
                        }
                    }
                }
                WindowEvent::Resized(size) => {
                    explorer.resize(size);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    explorer.resize(*new_inner_size);
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                match explorer.redraw() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        explorer.resize(window.inner_size());
                        window.request_redraw();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("out of graphics memory");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                    Err(err) => warn!("skipping frame: {}", err),
                }
            }
            _ => {}
        }
    });
}

/// Everything the event loop mutates. Input and rendering take turns on it.
struct Explorer {
    controller: ViewportController,
    renderer: Renderer,
    presenter: Presenter,
    /// `None` while the window is too small to map a viewport onto.
    grid: Option<screen::Size>,
    frame: Vec<Pixel>,
    stale: bool,
}

impl Explorer {
    fn new(settings: &Settings, window: &Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        Ok(Self {
            controller: settings.controller(),
            renderer: Renderer::new(settings.threads, settings.max_iterations)?,
            presenter: Presenter::new(window)?,
            grid: screen::Size::new(size.width, size.height).ok(),
            frame: Vec::new(),
            stale: true,
        })
    }

    fn apply(&mut self, command: Command) -> Outcome {
        let outcome = self.controller.apply(command);
        if outcome == Outcome::Redraw {
            self.stale = true;
        }
        outcome
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        debug!("resizing to {:?}", size);

        self.presenter.resize(size);
        let grid = screen::Size::new(size.width, size.height).ok();
        if grid != self.grid {
            self.grid = grid;
            self.stale = true;
        }
    }

    fn redraw(&mut self) -> Result<(), wgpu::SurfaceError> {
        let grid = match self.grid {
            Some(grid) => grid,
            None => return Ok(()),
        };

        if self.stale {
            self.renderer
                .render(self.controller.viewport(), grid, &mut self.frame);
            self.stale = false;
        }
        self.presenter.present(grid, &self.frame)
    }
}

fn title(viewport: &Viewport) -> String {
    format!(
        "{} - center {}, width {:.3e}",
        TITLE,
        viewport.center(),
        viewport.width()
    )
}
