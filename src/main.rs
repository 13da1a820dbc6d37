// Allow unused code for designed-but-not-yet-used APIs
// Remove these as the codebase matures
#![allow(dead_code)]

mod config;
mod display;
mod fractal;
mod util;

use config::{menu, parse_args};
use display::{draw_text, text_width, Display, InputEvent, PixelBuffer, RenderTarget, GLYPH_HEIGHT};
use fractal::{render, Palette, Viewport, ZoomDirection, ZoomThrottle};
use sdl2::keyboard::Keycode;
use util::RenderTimer;

/// Device-space pan step per keypress. `Viewport::pan` divides it by the
/// current scale, so a pan always moves the view the same number of pixels.
const PAN_STEP: f64 = 10.0;

/// Status overlay: iteration cap and scale, white over a one-pixel shadow
/// so the text reads against any fractal coloring.
fn draw_hud(buffer: &mut PixelBuffer, view: &Viewport, render_ms: Option<(f32, f32)>) {
    let lines = [
        (5, format!("Number of iterations : {}", view.iteration_cap)),
        (35, format!("Scale value : {}", view.scale as i64)),
    ];
    for (y, text) in &lines {
        draw_text(buffer, 11, y + 1, text, 0, 0, 0);
        draw_text(buffer, 10, *y, text, 255, 255, 255);
    }

    if let Some((last, avg)) = render_ms {
        let text = format!("render {:.1} ms  avg {:.1} ms", last, avg);
        let x = buffer.width() as i32 - text_width(&text) - 10;
        let y = buffer.height() as i32 - GLYPH_HEIGHT - 5;
        draw_text(buffer, x + 1, y + 1, &text, 0, 0, 0);
        draw_text(buffer, x, y, &text, 255, 255, 0);
    }
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let cfg = match parse_args(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("\x1b[31mERROR : {}\x1b[0m", e);
            eprintln!();
            menu();
            std::process::exit(2);
        }
    };

    let (mut display, texture_creator) =
        Display::with_options("fractol", cfg.width, cfg.height, cfg.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, cfg.width, cfg.height)?;
    let mut buffer = PixelBuffer::with_size(cfg.width, cfg.height);
    buffer.clear(0, 0, 0);

    let mut view = Viewport::new(cfg.kind);
    if let Some(cap) = cfg.iterations {
        view.iteration_cap = cap;
    }
    view.param = cfg.param;

    let mut palette = Palette::new();
    let mut throttle = ZoomThrottle::new();
    let mut timer = RenderTimer::new(16);
    let mut show_timing = false;

    println!("=== fractol ===");
    println!("Fractal: {}", view.kind.name());
    println!("Resolution: {}x{}", cfg.width, cfg.height);
    if cfg.vsync {
        println!("VSync: ON (60fps locked). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped loop)");
    }
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  Escape       - Quit");
    println!("  Space        - Change color");
    println!("  W/A/S/D      - Pan (arrow keys work too)");
    println!("  Scroll up    - Zoom in at cursor");
    println!("  Scroll down  - Zoom out at cursor");
    println!("  F            - Toggle render timing");

    // Cursor position for wheel zoom, tracked from motion events
    let mut cursor_x = cfg.width as i32 / 2;
    let mut cursor_y = cfg.height as i32 / 2;
    let mut dirty = true;

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Space => {
                        palette.cycle();
                        dirty = true;
                    },
                    Keycode::W | Keycode::Up => {
                        view.pan(0.0, PAN_STEP);
                        dirty = true;
                    },
                    Keycode::S | Keycode::Down => {
                        view.pan(0.0, -PAN_STEP);
                        dirty = true;
                    },
                    Keycode::A | Keycode::Left => {
                        view.pan(-PAN_STEP, 0.0);
                        dirty = true;
                    },
                    Keycode::D | Keycode::Right => {
                        view.pan(PAN_STEP, 0.0);
                        dirty = true;
                    },
                    Keycode::F => {
                        show_timing = !show_timing;
                        dirty = true;
                    },
                    _ => {},
                },
                InputEvent::MouseMove { x, y } => {
                    cursor_x = x;
                    cursor_y = y;
                },
                InputEvent::MouseWheel { delta } => {
                    if delta != 0 && throttle.try_zoom(view.scale) {
                        let direction = if delta > 0 {
                            ZoomDirection::In
                        } else {
                            ZoomDirection::Out
                        };
                        view.zoom_at(cursor_x as f64, cursor_y as f64, direction);
                        dirty = true;
                    }
                },
            }
        }

        if dirty {
            timer.time(|| render(&view, &palette, &mut buffer));
            let render_ms = show_timing.then(|| (timer.last_ms(), timer.avg_ms()));
            draw_hud(&mut buffer, &view, render_ms);
            dirty = false;
        }

        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
