//! Startup configuration
//!
//! Command-line arguments select the fractal and its parameters; an
//! optional `fractol.json` next to the binary supplies window settings.
//! Flags win over the file. Every configuration error is reported with
//! the usage menu before a window ever opens.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::display::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::fractal::{Complex, FractalKind};

pub const SETTINGS_PATH: &str = "fractol.json";

/// Window settings loadable from `fractol.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

/// Fully resolved startup configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub kind: FractalKind,
    /// Iteration-cap override; `None` keeps the viewport default
    pub iterations: Option<u32>,
    /// Julia-family constant; only `Some` when both components were given
    pub param: Option<Complex>,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

/// Usage menu, printed for `--help` and for argument errors
pub fn menu() {
    println!("Usage: fractol <fractal> [iterations] [cr ci] [OPTIONS]");
    println!();
    println!("Arg 1 : Choose a fractal # or name :");
    println!("    Julia................1");
    println!("    Mandelbrot...........2");
    println!("    Rabbit...............3");
    println!("    Monster..............4");
    println!("(Optional) :");
    println!("Arg 2 : Iterations, e.g. 20 to 1000");
    println!("(For the Julia family only) :");
    println!("Arg 3 : Real part of the constant");
    println!("Arg 4 : Imaginary part of the constant");
    println!();
    println!("Options:");
    println!(
        "  --width W, -w W           Set window width (default: {})",
        DEFAULT_WIDTH
    );
    println!(
        "  --height H, -h H          Set window height (default: {})",
        DEFAULT_HEIGHT
    );
    println!("  --resolution WxH, -r WxH  Set resolution (e.g. 1920x1080)");
    println!("  --no-vsync                Disable VSync for an uncapped loop");
    println!("  --help                    Show this help message");
    println!();
    println!("Commands :");
    println!("    ESC..................Quit");
    println!("    Space................Change color");
    println!("    W/A/S/D, arrows......Pan");
    println!("    Scroll up............Zoom in");
    println!("    Scroll down..........Zoom out");
    println!("    F....................Toggle render timing");
}

/// Parse the command line. `args[0]` is the program name.
///
/// Positional arguments keep the original order (kind, iterations, cr, ci);
/// flags may appear anywhere. `--help` prints the menu and exits.
pub fn parse_args(args: &[String]) -> Result<Config, String> {
    let settings = Settings::load(SETTINGS_PATH).unwrap_or_default();
    let mut width = settings.width;
    let mut height = settings.height;
    let mut vsync = settings.vsync;
    let mut positional: Vec<&str> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                i += 1;
                width = parse_dimension(args.get(i).map(String::as_str), "width")?;
            }
            "--height" | "-h" => {
                i += 1;
                height = parse_dimension(args.get(i).map(String::as_str), "height")?;
            }
            "--resolution" | "-r" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| "missing value for --resolution".to_string())?;
                let parts: Vec<&str> = value.split('x').collect();
                if parts.len() != 2 {
                    return Err(format!("{} is not a WxH resolution", value));
                }
                width = parse_dimension(Some(parts[0]), "width")?;
                height = parse_dimension(Some(parts[1]), "height")?;
            }
            "--help" => {
                menu();
                std::process::exit(0);
            }
            other => positional.push(other),
        }
        i += 1;
    }

    if positional.is_empty() {
        return Err("missing argument".to_string());
    }
    let kind = FractalKind::from_arg(positional[0])
        .ok_or_else(|| format!("{} is not a valid fractal", positional[0]))?;

    let iterations = match positional.get(1) {
        Some(arg) => {
            let cap: u32 = arg
                .parse()
                .map_err(|_| format!("{} is not a valid iteration count", arg))?;
            if cap == 0 {
                return Err("iteration count must be positive".to_string());
            }
            Some(cap)
        }
        None => None,
    };

    let param = match (positional.get(2), positional.get(3)) {
        (None, None) => None,
        (Some(cr), Some(ci)) => {
            let re: f64 = cr
                .parse()
                .map_err(|_| format!("{} is not a valid real part", cr))?;
            let im: f64 = ci
                .parse()
                .map_err(|_| format!("{} is not a valid imaginary part", ci))?;
            // Both components zero means "use the fractal's built-in constant"
            if re == 0.0 && im == 0.0 {
                None
            } else {
                Some(Complex::new(re, im))
            }
        }
        _ => {
            return Err(
                "the complex constant needs both components (cr and ci)".to_string(),
            )
        }
    };

    if positional.len() > 4 {
        return Err(format!("unexpected argument {}", positional[4]));
    }

    Ok(Config {
        kind,
        iterations,
        param,
        width,
        height,
        vsync,
    })
}

fn parse_dimension(arg: Option<&str>, name: &str) -> Result<u32, String> {
    let value = arg.ok_or_else(|| format!("missing value for --{}", name))?;
    let parsed: u32 = value
        .parse()
        .map_err(|_| format!("{} is not a valid {}", value, name))?;
    if parsed == 0 {
        return Err(format!("{} must be positive", name));
    }
    Ok(parsed)
}
