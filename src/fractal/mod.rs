mod escape;
mod palette;
mod render;
mod viewport;

pub use escape::evaluate;
pub use palette::Palette;
pub use render::{depth_color, render};
pub use viewport::{Viewport, ZoomDirection, ZoomThrottle, SCALE_LIMIT};

/// A point in the complex plane.
///
/// Transient: recomputed for every pixel of every frame, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// The four supported escape-time fractals.
///
/// All share the recurrence z = z² + c; they differ in where z starts and
/// where c comes from (see `evaluate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalKind {
    Julia,
    Mandelbrot,
    Rabbit,
    Monster,
}

impl FractalKind {
    /// Parse the command-line selector: the classic numeric choice or a name.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "1" | "julia" => Some(Self::Julia),
            "2" | "mandelbrot" => Some(Self::Mandelbrot),
            "3" | "rabbit" => Some(Self::Rabbit),
            "4" | "monster" => Some(Self::Monster),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Julia => "Julia",
            Self::Mandelbrot => "Mandelbrot",
            Self::Rabbit => "Rabbit",
            Self::Monster => "Monster",
        }
    }

    /// Map a pixel to its plane point for this kind.
    ///
    /// Julia-family views are transposed: the imaginary axis runs along
    /// screen x and the real axis along screen y. Mandelbrot-family reads
    /// the axes straight. Swapping this changes the rendered orientation,
    /// so both families go through the one shared mapper with the pixel
    /// axes in the order the kind expects.
    #[inline]
    pub fn pixel_to_point(self, view: &Viewport, x: i32, y: i32) -> Complex {
        match self {
            Self::Julia | Self::Rabbit => view.to_complex(y as f64, x as f64),
            Self::Mandelbrot | Self::Monster => view.to_complex(x as f64, y as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_numeric_arg() {
        assert_eq!(FractalKind::from_arg("1"), Some(FractalKind::Julia));
        assert_eq!(FractalKind::from_arg("2"), Some(FractalKind::Mandelbrot));
        assert_eq!(FractalKind::from_arg("3"), Some(FractalKind::Rabbit));
        assert_eq!(FractalKind::from_arg("4"), Some(FractalKind::Monster));
    }

    #[test]
    fn test_kind_from_name_arg() {
        assert_eq!(FractalKind::from_arg("julia"), Some(FractalKind::Julia));
        assert_eq!(
            FractalKind::from_arg("Mandelbrot"),
            Some(FractalKind::Mandelbrot)
        );
        assert_eq!(FractalKind::from_arg("5"), None);
        assert_eq!(FractalKind::from_arg("mandel"), None);
    }

    #[test]
    fn test_mandelbrot_family_axis_assignment() {
        // re follows screen x, im follows screen y
        let view = Viewport::new(FractalKind::Mandelbrot);
        let p = FractalKind::Mandelbrot.pixel_to_point(&view, 300, 0);
        assert_eq!(p.re, 300.0 / view.scale + view.offset_x);
        assert_eq!(p.im, view.offset_y);
    }

    #[test]
    fn test_julia_family_axis_assignment() {
        // Transposed: im follows screen x, re follows screen y
        let view = Viewport::new(FractalKind::Julia);
        let p = FractalKind::Julia.pixel_to_point(&view, 300, 0);
        assert_eq!(p.im, 300.0 / view.scale + view.offset_y);
        assert_eq!(p.re, view.offset_x);
    }
}
