//! Escape-time evaluation
//!
//! The per-pixel kernels for all four fractal kinds. Each one iterates
//! z = z² + c until |z|² reaches 4 (escape radius 2, compared squared to
//! skip the square root) or the iteration cap, and returns the depth
//! reached. This runs once per pixel per frame, so the loop stays on
//! scalar f64 locals with no allocation.

use super::{Complex, FractalKind};

/// Default Julia constant; produces the classic connected dendrite.
const JULIA_DEFAULT: Complex = Complex::new(-0.8, 0.156);
/// Default constant for the Rabbit variant.
const RABBIT_DEFAULT: Complex = Complex::new(-0.0123, 0.745);

/// Iterate z = z² + c from z0 and count the steps until escape or `cap`.
///
/// Both component updates need the pre-iteration zr, so the new real part
/// is computed before zi is overwritten.
#[inline]
fn escape_depth(z0: Complex, c: Complex, cap: u32) -> u32 {
    let mut zr = z0.re;
    let mut zi = z0.im;
    let mut depth = 0;
    while zr * zr + zi * zi < 4.0 && depth < cap {
        let old_zr = zr;
        zr = zr * zr - zi * zi + c.re;
        zi = 2.0 * zi * old_zr + c.im;
        depth += 1;
    }
    depth
}

/// Escape depth for `point` under `kind`, in `[0, cap]`.
///
/// `cap` means the point never escaped (interior). `param` overrides the
/// Julia-family constant; the Mandelbrot family ignores it since there c
/// is the mapped point itself.
pub fn evaluate(kind: FractalKind, point: Complex, param: Option<Complex>, cap: u32) -> u32 {
    match kind {
        FractalKind::Julia => escape_depth(point, param.unwrap_or(JULIA_DEFAULT), cap),
        FractalKind::Rabbit => escape_depth(point, param.unwrap_or(RABBIT_DEFAULT), cap),
        FractalKind::Mandelbrot => escape_depth(Complex::new(0.0, 0.0), point, cap),
        FractalKind::Monster => escape_depth(
            Complex::new(0.0, 0.0),
            Complex::new(point.re.abs(), point.im.abs()),
            cap,
        ),
    }
}
