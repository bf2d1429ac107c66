//! Fixed-point arithmetic for deterministic simulation.
//!
//! Positions and velocities of simulated bodies are stored as `i32` values
//! scaled by 256 (8 fractional bits). All per-frame arithmetic is plain
//! integer math, so a run is bit-reproducible across platforms given the
//! same inputs. Floats appear only once, at configuration time, when tuning
//! constants from the INI file are converted with [`from_f32`].
//!
//! Conversion back to pixel space always floors: [`to_px`] is an arithmetic
//! right shift. Mixing rounding rules would desynchronize collision snapping,
//! so nothing else in the crate divides a fixed-point value by the scale.

/// A sub-pixel coordinate or velocity, scaled by [`FX_ONE`].
pub type Fx = i32;

/// Fractional bits.
pub const FX_SHIFT: u32 = 8;

/// One pixel in fixed-point units.
pub const FX_ONE: Fx = 1 << FX_SHIFT; // 256

/// Convert a whole-pixel value to fixed-point.
#[inline(always)]
pub const fn from_px(p: i32) -> Fx {
    p << FX_SHIFT
}

/// Convert a fixed-point value to whole pixels, flooring.
#[inline(always)]
pub const fn to_px(v: Fx) -> i32 {
    v >> FX_SHIFT
}

/// Scale a real tuning constant into fixed-point.
///
/// Truncates toward zero, matching `int(c * 256)`. Configuration-time only;
/// never called from the per-frame path.
#[inline]
pub fn from_f32(c: f32) -> Fx {
    (c * FX_ONE as f32) as Fx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_round_trip() {
        for p in [-4096, -33, -1, 0, 1, 60, 328, 1776] {
            assert_eq!(to_px(from_px(p)), p);
        }
    }

    #[test]
    fn test_to_px_floors_negatives() {
        // -0.5 px must floor to -1, not truncate to 0.
        assert_eq!(to_px(-(FX_ONE / 2)), -1);
        assert_eq!(to_px(-FX_ONE - 1), -2);
        assert_eq!(to_px(FX_ONE + 255), 1);
    }

    #[test]
    fn test_from_f32_matches_precomputed_constants() {
        assert_eq!(from_f32(0.18), 46);
        assert_eq!(from_f32(0.12), 30);
        assert_eq!(from_f32(2.4), 614);
        assert_eq!(from_f32(0.27), 69);
        assert_eq!(from_f32(7.0), 7 * FX_ONE);
    }

    #[test]
    fn test_add_sub_are_plain_integer_ops() {
        let a = from_px(3) + from_f32(0.5);
        assert_eq!(a, 3 * FX_ONE + 128);
        assert_eq!(to_px(a), 3);
        assert_eq!(to_px(a - from_f32(0.5)), 3);
    }
}
