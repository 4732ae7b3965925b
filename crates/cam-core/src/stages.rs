//! Individual CIECAM02 pipeline stages.
//!
//! Each function is one numbered step of the forward or reverse model,
//! written as a pure function of its explicit inputs. Viewing conditions,
//! the forward and reverse pipelines and the lightness fast path all share
//! these, so the achromatic response of the adapting white is computed by
//! exactly the same code as that of any other stimulus.
//!
//! # Forward
//!
//! ```text
//! XYZ -> sharpened_response -> adapted_response -> hpe_fundamentals
//!     -> compress_response -> achromatic_response -> lightness
//!                          -> opponent -> (hue_angle) -> eccentricity
//!                          -> preliminary_magnitude -> chroma
//! ```
//!
//! # Reverse
//!
//! ```text
//! (J, C, h) -> achromatic_from_lightness -> p2
//!           -> magnitude_from_chroma -> opponent_from_hue
//!           -> response_from_opponent -> expand_response
//!           -> unadapted_response -> tristimulus
//! ```

use cam_math::{Vec3, CAT02, CAT02_INV, CAT02_TO_HPE, HPE_TO_CAT02};

/// Exponent of the post-adaptation power law.
const COMPRESSION_EXPONENT: f64 = 0.42;

/// Half-saturation constant of the post-adaptation nonlinearity.
const COMPRESSION_SATURATION: f64 = 27.13;

/// Offset added to every compressed channel; also the noise floor.
const COMPRESSION_OFFSET: f64 = 0.1;

/// `p3` of the inverse model, the blue weight of the magnitude denominator.
const BLUE_WEIGHT: f64 = 1.05;

// ============================================================================
// Forward stages
// ============================================================================

/// Step 1: XYZ -> sharpened cone response.
#[inline]
pub fn sharpened_response(xyz: Vec3) -> Vec3 {
    CAT02 * xyz
}

/// Step 2: per-channel von Kries scaling by `D_RGB`.
#[inline]
pub fn adapted_response(rgb: Vec3, d_rgb: Vec3) -> Vec3 {
    rgb * d_rgb
}

/// Step 3: adapted sharpened response -> HPE cone fundamentals.
#[inline]
pub fn hpe_fundamentals(rgb_c: Vec3) -> Vec3 {
    CAT02_TO_HPE * rgb_c
}

/// Step 4, one channel: post-adaptation response compression.
///
/// The sign branch is taken at `x = 0` while the offset of `0.1` is added
/// after mirroring, so the curve is odd about `(0, 0.1)`, not about the
/// origin: `compress(-x) = 0.2 - compress(x)`.
#[inline]
pub fn compress(x: f64, f_l: f64) -> f64 {
    if x >= 0.0 {
        let n = (f_l * x / 100.0).powf(COMPRESSION_EXPONENT);
        400.0 * n / (n + COMPRESSION_SATURATION) + COMPRESSION_OFFSET
    } else {
        let n = (-f_l * x / 100.0).powf(COMPRESSION_EXPONENT);
        -400.0 * n / (n + COMPRESSION_SATURATION) + COMPRESSION_OFFSET
    }
}

/// Step 4: compresses all three HPE channels.
#[inline]
pub fn compress_response(rgb_p: Vec3, f_l: f64) -> Vec3 {
    rgb_p.map(|x| compress(x, f_l))
}

/// Step 5: achromatic response `A`.
#[inline]
pub fn achromatic_response(rgb_a: Vec3, n_bb: f64) -> f64 {
    (2.0 * rgb_a.x + rgb_a.y + rgb_a.z / 20.0 - 0.305) * n_bb
}

/// Step 6: lightness `J` from the achromatic response.
#[inline]
pub fn lightness(a: f64, a_w: f64, c: f64, z: f64) -> f64 {
    100.0 * (a / a_w).powf(c * z)
}

/// Step 7: red-green `a` and yellow-blue `b` opponent values.
#[inline]
pub fn opponent(rgb_a: Vec3) -> (f64, f64) {
    let a = rgb_a.x + (-12.0 * rgb_a.y + rgb_a.z) / 11.0;
    let b = (rgb_a.x + rgb_a.y - 2.0 * rgb_a.z) / 9.0;
    (a, b)
}

/// Step 9: eccentricity factor, scaled by the induction factors.
///
/// Shared by both directions; `h` is in degrees.
#[inline]
pub fn eccentricity(h: f64, n_c: f64, n_cb: f64) -> f64 {
    (12500.0 / 13.0) * n_c * n_cb * ((h.to_radians() + 2.0).cos() + 3.8)
}

/// Step 10: preliminary magnitude `t`.
#[inline]
pub fn preliminary_magnitude(e: f64, a: f64, b: f64, rgb_a: Vec3) -> f64 {
    e * (a * a + b * b).sqrt() / (rgb_a.x + rgb_a.y + BLUE_WEIGHT * rgb_a.z)
}

/// Background-dependent chroma scale `(1.64 - 0.29^n)^0.73`.
#[inline]
pub fn chroma_scale(n: f64) -> f64 {
    (1.64 - 0.29_f64.powf(n)).powf(0.73)
}

/// Step 11: chroma `C`.
#[inline]
pub fn chroma(j: f64, t: f64, n: f64) -> f64 {
    t.signum() * t.abs().powf(0.9) * (j / 100.0).sqrt() * chroma_scale(n)
}

// ============================================================================
// Reverse stages
// ============================================================================

/// Achromatic response `A` from lightness.
#[inline]
pub fn achromatic_from_lightness(j: f64, a_w: f64, c: f64, z: f64) -> f64 {
    a_w * (j / 100.0).powf(1.0 / (c * z))
}

/// Preliminary magnitude `t` from lightness and chroma.
///
/// Zero when the chroma denominator vanishes (black).
#[inline]
pub fn magnitude_from_chroma(j: f64, chroma: f64, n: f64) -> f64 {
    let denom = (j / 100.0).sqrt() * chroma_scale(n);
    if denom == 0.0 {
        0.0
    } else {
        (chroma / denom).powf(1.0 / 0.9)
    }
}

/// `p2`, the achromatic term of the inverse opponent solve.
#[inline]
pub fn p2(a: f64, n_bb: f64) -> f64 {
    a / n_bb + 0.305
}

/// Solves for the opponent pair `(a, b)` given hue, eccentricity, `t`, `p2`.
///
/// Divides by whichever of `sin h` and `cos h` has the larger magnitude so
/// the divisor never approaches zero near the axes. Ties go to the sine
/// branch. Non-positive `t` is achromatic.
pub fn opponent_from_hue(h: f64, e: f64, t: f64, p2: f64) -> (f64, f64) {
    if t <= 0.0 {
        return (0.0, 0.0);
    }

    let h_rad = h.to_radians();
    let (sin_h, cos_h) = h_rad.sin_cos();
    let p1 = e * (1.0 / t);
    let numerator = p2 * (2.0 + BLUE_WEIGHT) * (460.0 / 1403.0);

    if solves_by_sine(sin_h, cos_h) {
        opponent_by_sine(sin_h, cos_h, p1, numerator)
    } else {
        opponent_by_cosine(sin_h, cos_h, p1, numerator)
    }
}

/// Branch rule of [`opponent_from_hue`]: sine unless cosine is strictly larger.
#[inline]
fn solves_by_sine(sin_h: f64, cos_h: f64) -> bool {
    sin_h.abs() >= cos_h.abs()
}

fn opponent_by_sine(sin_h: f64, cos_h: f64, p1: f64, numerator: f64) -> (f64, f64) {
    let p3 = BLUE_WEIGHT;
    let cot = cos_h / sin_h;
    let p4 = p1 / sin_h;
    let b = numerator
        / (p4 + (2.0 + p3) * (220.0 / 1403.0) * cot - (27.0 / 1403.0) + p3 * (6300.0 / 1403.0));
    (b * cot, b)
}

fn opponent_by_cosine(sin_h: f64, cos_h: f64, p1: f64, numerator: f64) -> (f64, f64) {
    let p3 = BLUE_WEIGHT;
    let tan = sin_h / cos_h;
    let p5 = p1 / cos_h;
    let a = numerator
        / (p5 + (2.0 + p3) * (220.0 / 1403.0) - (27.0 / 1403.0 - p3 * 6300.0 / 1403.0) * tan);
    (a, a * tan)
}

/// Compressed cone response from `p2` and the opponent pair.
#[inline]
pub fn response_from_opponent(a: f64, b: f64, p2: f64) -> Vec3 {
    let achromatic = 460.0 / 1403.0 * p2;
    Vec3::new(
        achromatic + 451.0 / 1403.0 * a + 288.0 / 1403.0 * b,
        achromatic - 891.0 / 1403.0 * a - 261.0 / 1403.0 * b,
        achromatic - 220.0 / 1403.0 * a - 6300.0 / 1403.0 * b,
    )
}

/// Inverse of [`compress`] for one channel.
///
/// Centred on the offset: `0.1` maps to exactly zero, values above and
/// below go through the positive and negative branch.
#[inline]
pub fn expand(v: f64, f_l: f64) -> f64 {
    let n = v - COMPRESSION_OFFSET;
    if n == 0.0 {
        return 0.0;
    }
    let k = n.abs();
    let x = 100.0 / f_l * ((COMPRESSION_SATURATION * k) / (400.0 - k)).powf(1.0 / COMPRESSION_EXPONENT);
    if n < 0.0 { -x } else { x }
}

/// Inverts the compression on all three channels.
#[inline]
pub fn expand_response(rgb_a: Vec3, f_l: f64) -> Vec3 {
    rgb_a.map(|v| expand(v, f_l))
}

/// HPE fundamentals -> unadapted sharpened response.
#[inline]
pub fn unadapted_response(rgb_p: Vec3, d_rgb: Vec3) -> Vec3 {
    (HPE_TO_CAT02 * rgb_p) / d_rgb
}

/// Sharpened cone response -> XYZ.
#[inline]
pub fn tristimulus(rgb: Vec3) -> Vec3 {
    CAT02_INV * rgb
}
