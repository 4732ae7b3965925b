//! Appearance correlates and per-channel metadata.
//!
//! A [`Correlates`] vector has seven slots, each either a value or
//! explicitly absent. The forward transform fills all of them; the reverse
//! transform accepts any subset from which lightness, chroma and hue can be
//! derived.
//!
//! | Channel | Symbol | Range |
//! |---------|--------|-------|
//! | Lightness | J | 0 - 100 |
//! | Brightness | Q | 0 - 100 |
//! | Chroma | C | 0 - 120 |
//! | Colorfulness | M | 0 - 120 |
//! | Saturation | s | 0 - 120 |
//! | Hue composition | H | 0 - 400 |
//! | Hue angle | h | 0 - 360 |
//!
//! The ranges are nominal: brightness and the chromatic correlates of real
//! colors routinely exceed them and are never clamped.

use std::fmt;

/// One of the seven CIECAM02 correlates, in channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Correlate {
    /// Lightness `J`.
    Lightness,
    /// Brightness `Q`.
    Brightness,
    /// Chroma `C`.
    Chroma,
    /// Colorfulness `M`.
    Colorfulness,
    /// Saturation `s`.
    Saturation,
    /// Hue composition (quadrature) `H`.
    HueComposition,
    /// Hue angle `h`, degrees.
    HueAngle,
}

impl Correlate {
    /// All channels in index order.
    pub const ALL: [Correlate; 7] = [
        Correlate::Lightness,
        Correlate::Brightness,
        Correlate::Chroma,
        Correlate::Colorfulness,
        Correlate::Saturation,
        Correlate::HueComposition,
        Correlate::HueAngle,
    ];

    /// Channel index, 0 for J through 6 for h.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Channel for an index, `None` past 6.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() { Some(Self::ALL[index]) } else { None }
    }

    /// Conventional symbol (`"J"`, `"Q"`, `"C"`, `"M"`, `"s"`, `"H"`, `"h"`).
    pub const fn symbol(self) -> &'static str {
        match self {
            Correlate::Lightness => "J",
            Correlate::Brightness => "Q",
            Correlate::Chroma => "C",
            Correlate::Colorfulness => "M",
            Correlate::Saturation => "s",
            Correlate::HueComposition => "H",
            Correlate::HueAngle => "h",
        }
    }

    /// Descriptive name.
    pub const fn name(self) -> &'static str {
        match self {
            Correlate::Lightness => "lightness",
            Correlate::Brightness => "brightness",
            Correlate::Chroma => "chroma",
            Correlate::Colorfulness => "colorfulness",
            Correlate::Saturation => "saturation",
            Correlate::HueComposition => "hue composition",
            Correlate::HueAngle => "hue angle",
        }
    }

    /// Nominal minimum; zero for every channel.
    #[inline]
    pub const fn min_value(self) -> f64 {
        0.0
    }

    /// Nominal maximum.
    pub const fn max_value(self) -> f64 {
        match self {
            Correlate::Lightness | Correlate::Brightness => 100.0,
            Correlate::Chroma | Correlate::Colorfulness | Correlate::Saturation => 120.0,
            Correlate::HueComposition => 400.0,
            Correlate::HueAngle => 360.0,
        }
    }
}

impl fmt::Display for Correlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A CIECAM02 correlate vector with optional slots.
///
/// # Example
///
/// ```rust
/// use cam_core::{Correlate, Correlates};
///
/// let mut c = Correlates::from_jch(50.0, 20.0, 140.0);
/// assert_eq!(c.get(Correlate::Chroma), Some(20.0));
/// assert_eq!(c.brightness, None);
///
/// c.set(Correlate::Brightness, Some(120.0));
/// assert_eq!(c.brightness, Some(120.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Correlates {
    /// Lightness `J`.
    pub lightness: Option<f64>,
    /// Brightness `Q`.
    pub brightness: Option<f64>,
    /// Chroma `C`.
    pub chroma: Option<f64>,
    /// Colorfulness `M`.
    pub colorfulness: Option<f64>,
    /// Saturation `s`.
    pub saturation: Option<f64>,
    /// Hue composition `H`.
    pub hue_composition: Option<f64>,
    /// Hue angle `h` in degrees.
    pub hue_angle: Option<f64>,
}

impl Correlates {
    /// All slots absent.
    pub const EMPTY: Self = Self {
        lightness: None,
        brightness: None,
        chroma: None,
        colorfulness: None,
        saturation: None,
        hue_composition: None,
        hue_angle: None,
    };

    /// Lightness, chroma and hue angle; everything else absent.
    pub const fn from_jch(j: f64, c: f64, h: f64) -> Self {
        Self {
            lightness: Some(j),
            chroma: Some(c),
            hue_angle: Some(h),
            ..Self::EMPTY
        }
    }

    /// Reads one slot.
    #[inline]
    pub fn get(&self, channel: Correlate) -> Option<f64> {
        match channel {
            Correlate::Lightness => self.lightness,
            Correlate::Brightness => self.brightness,
            Correlate::Chroma => self.chroma,
            Correlate::Colorfulness => self.colorfulness,
            Correlate::Saturation => self.saturation,
            Correlate::HueComposition => self.hue_composition,
            Correlate::HueAngle => self.hue_angle,
        }
    }

    /// Writes one slot.
    #[inline]
    pub fn set(&mut self, channel: Correlate, value: Option<f64>) {
        *self.slot_mut(channel) = value;
    }

    /// Mutable access to one slot.
    pub fn slot_mut(&mut self, channel: Correlate) -> &mut Option<f64> {
        match channel {
            Correlate::Lightness => &mut self.lightness,
            Correlate::Brightness => &mut self.brightness,
            Correlate::Chroma => &mut self.chroma,
            Correlate::Colorfulness => &mut self.colorfulness,
            Correlate::Saturation => &mut self.saturation,
            Correlate::HueComposition => &mut self.hue_composition,
            Correlate::HueAngle => &mut self.hue_angle,
        }
    }

    /// Returns a copy with `channel` set to `value`.
    #[must_use]
    pub fn with(mut self, channel: Correlate, value: f64) -> Self {
        self.set(channel, Some(value));
        self
    }

    /// True if every slot is present.
    pub fn is_complete(&self) -> bool {
        self.to_array().iter().all(Option::is_some)
    }

    /// Channels whose value lies outside `[min - tolerance, max + tolerance]`.
    ///
    /// Absent slots are never out of range.
    pub fn out_of_range(&self, tolerance: f64) -> Vec<Correlate> {
        Correlate::ALL
            .into_iter()
            .filter(|&ch| {
                self.get(ch).is_some_and(|v| {
                    !(v >= ch.min_value() - tolerance && v <= ch.max_value() + tolerance)
                })
            })
            .collect()
    }

    /// True if no present slot is outside its nominal range by more than
    /// `tolerance`.
    pub fn is_in_range(&self, tolerance: f64) -> bool {
        self.out_of_range(tolerance).is_empty()
    }

    /// Slots in channel order J, Q, C, M, s, H, h.
    pub const fn to_array(&self) -> [Option<f64>; 7] {
        [
            self.lightness,
            self.brightness,
            self.chroma,
            self.colorfulness,
            self.saturation,
            self.hue_composition,
            self.hue_angle,
        ]
    }

    /// Builds from slots in channel order J, Q, C, M, s, H, h.
    pub const fn from_array(a: [Option<f64>; 7]) -> Self {
        Self {
            lightness: a[0],
            brightness: a[1],
            chroma: a[2],
            colorfulness: a[3],
            saturation: a[4],
            hue_composition: a[5],
            hue_angle: a[6],
        }
    }
}

impl From<[Option<f64>; 7]> for Correlates {
    fn from(a: [Option<f64>; 7]) -> Self {
        Self::from_array(a)
    }
}

impl From<Correlates> for [Option<f64>; 7] {
    fn from(c: Correlates) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Correlates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for ch in Correlate::ALL {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            match self.get(ch) {
                Some(v) => write!(f, "{}={:.4}", ch.symbol(), v)?,
                None => write!(f, "{}=-", ch.symbol())?,
            }
        }
        Ok(())
    }
}
