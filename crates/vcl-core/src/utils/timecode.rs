// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Frame-accurate video timecodes.
//!
//! A [`Timecode`] counts frames at a frame rate fixed by its type, so
//! `Timecode<25>` and `Timecode<30>` cannot be mixed up by accident.
//! Converting between rates is exact integer arithmetic, floored.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;

/// A timecode counting whole frames at `FPS` frames per second.
///
/// # Examples
///
/// ```rust
/// # use vcl_core::utils::timecode::{Timecode25fps, Timecode30fps};
/// let mut tc = Timecode25fps::from_seconds(62.601);
/// assert_eq!(tc.to_string(), "00:01:02:15");
///
/// tc += 12;
/// assert_eq!(tc.to_string(), "00:01:03:02");
///
/// let ntsc: Timecode30fps = (tc - 12).convert();
/// assert_eq!(ntsc.to_string(), "00:01:02:18");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timecode<const FPS: u32> {
    frames: u64,
}

/// Cinema frame rate.
pub type Timecode24fps = Timecode<24>;
/// PAL frame rate.
pub type Timecode25fps = Timecode<25>;
/// NTSC frame rate, without drop-frame compensation.
pub type Timecode30fps = Timecode<30>;
/// High frame rate.
pub type Timecode60fps = Timecode<60>;

impl<const FPS: u32> Timecode<FPS> {
    /// Frames per second of this timecode type.
    pub const FRAME_RATE: u32 = FPS;

    /// Creates a timecode from a frame count.
    #[inline]
    pub const fn from_frames(frames: u64) -> Self {
        const { assert!(FPS > 0, "a timecode needs a positive frame rate") };
        Self { frames }
    }

    /// Creates a timecode from a duration in seconds, floored to a frame.
    ///
    /// Negative durations and NaN map to zero.
    #[inline]
    pub fn from_seconds(seconds: f64) -> Self {
        Self::from_frames((seconds * FPS as f64).floor().max(0.0) as u64)
    }

    /// Creates a timecode from hours, minutes, seconds and frames.
    pub fn from_hmsf(hours: u64, minutes: u64, seconds: u64, frames: u64) -> Self {
        let total_seconds = hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds);
        Self::from_frames(
            total_seconds
                .saturating_mul(FPS as u64)
                .saturating_add(frames),
        )
    }

    /// Returns the frame count.
    #[inline]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns the duration in seconds.
    #[inline]
    pub fn seconds(&self) -> f64 {
        self.frames as f64 / FPS as f64
    }

    /// Returns the whole hours.
    #[inline]
    pub const fn hours_field(&self) -> u64 {
        self.whole_seconds() / 3600
    }

    /// Returns the minutes within the hour.
    #[inline]
    pub const fn minutes_field(&self) -> u64 {
        (self.whole_seconds() / 60) % 60
    }

    /// Returns the seconds within the minute.
    #[inline]
    pub const fn seconds_field(&self) -> u64 {
        self.whole_seconds() % 60
    }

    /// Returns the frame within the second.
    #[inline]
    pub const fn frames_field(&self) -> u64 {
        self.frames % FPS as u64
    }

    #[inline]
    const fn whole_seconds(&self) -> u64 {
        self.frames / FPS as u64
    }

    /// Converts to another frame rate, flooring to a whole frame.
    ///
    /// ```rust
    /// # use vcl_core::utils::timecode::{Timecode24fps, Timecode25fps};
    /// let pal = Timecode25fps::from_frames(1565);
    /// let cinema: Timecode24fps = pal.convert();
    /// assert_eq!(cinema.frames(), 1502);
    /// ```
    #[inline]
    pub fn convert<const OTHER: u32>(&self) -> Timecode<OTHER> {
        let frames = self.frames as u128 * OTHER as u128 / FPS as u128;
        Timecode::from_frames(u64::try_from(frames).unwrap_or(u64::MAX))
    }

    /// Returns the time elapsed since `earlier`, expressed at this rate.
    ///
    /// Saturates at zero when `earlier` is actually later.
    pub fn since<const OTHER: u32>(&self, earlier: &Timecode<OTHER>) -> Self {
        let lhs = self.frames as u128 * OTHER as u128;
        let rhs = earlier.frames as u128 * FPS as u128;
        let frames = lhs.saturating_sub(rhs) / OTHER as u128;
        Self::from_frames(u64::try_from(frames).unwrap_or(u64::MAX))
    }
}

impl<const FPS: u32> AddAssign<u64> for Timecode<FPS> {
    #[inline]
    fn add_assign(&mut self, frames: u64) {
        self.frames = self.frames.saturating_add(frames);
    }
}

impl<const FPS: u32> Add<u64> for Timecode<FPS> {
    type Output = Self;

    #[inline]
    fn add(mut self, frames: u64) -> Self {
        self += frames;
        self
    }
}

impl<const FPS: u32> SubAssign<u64> for Timecode<FPS> {
    #[inline]
    fn sub_assign(&mut self, frames: u64) {
        self.frames = self.frames.saturating_sub(frames);
    }
}

impl<const FPS: u32> Sub<u64> for Timecode<FPS> {
    type Output = Self;

    #[inline]
    fn sub(mut self, frames: u64) -> Self {
        self -= frames;
        self
    }
}

impl<const FPS: u32, const OTHER: u32> Sub<Timecode<OTHER>> for Timecode<FPS> {
    type Output = Self;

    #[inline]
    fn sub(self, earlier: Timecode<OTHER>) -> Self {
        self.since(&earlier)
    }
}

impl<const FPS: u32> fmt::Display for Timecode<FPS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours_field(),
            self.minutes_field(),
            self.seconds_field(),
            self.frames_field()
        )
    }
}

/// Error returned when parsing a `HH:MM:SS:FF` timecode fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTimecodeError {
    /// The text does not have exactly four `:`-separated fields.
    #[error("expected 4 fields separated by ':', found {0}")]
    FieldCount(usize),
    /// A field is not an unsigned integer.
    #[error("field {field} is not an unsigned integer: {text:?}")]
    InvalidField { field: usize, text: String },
    /// Minutes or seconds are 60 or more.
    #[error("{name} must be below 60, found {value}")]
    OutOfRange { name: &'static str, value: u64 },
    /// The frame field is not below the frame rate.
    #[error("frame {frame} does not exist at {fps} frames per second")]
    FrameOutOfRange { frame: u64, fps: u32 },
}

impl<const FPS: u32> FromStr for Timecode<FPS> {
    type Err = ParseTimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 4 {
            return Err(ParseTimecodeError::FieldCount(parts.len()));
        }

        let mut fields = [0_u64; 4];
        for (field, (slot, text)) in fields.iter_mut().zip(&parts).enumerate() {
            *slot = text.parse().map_err(|_| ParseTimecodeError::InvalidField {
                field,
                text: text.to_string(),
            })?;
        }

        let [hours, minutes, seconds, frame] = fields;
        if minutes >= 60 {
            return Err(ParseTimecodeError::OutOfRange {
                name: "minutes",
                value: minutes,
            });
        }
        if seconds >= 60 {
            return Err(ParseTimecodeError::OutOfRange {
                name: "seconds",
                value: seconds,
            });
        }
        if frame >= FPS as u64 {
            return Err(ParseTimecodeError::FrameOutOfRange { frame, fps: FPS });
        }
        Ok(Self::from_hmsf(hours, minutes, seconds, frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seconds() {
        assert_eq!(Timecode25fps::from_seconds(62.0).to_string(), "00:01:02:00");
        assert_eq!(Timecode25fps::from_seconds(62.601).to_string(), "00:01:02:15");
        assert_eq!(Timecode25fps::from_seconds(-3.0).frames(), 0);
        assert_eq!(Timecode25fps::from_seconds(f64::NAN).frames(), 0);
    }

    #[test]
    fn test_fields() {
        let tc = Timecode24fps::from_hmsf(1, 2, 3, 4);
        assert_eq!(tc.hours_field(), 1);
        assert_eq!(tc.minutes_field(), 2);
        assert_eq!(tc.seconds_field(), 3);
        assert_eq!(tc.frames_field(), 4);
        assert_eq!(tc.frames(), (3600 + 120 + 3) * 24 + 4);
        assert_eq!(tc.to_string(), "01:02:03:04");
    }

    #[test]
    fn test_frame_arithmetic_saturates() {
        let mut tc = Timecode25fps::from_frames(1565);
        tc += 12;
        assert_eq!(tc.to_string(), "00:01:03:02");
        tc -= 1;
        assert_eq!(tc.frames(), 1576);
        assert_eq!((tc - 10_000).frames(), 0);
        assert_eq!((tc + 1).frames(), 1577);
    }

    #[test]
    fn test_convert_between_rates() {
        let pal = Timecode25fps::from_frames(1565);
        assert_eq!(pal.convert::<30>().to_string(), "00:01:02:18");
        assert_eq!(pal.convert::<24>().to_string(), "00:01:02:14");
        assert_eq!(pal.convert::<25>(), pal);
    }

    #[test]
    fn test_difference_across_rates() {
        let pal = Timecode25fps::from_frames(1577);
        let cinema = Timecode24fps::from_frames(1502);
        assert_eq!((pal - cinema).to_string(), "00:00:00:12");
        assert_eq!(cinema.since(&pal).frames(), 0);
    }

    #[test]
    fn test_ordering() {
        let a = Timecode30fps::from_frames(10);
        let b = Timecode30fps::from_frames(11);
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_seconds() {
        assert_eq!(Timecode60fps::from_frames(90).seconds(), 1.5);
    }

    #[test]
    fn test_parse() {
        let tc: Timecode25fps = "00:01:02:15".parse().unwrap();
        assert_eq!(tc.frames(), 1565);
        assert_eq!(tc.to_string(), "00:01:02:15");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "00:01:02".parse::<Timecode25fps>(),
            Err(ParseTimecodeError::FieldCount(3))
        );
        assert_eq!(
            "00:xx:02:00".parse::<Timecode25fps>(),
            Err(ParseTimecodeError::InvalidField {
                field: 1,
                text: "xx".to_string()
            })
        );
        assert_eq!(
            "00:61:02:00".parse::<Timecode25fps>(),
            Err(ParseTimecodeError::OutOfRange {
                name: "minutes",
                value: 61
            })
        );
        assert_eq!(
            "00:01:02:25".parse::<Timecode25fps>(),
            Err(ParseTimecodeError::FrameOutOfRange { frame: 25, fps: 25 })
        );
    }
}
