//! Carrier waveform synthesis.
//!
//! The carrier is evaluated as a pure function of absolute time, not of an
//! accumulated phase: callers that process audio in chunks and restart time
//! at zero per chunk get a phase-discontinuous carrier at chunk boundaries.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

pub(crate) const TWO_PI: f64 = 2.0 * PI;

/// Carrier waveform shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine.
    Sine,
    /// Rising sawtooth centered on zero.
    Saw,
    /// Square with 50% duty cycle.
    Square,
    /// Symmetric triangle.
    Triangle,
}

impl FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sine" => Ok(Waveform::Sine),
            "saw" => Ok(Waveform::Saw),
            "square" => Ok(Waveform::Square),
            "triangle" => Ok(Waveform::Triangle),
            other => Err(format!(
                "unknown waveform '{}' (expected sine, saw, square, or triangle)",
                other
            )),
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Waveform::Sine => "sine",
            Waveform::Saw => "saw",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

/// Sine carrier: `sin(2*PI*f*t)`.
pub fn sine(frequency: f64, t: f64) -> f64 {
    (TWO_PI * frequency * t).sin()
}

/// Sawtooth carrier: `2*(f*t - floor(f*t + 0.5))`, in [-1, 1).
pub fn sawtooth(frequency: f64, t: f64) -> f64 {
    let x = frequency * t;
    2.0 * (x - (x + 0.5).floor())
}

/// Square carrier: +1 in the second half of each period, -1 otherwise.
///
/// Boundary policy: `t mod period` must exceed `period / 2` strictly, so
/// `t = 0` yields -1.
pub fn square(frequency: f64, t: f64) -> f64 {
    let period = 1.0 / frequency;
    if t % period > period / 2.0 {
        1.0
    } else {
        -1.0
    }
}

/// Triangle carrier: `2*|2*(f*t - floor(f*t + 0.5))| - 1`, in [-1, 1].
pub fn triangle(frequency: f64, t: f64) -> f64 {
    let x = frequency * t;
    2.0 * (2.0 * (x - (x + 0.5).floor())).abs() - 1.0
}

/// Evaluates the carrier of the given shape at absolute time `t` seconds.
pub fn carrier(waveform: Waveform, frequency: f64, t: f64) -> f64 {
    match waveform {
        Waveform::Sine => sine(frequency, t),
        Waveform::Saw => sawtooth(frequency, t),
        Waveform::Square => square(frequency, t),
        Waveform::Triangle => triangle(frequency, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_sine_known_points() {
        assert!(sine(1.0, 0.0).abs() < EPS);
        assert!((sine(1.0, 0.25) - 1.0).abs() < EPS);
        assert!(sine(1.0, 0.5).abs() < EPS);
        assert!((sine(1.0, 0.75) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_square_known_points() {
        // fmod(0, 1) > 0.5 is false, so the first half of the period is -1.
        assert_eq!(square(1.0, 0.0), -1.0);
        assert_eq!(square(1.0, 0.25), -1.0);
        assert_eq!(square(1.0, 0.5), -1.0);
        assert_eq!(square(1.0, 0.75), 1.0);
        assert_eq!(square(1.0, 1.0), -1.0);
    }

    #[test]
    fn test_sawtooth_known_points() {
        assert!(sawtooth(1.0, 0.0).abs() < EPS);
        assert!((sawtooth(1.0, 0.25) - 0.5).abs() < EPS);
        // The ramp wraps at the half-period point.
        assert!((sawtooth(1.0, 0.5) + 1.0).abs() < EPS);
        assert!((sawtooth(1.0, 0.75) + 0.5).abs() < EPS);
    }

    #[test]
    fn test_triangle_known_points() {
        assert!((triangle(1.0, 0.0) + 1.0).abs() < EPS);
        assert!(triangle(1.0, 0.25).abs() < EPS);
        assert!((triangle(1.0, 0.5) - 1.0).abs() < EPS);
        assert!(triangle(1.0, 0.75).abs() < EPS);
    }

    #[test]
    fn test_carrier_is_periodic() {
        for &waveform in &[
            Waveform::Sine,
            Waveform::Saw,
            Waveform::Square,
            Waveform::Triangle,
        ] {
            for &t in &[0.0, 0.125, 0.3, 0.6] {
                let a = carrier(waveform, 2.0, t);
                let b = carrier(waveform, 2.0, t + 0.5);
                assert!(
                    (a - b).abs() < 1e-9,
                    "{} carrier not periodic at t={}",
                    waveform,
                    t
                );
            }
        }
    }

    #[test]
    fn test_carrier_dispatch_matches_shape_functions() {
        let t = 0.123;
        let f = 7.0;
        assert_eq!(carrier(Waveform::Sine, f, t), sine(f, t));
        assert_eq!(carrier(Waveform::Saw, f, t), sawtooth(f, t));
        assert_eq!(carrier(Waveform::Square, f, t), square(f, t));
        assert_eq!(carrier(Waveform::Triangle, f, t), triangle(f, t));
    }

    #[test]
    fn test_waveform_from_str() {
        assert_eq!("sine".parse::<Waveform>().unwrap(), Waveform::Sine);
        assert_eq!("SAW".parse::<Waveform>().unwrap(), Waveform::Saw);
        assert_eq!("Square".parse::<Waveform>().unwrap(), Waveform::Square);
        assert_eq!("triangle".parse::<Waveform>().unwrap(), Waveform::Triangle);
        assert!("pulse".parse::<Waveform>().is_err());
    }

    #[test]
    fn test_waveform_display_round_trips() {
        for &waveform in &[
            Waveform::Sine,
            Waveform::Saw,
            Waveform::Square,
            Waveform::Triangle,
        ] {
            let parsed: Waveform = waveform.to_string().parse().unwrap();
            assert_eq!(parsed, waveform);
        }
    }
}
