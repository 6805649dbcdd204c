//! Pure sine tone synthesis.
//!
//! Renders a [`ToneSpec`] into a buffer of signed 16-bit PCM samples.
//! Rendering is deterministic and has no side effects; WAV emission
//! lives in the [`crate::audio`] module.

use std::f64::consts::PI;

use crate::error::{CueError, Result};

/// Default sample rate for cue tones (CD quality, 44.1kHz).
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default volume as a fraction of full scale.
pub const DEFAULT_VOLUME: f64 = 0.5;

/// Maximum magnitude of a signed 16-bit sample.
const FULL_SCALE: f64 = i16::MAX as f64;

/// Parameters of a single sine tone.
///
/// Constructed once per cue and treated as immutable. All arithmetic is
/// f64 so that `sample_count` reproduces float64 results exactly (at
/// 44100 Hz a 0.03s tone must come out to 1323 samples, which f32
/// arithmetic misses by one).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Tone frequency in Hz. Zero is allowed and renders silence.
    pub frequency: f64,

    /// Tone duration in seconds. Must be greater than zero.
    pub duration: f64,

    /// Volume as a fraction of full scale, in [0.0, 1.0].
    pub volume: f64,

    /// Sample rate in samples per second.
    pub sample_rate: u32,
}

impl ToneSpec {
    /// Creates a ToneSpec with the default volume and sample rate.
    pub fn new(frequency: f64, duration: f64) -> Self {
        Self {
            frequency,
            duration,
            volume: DEFAULT_VOLUME,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Validates all parameters, failing fast before any samples are
    /// rendered.
    ///
    /// Frequency 0 passes validation: `sin(0) = 0` for every time point,
    /// so it renders a well-formed all-silent buffer rather than an
    /// error.
    pub fn validate(&self) -> Result<()> {
        if !self.frequency.is_finite() || self.frequency < 0.0 {
            return Err(CueError::invalid_frequency(self.frequency));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(CueError::invalid_duration(self.duration));
        }
        if !self.volume.is_finite() || !(0.0..=1.0).contains(&self.volume) {
            return Err(CueError::invalid_volume(self.volume));
        }
        if self.sample_rate == 0 {
            return Err(CueError::invalid_sample_rate(self.sample_rate));
        }
        Ok(())
    }

    /// Number of samples the tone renders to: `floor(sample_rate * duration)`.
    ///
    /// The time interval is half-open, `[0, duration)`, so the endpoint
    /// sample is excluded and the count is exact.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration) as usize
    }
}

/// Renders a tone into signed 16-bit PCM samples.
///
/// Sample i is `round(sin(2π·f·tᵢ) · volume · 32767)` with
/// `tᵢ = i / sample_rate`. Rounding is half-away-from-zero
/// ([`f64::round`]); the result is clamped to the i16 range since
/// floating-point rounding can overshoot full scale by one unit.
///
/// # Arguments
///
/// * `spec` - Tone parameters; validated before rendering
///
/// # Returns
///
/// A vector of exactly `spec.sample_count()` samples.
///
/// # Example
///
/// ```
/// use cuegen::synth::{render_tone, ToneSpec};
///
/// let samples = render_tone(&ToneSpec::new(880.0, 0.1)).unwrap();
/// assert_eq!(samples.len(), 4410);
/// ```
pub fn render_tone(spec: &ToneSpec) -> Result<Vec<i16>> {
    spec.validate()?;

    let sample_rate = spec.sample_rate as f64;
    let amplitude = spec.volume * FULL_SCALE;

    Ok((0..spec.sample_count())
        .map(|i| {
            let t = i as f64 / sample_rate;
            let value = (2.0 * PI * spec.frequency * t).sin() * amplitude;
            value.round().clamp(i16::MIN as f64, i16::MAX as f64) as i16
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_formula() {
        // bip: 0.1s at 44.1kHz
        assert_eq!(ToneSpec::new(880.0, 0.1).sample_count(), 4410);
        // click: 0.03s at 44.1kHz
        assert_eq!(ToneSpec::new(2000.0, 0.03).sample_count(), 1323);
        // one second renders exactly the sample rate
        assert_eq!(ToneSpec::new(440.0, 1.0).sample_count(), 44100);
    }

    #[test]
    fn rendered_length_matches_sample_count() {
        let spec = ToneSpec::new(2000.0, 0.03);
        let samples = render_tone(&spec).unwrap();
        assert_eq!(samples.len(), spec.sample_count());
    }

    #[test]
    fn defaults_applied() {
        let spec = ToneSpec::new(880.0, 0.1);
        assert_eq!(spec.volume, DEFAULT_VOLUME);
        assert_eq!(spec.sample_rate, DEFAULT_SAMPLE_RATE);
    }

    #[test]
    fn zero_volume_renders_silence() {
        let spec = ToneSpec {
            volume: 0.0,
            ..ToneSpec::new(880.0, 0.1)
        };
        let samples = render_tone(&spec).unwrap();
        assert!(samples.iter().all(|&s| s == 0));
    }

    #[test]
    fn zero_frequency_renders_silence() {
        // sin(0) = 0 for all t, even at full volume
        let spec = ToneSpec {
            volume: 1.0,
            ..ToneSpec::new(0.0, 0.1)
        };
        let samples = render_tone(&spec).unwrap();
        assert!(samples.iter().all(|&s| s == 0));
    }

    #[test]
    fn full_volume_stays_in_i16_range() {
        let spec = ToneSpec {
            volume: 1.0,
            ..ToneSpec::new(880.0, 0.1)
        };
        let samples = render_tone(&spec).unwrap();
        assert!(samples
            .iter()
            .all(|&s| (i16::MIN..=i16::MAX).contains(&s)));
    }

    #[test]
    fn bip_waveform_shape() {
        // 880 Hz at 44.1kHz has a period of ~50.1 samples. Sample 13
        // sits at the first quarter period and should be close to peak
        // magnitude at half volume; sample 25 sits at the half period
        // and should be back near zero.
        let samples = render_tone(&ToneSpec::new(880.0, 0.1)).unwrap();
        assert_eq!(samples.len(), 4410);
        assert_eq!(samples[0], 0);

        let expected_peak = 0.5 * 32767.0;
        let quarter = f64::from(samples[13]).abs();
        assert!(
            quarter > expected_peak * 0.95,
            "sample[13] = {} not near peak {}",
            samples[13],
            expected_peak
        );

        let half = f64::from(samples[25]).abs();
        assert!(
            half < expected_peak * 0.05,
            "sample[25] = {} not near zero crossing",
            samples[25]
        );
    }

    #[test]
    fn validate_rejects_negative_frequency() {
        let spec = ToneSpec::new(-880.0, 0.1);
        let err = render_tone(&spec).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidFrequency);
    }

    #[test]
    fn validate_rejects_bad_duration() {
        assert!(ToneSpec::new(880.0, 0.0).validate().is_err());
        assert!(ToneSpec::new(880.0, -1.0).validate().is_err());
        assert!(ToneSpec::new(880.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_volume() {
        let mut spec = ToneSpec::new(880.0, 0.1);
        spec.volume = 1.5;
        assert!(spec.validate().is_err());
        spec.volume = -0.1;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_sample_rate() {
        let mut spec = ToneSpec::new(880.0, 0.1);
        spec.sample_rate = 0;
        let err = spec.validate().unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidSampleRate);
    }
}
