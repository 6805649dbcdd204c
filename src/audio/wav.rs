//! WAV file writer for cue output.
//!
//! Writes PCM samples to WAV format using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{CueError, Result};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Sample width in bits (signed 16-bit integer PCM).
pub const BITS_PER_SAMPLE: u16 = 16;

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes PCM samples to a WAV file.
///
/// The target file is created, or truncated if it already exists, and
/// finalized before returning so the header's data length is correct.
///
/// # Arguments
///
/// * `samples` - Audio samples as signed 16-bit values
/// * `path` - Output file path
/// * `sample_rate` - Sample rate in Hz (44100 for the built-in cues)
///
/// # Example
///
/// ```no_run
/// use cuegen::audio::write_wav;
///
/// let samples = vec![0i16, 16384, -16384, 0];
/// write_wav(&samples, std::path::Path::new("cue.wav"), 44100)?;
/// # Ok::<(), cuegen::error::CueError>(())
/// ```
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    let mut writer = WavWriter::create(path, wav_spec(sample_rate)).map_err(|e| {
        CueError::with_source(
            crate::error::ErrorCode::WavWriteFailed,
            format!("Failed to create WAV file {}", path.display()),
            e,
        )
    })?;

    for sample in samples {
        writer
            .write_sample(*sample)
            .map_err(|e| CueError::wav_write_failed(format!("Failed to write sample: {}", e)))?;
    }

    writer
        .finalize()
        .map_err(|e| CueError::wav_write_failed(format!("Failed to finalize WAV file: {}", e)))?;

    Ok(())
}

/// Writes PCM samples to an in-memory WAV buffer.
///
/// Returns the WAV file contents as a byte vector.
pub fn write_wav_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let cursor = std::io::Cursor::new(&mut buffer);
    let buf_writer = std::io::BufWriter::new(cursor);

    {
        let mut writer = WavWriter::new(buf_writer, wav_spec(sample_rate)).map_err(|e| {
            CueError::wav_write_failed(format!("Failed to create WAV writer: {}", e))
        })?;

        for sample in samples {
            writer.write_sample(*sample).map_err(|e| {
                CueError::wav_write_failed(format!("Failed to write sample: {}", e))
            })?;
        }

        writer.finalize().map_err(|e| {
            CueError::wav_write_failed(format!("Failed to finalize WAV buffer: {}", e))
        })?;
    }

    Ok(buffer)
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f64 {
    sample_count as f64 / sample_rate as f64
}
