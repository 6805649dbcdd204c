//! Built-in metronome cue definitions.
//!
//! A cue pairs a tone with the file name it is emitted under. The
//! metronome plays the bip on beat 1 of each bar and the click on the
//! remaining beats, so the bip sits lower and rings longer.

use std::path::{Path, PathBuf};

use crate::audio::write_wav;
use crate::error::Result;
use crate::synth::{render_tone, ToneSpec};

/// A named cue tone and its output file name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    /// Short cue name used in status output.
    pub name: &'static str,

    /// File name the cue is written under, inside the output directory.
    pub file_name: &'static str,

    /// Tone parameters for the cue.
    pub tone: ToneSpec,
}

impl Cue {
    /// Creates the downbeat cue: 880 Hz for 0.1s.
    pub fn bip() -> Self {
        Self {
            name: "bip",
            file_name: "bip.wav",
            tone: ToneSpec::new(880.0, 0.1),
        }
    }

    /// Creates the offbeat cue: 2000 Hz for 0.03s.
    pub fn click() -> Self {
        Self {
            name: "click",
            file_name: "click.wav",
            tone: ToneSpec::new(2000.0, 0.03),
        }
    }

    /// Returns all built-in cues in generation order.
    pub fn builtin() -> Vec<Cue> {
        vec![Cue::bip(), Cue::click()]
    }
}

/// Renders a cue and writes it into the output directory.
///
/// The cue's tone is validated, rendered to 16-bit PCM, and serialized
/// as `out_dir/<file_name>`, overwriting any existing file.
///
/// # Arguments
///
/// * `cue` - The cue to render
/// * `out_dir` - Directory the WAV file is written into
///
/// # Returns
///
/// The full path of the written file.
pub fn write_cue(cue: &Cue, out_dir: &Path) -> Result<PathBuf> {
    let samples = render_tone(&cue.tone)?;
    let path = out_dir.join(cue.file_name);
    write_wav(&samples, &path, cue.tone.sample_rate)?;
    Ok(path)
}
