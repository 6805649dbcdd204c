//! cuegen: generates the metronome cue WAV files.
//!
//! Writes the built-in bip and click cues into the selected output
//! directory and reports progress on stderr.

use cuegen::audio::samples_to_duration;
use cuegen::cli::Cli;
use cuegen::cues::{write_cue, Cue};
use cuegen::error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let out_dir = cli.output_dir();

    eprintln!("=== cuegen ===");
    eprintln!("Output directory: {}", out_dir.display());
    eprintln!();

    for cue in Cue::builtin() {
        eprintln!(
            "Generating {}: {} Hz for {}s at {} Hz",
            cue.name, cue.tone.frequency, cue.tone.duration, cue.tone.sample_rate
        );

        let path = write_cue(&cue, out_dir)?;

        eprintln!("  Samples: {}", cue.tone.sample_count());
        eprintln!(
            "  Audio duration: {:.3}s",
            samples_to_duration(cue.tone.sample_count(), cue.tone.sample_rate)
        );
        eprintln!("  Saved to: {}", path.display());
        eprintln!();
    }

    Ok(())
}
