//! CLI argument parser for the cue generator.
//!
//! The tone parameters themselves are fixed by the built-in cue
//! definitions; the command line only selects where the files land.

use std::path::PathBuf;

use clap::Parser;

/// cuegen: metronome cue generator producing bip and click WAV tones
#[derive(Parser, Debug)]
#[command(name = "cuegen")]
#[command(about = "Generates the bip and click metronome cue WAV files")]
#[command(version)]
pub struct Cli {
    /// Directory to write the cue files into
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the effective output directory.
    pub fn output_dir(&self) -> &PathBuf {
        &self.out_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_dir_defaults_to_current_directory() {
        let cli = Cli::parse_from(["cuegen"]);
        assert_eq!(cli.output_dir(), &PathBuf::from("."));
    }

    #[test]
    fn out_dir_flag_is_honored() {
        let cli = Cli::parse_from(["cuegen", "--out-dir", "/tmp/cues"]);
        assert_eq!(cli.output_dir(), &PathBuf::from("/tmp/cues"));
    }

    #[test]
    fn cli_args_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
