//! Mutable session record owned by the dispatcher.

use std::fmt;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::screen::Tone;

/// Tyre compound shown in the prompt; rotates on every successful pit stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TyreCompound {
    #[default]
    Soft,
    Medium,
    Hard,
    Inter,
}

impl TyreCompound {
    pub const ALL: [TyreCompound; 4] = [
        TyreCompound::Soft,
        TyreCompound::Medium,
        TyreCompound::Hard,
        TyreCompound::Inter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TyreCompound::Soft => "SOFT",
            TyreCompound::Medium => "MEDIUM",
            TyreCompound::Hard => "HARD",
            TyreCompound::Inter => "INTER",
        }
    }

    /// Sidewall color.
    pub fn tone(self) -> Tone {
        match self {
            TyreCompound::Soft => Tone::Red,
            TyreCompound::Medium => Tone::Yellow,
            TyreCompound::Hard => Tone::White,
            TyreCompound::Inter => Tone::Green,
        }
    }

    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&TyreCompound::Soft)
    }
}

impl fmt::Display for TyreCompound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    working_directory: PathBuf,
    tyre: TyreCompound,
    lap: u64,
}

impl Session {
    pub fn new(working_directory: PathBuf) -> Self {
        Self {
            working_directory,
            tyre: TyreCompound::default(),
            lap: 1,
        }
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn tyre(&self) -> TyreCompound {
        self.tyre
    }

    pub fn lap(&self) -> u64 {
        self.lap
    }

    /// Counts one accepted input line.
    pub fn complete_lap(&mut self) {
        self.lap = self.lap.saturating_add(1);
    }

    /// Records a successful pit stop into `directory` on fresh tyres.
    pub fn pit_stop(&mut self, directory: PathBuf, tyre: TyreCompound) {
        self.working_directory = directory;
        self.tyre = tyre;
    }
}
