//! Circuit layouts as ASCII art.
//!
//! Art is embedded from `assets/tracks/*.txt` at compile time.

use crate::screen::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    /// Lookup key typed after `map`.
    pub key: &'static str,
    pub name: &'static str,
    /// Location, length and lap count.
    pub details: &'static str,
    pub tone: Tone,
    pub art: &'static str,
}

macro_rules! track {
    ($key:literal, $name:literal, $details:literal, $tone:expr) => {
        Track {
            key: $key,
            name: $name,
            details: $details,
            tone: $tone,
            art: include_str!(concat!("../../assets/tracks/", $key, ".txt")),
        }
    };
}

pub const TRACKS: &[Track] = &[
    track!("abudhabi", "YAS MARINA CIRCUIT", "Abu Dhabi | 5.281 km | 58 Laps", Tone::Cyan),
    track!("monza", "AUTODROMO NAZIONALE MONZA", "Italy | 5.793 km | 53 Laps", Tone::Red),
    track!("silverstone", "SILVERSTONE CIRCUIT", "UK | 5.891 km | 52 Laps", Tone::Blue),
    track!(
        "spa",
        "CIRCUIT DE SPA-FRANCORCHAMPS",
        "Belgium | 7.004 km | 44 Laps",
        Tone::Yellow
    ),
    track!("monaco", "CIRCUIT DE MONACO", "Monaco | 3.337 km | 78 Laps", Tone::Red),
    track!(
        "mexico",
        "Autódromo Hermanos Rodríguez",
        "Mexico City | 4.304 km | 71 Laps",
        Tone::Cyan
    ),
    track!(
        "imola",
        "Autodromo Internazionale Enzo e Dino Ferrari",
        "Imola | 4.909 km | 63 Laps",
        Tone::Cyan
    ),
    track!(
        "interlagos",
        "Autódromo José Carlos Pace",
        "Sao Paulo | 4.309 km | 71 Laps",
        Tone::Cyan
    ),
    track!(
        "sakhir",
        "Bahrain International Circuit",
        "Sakhir | 3.543 km | 87 Laps",
        Tone::Cyan
    ),
    track!("baku", "Azerbaijan Grand Prix", "Baku | 6.003 km | 51 Laps", Tone::Cyan),
    track!(
        "buddh",
        "Indian Grand Prix",
        "Greater Noida | 5.125 km | 60 Laps",
        Tone::Cyan
    ),
    track!(
        "barcelona",
        "Circuit de Barcelona-Catalunya",
        "Barcelona | 4.66 km | 66 Laps",
        Tone::Cyan
    ),
    track!(
        "montreal",
        "Canadian Grand Prix",
        "Montreal | 4.361 km | 70 Laps",
        Tone::Cyan
    ),
    track!("miami", "Miami Grand Prix", "Miami | 5.41 km | 57 Laps", Tone::Cyan),
    track!(
        "qatar",
        "Qatar Grand Prix",
        "Lusail International Circuit | 5.41 km | 57 Laps",
        Tone::Cyan
    ),
    track!(
        "lasvegas",
        "Las Vegas Grand Prix",
        "Las Vegas | 6.201 km | 60 Laps",
        Tone::Cyan
    ),
    track!("suzuka", "Japanese Grand Prix", "Suzuka | 5.807 km | 53 Laps", Tone::Cyan),
    track!(
        "singapore",
        "Singapore Grand Prix",
        "Singapore | 4.927 km | 62 Laps",
        Tone::Cyan
    ),
];

/// Looks up a track by key, ignoring case and any whitespace in `name`.
pub fn find(name: &str) -> Option<&'static Track> {
    let key: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    TRACKS.iter().find(|t| t.key.eq_ignore_ascii_case(&key))
}

/// Start-line logo shown during boot.
pub const LOGO: &str = include_str!("../../assets/logo.txt");
