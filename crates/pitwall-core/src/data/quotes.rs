//! Team radio messages.

use crate::screen::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub driver: &'static str,
    pub team: &'static str,
    pub message: &'static str,
}

const fn q(driver: &'static str, team: &'static str, message: &'static str) -> Quote {
    Quote {
        driver,
        team,
        message,
    }
}

pub const QUOTES: &[Quote] = &[
    q("Kimi Raikkonen", "Lotus", "Just leave me alone, I know what I'm doing."),
    q(
        "Kimi Raikkonen",
        "Lotus",
        "Yes, yes, yes, I'm doing all the tyres. You don't have to remind me every 10 seconds.",
    ),
    q(
        "Sebastian Vettel",
        "Ferrari",
        "Blue flag! Blue flag! Honestly, what are we doing here?",
    ),
    q("Lewis Hamilton", "Mercedes", "Bono, my tyres are gone!"),
    q("Bono", "Mercedes", "Lewis, It's Hammer Time!"),
    q("Fernando Alonso", "McLaren", "GP2 Engine! GP2 Engine!"),
    q(
        "Fernando Alonso",
        "McLaren",
        "The engine feels good, much slower than before. Amazing",
    ),
    q("Max Verstappen", "Red Bull", "Mate, I have no power! No power!"),
    q("Charles Leclerc", "Ferrari", "I am stupid. I am stupid."),
    q(
        "Charles Leclerc",
        "Ferrari",
        "I have the seat full of water, Team: must be the water..",
    ),
    q(
        "Max Verstappen",
        "Red Bull",
        "This is boring. I should have brought my pillow.",
    ),
    q("Carlos Sainz", "Ferrari", "Smooth Operator! Smooth Operator"),
    q(
        "Lance Stroll",
        "Aston Martin",
        "\"You need to press the OK button Lance , OK button.\" \"I pressed it\" \
         \"You are pressing the Pit confirm button,Lance.\" \"Pit confirm button is the OK button,Brad.\"",
    ),
    q("Valtteri Bottas", "Mercedes", "To whom it may concern, f**k you."),
    q(
        "Toto Wolff",
        "Mercedes",
        "No Mikey, no no Mikey, that was so not right!",
    ),
    q(
        "Lando Norris",
        "McLaren",
        "It's Friday then... then Saturday, Sunday, WHAT?!",
    ),
    q(
        "Sebastian Vettel",
        "Red Bull",
        "There's Something Loose Between My Legs",
    ),
    q("Yuki Tsunoda", "AlphaTauri", "Traffic paradise!"),
    q("Felipe Massa", "Ferrari", "Felipe baby, stay cool."),
    q("Jenson Button", "McLaren", "I'm going to pee in your seat."),
];

/// Livery tone for a team name; unknown teams get green.
pub fn team_tone(team: &str) -> Tone {
    match team {
        "Mercedes" => Tone::Cyan,
        "Red Bull" | "Williams" => Tone::Blue,
        "Ferrari" => Tone::Red,
        "McLaren" => Tone::Orange,
        "Lotus" => Tone::Gold,
        "AlphaTauri" => Tone::White,
        "Alpine" => Tone::Violet,
        _ => Tone::Green,
    }
}
