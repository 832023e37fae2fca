//! World Drivers' Champions, most recent first.

use crate::screen::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Champion {
    pub season: u16,
    pub driver: &'static str,
    pub constructor: &'static str,
}

const fn c(season: u16, driver: &'static str, constructor: &'static str) -> Champion {
    Champion {
        season,
        driver,
        constructor,
    }
}

pub const CHAMPIONS: &[Champion] = &[
    c(2025, "Lando Norris", "McLaren"),
    c(2024, "Max Verstappen", "Red Bull"),
    c(2023, "Max Verstappen", "Red Bull"),
    c(2022, "Max Verstappen", "Red Bull"),
    c(2021, "Max Verstappen", "Red Bull"),
    c(2020, "Lewis Hamilton", "Mercedes"),
    c(2019, "Lewis Hamilton", "Mercedes"),
    c(2018, "Lewis Hamilton", "Mercedes"),
    c(2017, "Lewis Hamilton", "Mercedes"),
    c(2016, "Nico Rosberg", "Mercedes"),
    c(2015, "Lewis Hamilton", "Mercedes"),
    c(2014, "Lewis Hamilton", "Mercedes"),
    c(2013, "Sebastian Vettel", "Red Bull"),
    c(2012, "Sebastian Vettel", "Red Bull"),
    c(2011, "Sebastian Vettel", "Red Bull"),
    c(2010, "Sebastian Vettel", "Red Bull"),
    c(2009, "Jenson Button", "Brawn"),
    c(2008, "Lewis Hamilton", "McLaren"),
    c(2007, "Kimi Raikkonen", "Ferrari"),
    c(2006, "Fernando Alonso", "Renault"),
    c(2005, "Fernando Alonso", "Renault"),
    c(2004, "Michael Schumacher", "Ferrari"),
    c(2003, "Michael Schumacher", "Ferrari"),
    c(2002, "Michael Schumacher", "Ferrari"),
    c(2001, "Michael Schumacher", "Ferrari"),
    c(2000, "Michael Schumacher", "Ferrari"),
    c(1999, "Mika Hakkinen", "McLaren"),
    c(1998, "Mika Hakkinen", "McLaren"),
    c(1997, "Jacques Villeneuve", "Williams"),
    c(1996, "Damon Hill", "Williams"),
    c(1995, "Michael Schumacher", "Benetton"),
    c(1994, "Michael Schumacher", "Benetton"),
    c(1993, "Alain Prost", "Williams"),
    c(1992, "Nigel Mansell", "Williams"),
    c(1991, "Ayrton Senna", "McLaren"),
    c(1990, "Ayrton Senna", "McLaren"),
    c(1989, "Alain Prost", "McLaren"),
    c(1988, "Ayrton Senna", "McLaren"),
    c(1987, "Nelson Piquet", "Williams"),
    c(1986, "Alain Prost", "McLaren"),
    c(1985, "Alain Prost", "McLaren"),
    c(1984, "Niki Lauda", "McLaren"),
    c(1983, "Nelson Piquet", "Brabham"),
    c(1982, "Keke Rosberg", "Williams"),
    c(1981, "Nelson Piquet", "Brabham"),
    c(1980, "Alan Jones", "Williams"),
    c(1979, "Jody Scheckter", "Ferrari"),
    c(1978, "Mario Andretti", "Lotus"),
    c(1977, "Niki Lauda", "Ferrari"),
    c(1976, "James Hunt", "McLaren"),
    c(1975, "Niki Lauda", "Ferrari"),
    c(1974, "Emerson Fittipaldi", "McLaren"),
    c(1973, "Jackie Stewart", "Tyrrell"),
    c(1972, "Emerson Fittipaldi", "Lotus"),
    c(1971, "Jackie Stewart", "Tyrrell"),
    c(1970, "Jochen Rindt", "Lotus"),
    c(1969, "Jackie Stewart", "Matra"),
    c(1968, "Graham Hill", "Lotus"),
    c(1967, "Denny Hulme", "Brabham"),
    c(1966, "Jack Brabham", "Brabham"),
    c(1965, "Jim Clark", "Lotus"),
    c(1964, "John Surtees", "Ferrari"),
    c(1963, "Jim Clark", "Lotus"),
    c(1962, "Graham Hill", "BRM"),
    c(1961, "Phil Hill", "Ferrari"),
    c(1960, "Jack Brabham", "Cooper"),
    c(1959, "Jack Brabham", "Cooper"),
    c(1958, "Mike Hawthorn", "Ferrari"),
    c(1957, "Juan Manuel Fangio", "Maserati"),
    c(1956, "Juan Manuel Fangio", "Ferrari"),
    c(1955, "Juan Manuel Fangio", "Mercedes"),
    c(1954, "Juan Manuel Fangio", "Mercedes"),
    c(1953, "Alberto Ascari", "Ferrari"),
    c(1952, "Alberto Ascari", "Ferrari"),
    c(1951, "Juan Manuel Fangio", "Alfa Romeo"),
    c(1950, "Giuseppe Farina", "Alfa Romeo"),
];

/// Highlight tone for multiple-title legends.
pub fn driver_tone(driver: &str) -> Tone {
    match driver {
        "Michael Schumacher" => Tone::Magenta,
        "Lewis Hamilton" => Tone::Red,
        "Juan Manuel Fangio" => Tone::Green,
        "Max Verstappen" | "Sebastian Vettel" | "Ayrton Senna" | "Niki Lauda" => Tone::Yellow,
        _ => Tone::Cyan,
    }
}
