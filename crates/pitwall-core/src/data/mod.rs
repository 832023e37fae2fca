//! Static tables: race calendar, team radio quotes, champions, track maps.

pub mod calendar;
pub mod champions;
pub mod quotes;
pub mod tracks;
