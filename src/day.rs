//! Plain closed enum with an exhaustive message dispatcher.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::LessonError;

/// Shown only when a day name from outside the program cannot be parsed.
pub const UNRECOGNIZED_DAY: &str = "There is something wrong. Please, try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Symbolic upper-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "MONDAY",
            Day::Tuesday => "TUESDAY",
            Day::Wednesday => "WEDNESDAY",
            Day::Thursday => "THURSDAY",
            Day::Friday => "FRIDAY",
            Day::Saturday => "SATURDAY",
            Day::Sunday => "SUNDAY",
        }
    }

    // No wildcard arm: a new variant must get its own sentence.
    pub fn today_message(self) -> &'static str {
        match self {
            Day::Monday => "Today is Monday.",
            Day::Tuesday => "Today is Tuesday.",
            Day::Wednesday => "Today is Wednesday.",
            Day::Thursday => "Today is Thursday.",
            Day::Friday => "Today is Friday.",
            Day::Saturday => "Today is Saturday.",
            Day::Sunday => "Today is Sunday.",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| LessonError::UnknownDay(s.to_string()))
    }
}

/// Dispatch on a day name that arrives as text.
pub fn day_message_for_name(name: &str) -> &'static str {
    match name.parse::<Day>() {
        Ok(day) => {
            debug!(%day, "dispatching day");
            day.today_message()
        }
        Err(err) => {
            warn!(%err, "falling back");
            UNRECOGNIZED_DAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_day_message() {
        let messages: Vec<_> = Day::ALL.iter().map(|d| d.today_message()).collect();
        assert_eq!(
            messages,
            vec![
                "Today is Monday.",
                "Today is Tuesday.",
                "Today is Wednesday.",
                "Today is Thursday.",
                "Today is Friday.",
                "Today is Saturday.",
                "Today is Sunday.",
            ]
        );
    }

    #[test]
    fn test_parse_symbolic_name() {
        assert_eq!("SATURDAY".parse::<Day>().unwrap(), Day::Saturday);
        assert_eq!(Day::Saturday.to_string(), "SATURDAY");
        for day in Day::ALL {
            assert_eq!(day.name().parse::<Day>().unwrap(), day);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "saturday".parse::<Day>().unwrap_err();
        assert!(matches!(err, LessonError::UnknownDay(ref name) if name == "saturday"));
    }

    #[test]
    fn test_name_dispatch() {
        assert_eq!(day_message_for_name("SATURDAY"), "Today is Saturday.");
        assert_eq!(day_message_for_name("FUNDAY"), UNRECOGNIZED_DAY);
        assert_eq!(day_message_for_name(""), UNRECOGNIZED_DAY);
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        for day in Day::ALL {
            assert_eq!(day.today_message(), day.today_message());
        }
        assert_eq!(day_message_for_name("MONDAY"), day_message_for_name("MONDAY"));
    }
}
