use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AcademyError;

/// A wall-clock time of day in zero-padded 24-hour `"HH:MM"` form.
///
/// The zero-padded fixed-width format is the contract that makes plain
/// string ordering agree with chronological ordering, so validation
/// rejects anything that is not exactly two digits, a colon, two digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassTime(String);

impl ClassTime {
    pub fn new(value: &str) -> Result<Self, AcademyError> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && bytes[..2].iter().all(u8::is_ascii_digit)
            && bytes[3..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(AcademyError::Validation(format!(
                "Time must be zero-padded 24-hour HH:MM, got {value:?}"
            )));
        }

        let hour: u32 = value[..2].parse().expect("checked digits");
        let minute: u32 = value[3..].parse().expect("checked digits");
        if hour > 23 || minute > 59 {
            return Err(AcademyError::Validation(format!(
                "Time out of range: {value:?}"
            )));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hour(&self) -> u32 {
        self.0[..2].parse().expect("validated at construction")
    }

    pub fn minute(&self) -> u32 {
        self.0[3..].parse().expect("validated at construction")
    }

    /// Minutes since midnight. The true time-of-day value behind the string.
    pub fn minutes_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl FromStr for ClassTime {
    type Err = AcademyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ClassTime {
    type Error = AcademyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ClassTime> for String {
    fn from(time: ClassTime) -> Self {
        time.0
    }
}

impl fmt::Display for ClassTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One timetable entry. Created and deleted by the admin; never updated in
/// place (an edit is a delete followed by a recreate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    /// Creation-timestamp-derived string id.
    pub id: String,
    /// Day-of-week label, e.g. "Monday".
    pub day: String,
    pub start_time: ClassTime,
    pub end_time: ClassTime,
    pub subject: String,
    /// Room label, or "Online" for remote sessions.
    pub room: String,
    pub zoom_link: Option<String>,
}

impl ClassSession {
    /// Default room label when none is given.
    pub const ONLINE_ROOM: &'static str = "Online";

    /// Builds a session with a fresh timestamp-derived id.
    ///
    /// The end time must be strictly after the start time.
    pub fn create(
        day: String,
        start_time: ClassTime,
        end_time: ClassTime,
        subject: String,
        room: Option<String>,
        zoom_link: Option<String>,
    ) -> Result<Self, AcademyError> {
        if end_time <= start_time {
            return Err(AcademyError::Validation(format!(
                "Class must end after it starts ({start_time} >= {end_time})"
            )));
        }

        Ok(Self {
            id: Utc::now().timestamp_millis().to_string(),
            day,
            start_time,
            end_time,
            subject,
            room: room
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| Self::ONLINE_ROOM.to_string()),
            zoom_link,
        })
    }
}

/// Sorts the sessions of one day by start time, in place.
pub fn sort_by_start_time(sessions: &mut [ClassSession]) {
    sessions.sort_by(|a, b| a.start_time.cmp(&b.start_time));
}
