//! Personal identity: profiles, the `Person` trait, and patients.
//!
//! A [`Profile`] (first name, last name, date of birth) is the identity key
//! for everyone the clinic deals with. Name comparison is
//! case-insensitive for equality, hashing, and ordering alike, so
//! "john doe" and "John Doe" born the same day are one person.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::CalendarDate;

/// Name and date of birth.
///
/// Ordered by (last name, first name, date of birth).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    first_name: String,
    last_name: String,
    date_of_birth: CalendarDate,
}

impl Profile {
    /// Creates a profile.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: CalendarDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> CalendarDate {
        self.date_of_birth
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Profile {}

impl Hash for Profile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Same folded char stream that `cmp_ignore_case` compares.
        for name in [&self.first_name, &self.last_name] {
            for c in name.chars().flat_map(char::to_lowercase) {
                c.hash(state);
            }
            0xffu8.hash(state);
        }
        self.date_of_birth.hash(state);
    }
}

impl Ord for Profile {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ignore_case(&self.last_name, &other.last_name)
            .then_with(|| cmp_ignore_case(&self.first_name, &other.first_name))
            .then_with(|| self.date_of_birth.cmp(&other.date_of_birth))
    }
}

impl PartialOrd for Profile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.first_name, self.last_name, self.date_of_birth
        )
    }
}

/// Anything identified by a [`Profile`].
pub trait Person {
    fn profile(&self) -> &Profile;
}

/// A clinic patient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Patient {
    profile: Profile,
}

impl Patient {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

impl Person for Patient {
    fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl From<Profile> for Patient {
    fn from(profile: Profile) -> Self {
        Self::new(profile)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.profile, f)
    }
}
