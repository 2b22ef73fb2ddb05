//! Domain entities: members, movements, protests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::location::Location;

/// Lowercased form of a name, used as registry and roster key.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// An individual member of the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protester {
    name: String,
    email: String,
    location: Location,
}

impl Protester {
    pub fn new(name: String, email: String, location: Location) -> Self {
        Self {
            name,
            email,
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Display rendering used in member listings.
    pub fn display(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// A named cause linking multiple protests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    name: String,
}

impl Movement {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Insertion-ordered sequence of display names with case-insensitive
/// uniqueness. Duplicate inserts are silent no-ops; `insert` reports
/// whether the name was actually added for callers that care.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless an entry with the same lowercased form exists.
    /// The first-inserted spelling wins.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = name_key(name);
        self.names.iter().any(|n| name_key(n) == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A scheduled event with a roster of members and movement affiliations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protest {
    name: String,
    location: Location,
    time: DateTime<Utc>,
    #[serde(default)]
    protesters: Roster,
    #[serde(default)]
    movements: Roster,
}

impl Protest {
    /// Build a protest. Omitted rosters default to empty.
    pub fn new(
        name: String,
        location: Location,
        time: DateTime<Utc>,
        protesters: Option<Roster>,
        movements: Option<Roster>,
    ) -> Self {
        Self {
            name,
            location,
            time,
            protesters: protesters.unwrap_or_default(),
            movements: movements.unwrap_or_default(),
        }
    }

    /// Partial update: each field changes only when a replacement is given.
    /// An empty or whitespace-only name counts as "not supplied".
    /// Supplying neither is a no-op.
    pub fn modify(&mut self, new_name: Option<&str>, new_time: Option<DateTime<Utc>>) {
        if let Some(name) = new_name {
            if !name.trim().is_empty() {
                self.name = name.to_string();
            }
        }
        if let Some(time) = new_time {
            self.time = time;
        }
    }

    /// Add a member to the roster. Returns false (and leaves the roster
    /// untouched) when a member of the same name is already present.
    pub fn add_protester(&mut self, protester: &Protester) -> bool {
        self.protesters.insert(protester.name())
    }

    /// Add a movement affiliation, same dedup contract as [`Self::add_protester`].
    pub fn add_movement(&mut self, movement: &Movement) -> bool {
        self.movements.insert(movement.name())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn protesters(&self) -> &Roster {
        &self.protesters
    }

    pub fn movements(&self) -> &Roster {
        &self.movements
    }
}
