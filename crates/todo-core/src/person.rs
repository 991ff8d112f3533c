use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A regular user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub occupation: String,
}

/// An administrator record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub name: String,
    pub age: u32,
    pub role: String,
}

/// A demo record: either a [`User`] or an [`Admin`].
///
/// The variant decides which extra field is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Person {
    User(User),
    Admin(Admin),
}

impl Person {
    pub fn kind(&self) -> PersonKind {
        match self {
            Person::User(_) => PersonKind::User,
            Person::Admin(_) => PersonKind::Admin,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::User(u) => &u.name,
            Person::Admin(a) => &a.name,
        }
    }

    pub fn age(&self) -> u32 {
        match self {
            Person::User(u) => u.age,
            Person::Admin(a) => a.age,
        }
    }

    /// The variant-specific field: occupation for users, role for admins.
    pub fn detail(&self) -> &str {
        match self {
            Person::User(u) => &u.occupation,
            Person::Admin(a) => &a.role,
        }
    }
}

impl From<User> for Person {
    fn from(user: User) -> Self {
        Person::User(user)
    }
}

impl From<Admin> for Person {
    fn from(admin: Admin) -> Self {
        Person::Admin(admin)
    }
}

/// Discriminant of [`Person`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    User,
    Admin,
}

impl PersonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonKind::User => "user",
            PersonKind::Admin => "admin",
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known person kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown person kind '{0}', expected 'user' or 'admin'")]
pub struct ParseKindError(pub String);

impl FromStr for PersonKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(PersonKind::User),
            "admin" => Ok(PersonKind::Admin),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

fn user(name: &str, age: u32, occupation: &str) -> Person {
    Person::User(User {
        name: name.to_string(),
        age,
        occupation: occupation.to_string(),
    })
}

fn admin(name: &str, age: u32, role: &str) -> Person {
    Person::Admin(Admin {
        name: name.to_string(),
        age,
        role: role.to_string(),
    })
}

/// The fixed collection used by the `people` demo.
pub fn seed_persons() -> Vec<Person> {
    vec![
        user("Emma Thompson", 23, "Software Engineer"),
        admin("Liam Carter", 35, "System Administrator"),
        user("Alex Kim", 23, "Graphic Designer"),
        admin("Raj Patel", 41, "Security Manager"),
        user("Sofia Rossi", 29, "Data Analyst"),
        admin("Noah Williams", 23, "Database Administrator"),
    ]
}
