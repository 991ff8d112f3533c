//! Variant-typed filtering over [`Person`] records.
//!
//! Each variant carries its own criteria type whose fields are all optional.
//! A record matches when it is of the requested variant and every field set
//! in the criteria equals the record's value. Unset fields match anything, so
//! default criteria select every record of the variant.

use thiserror::Error;

use crate::person::{Admin, Person, PersonKind, User};

/// A [`Person`] variant that can be filtered on.
pub trait Variant: Clone {
    /// Discriminant this variant corresponds to.
    const KIND: PersonKind;

    /// Field criteria applicable to this variant.
    type Criteria: Default;

    /// Borrows the payload if `person` is this variant.
    fn from_person(person: &Person) -> Option<&Self>;

    /// Returns true if every criterion that is set equals this record's value.
    fn matches(&self, criteria: &Self::Criteria) -> bool;
}

/// Criteria for [`User`] records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCriteria {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub occupation: Option<String>,
}

impl UserCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }
}

/// Criteria for [`Admin`] records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminCriteria {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub role: Option<String>,
}

impl AdminCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Unset criteria match anything; set ones need strict equality.
fn field_matches<T: PartialEq + ?Sized>(expected: Option<&T>, actual: &T) -> bool {
    expected.map_or(true, |e| e == actual)
}

impl Variant for User {
    const KIND: PersonKind = PersonKind::User;
    type Criteria = UserCriteria;

    fn from_person(person: &Person) -> Option<&Self> {
        match person {
            Person::User(u) => Some(u),
            Person::Admin(_) => None,
        }
    }

    fn matches(&self, criteria: &UserCriteria) -> bool {
        field_matches(criteria.name.as_deref(), self.name.as_str())
            && field_matches(criteria.age.as_ref(), &self.age)
            && field_matches(criteria.occupation.as_deref(), self.occupation.as_str())
    }
}

impl Variant for Admin {
    const KIND: PersonKind = PersonKind::Admin;
    type Criteria = AdminCriteria;

    fn from_person(person: &Person) -> Option<&Self> {
        match person {
            Person::Admin(a) => Some(a),
            Person::User(_) => None,
        }
    }

    fn matches(&self, criteria: &AdminCriteria) -> bool {
        field_matches(criteria.name.as_deref(), self.name.as_str())
            && field_matches(criteria.age.as_ref(), &self.age)
            && field_matches(criteria.role.as_deref(), self.role.as_str())
    }
}

/// Returns copies of the `V` records in `persons` that satisfy `criteria`,
/// in input order.
///
/// ```
/// use todo_core::{filter_persons, seed_persons, User, UserCriteria};
///
/// let people = seed_persons();
/// let users = filter_persons::<User>(&people, &UserCriteria::new().with_age(23));
/// assert_eq!(users.len(), 2);
/// ```
pub fn filter_persons<V: Variant>(persons: &[Person], criteria: &V::Criteria) -> Vec<V> {
    persons
        .iter()
        .filter_map(V::from_person)
        .filter(|record| record.matches(criteria))
        .cloned()
        .collect()
}

/// Errors from [`filter_by_kind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Field '{field}' does not apply to {kind} records")]
    FieldNotApplicable { field: &'static str, kind: PersonKind },
}

/// Untyped criteria for callers that only learn the variant at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonCriteria {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub occupation: Option<String>,
    pub role: Option<String>,
}

impl PersonCriteria {
    fn to_user(&self) -> Result<UserCriteria, FilterError> {
        if self.role.is_some() {
            return Err(FilterError::FieldNotApplicable {
                field: "role",
                kind: PersonKind::User,
            });
        }
        Ok(UserCriteria {
            name: self.name.clone(),
            age: self.age,
            occupation: self.occupation.clone(),
        })
    }

    fn to_admin(&self) -> Result<AdminCriteria, FilterError> {
        if self.occupation.is_some() {
            return Err(FilterError::FieldNotApplicable {
                field: "occupation",
                kind: PersonKind::Admin,
            });
        }
        Ok(AdminCriteria {
            name: self.name.clone(),
            age: self.age,
            role: self.role.clone(),
        })
    }
}

/// Runtime-dispatched [`filter_persons`].
///
/// Fails only when `criteria` names a field the chosen variant does not have.
pub fn filter_by_kind(
    persons: &[Person],
    kind: PersonKind,
    criteria: &PersonCriteria,
) -> Result<Vec<Person>, FilterError> {
    let matched: Vec<Person> = match kind {
        PersonKind::User => filter_persons::<User>(persons, &criteria.to_user()?)
            .into_iter()
            .map(Person::from)
            .collect(),
        PersonKind::Admin => filter_persons::<Admin>(persons, &criteria.to_admin()?)
            .into_iter()
            .map(Person::from)
            .collect(),
    };
    tracing::debug!(%kind, matched = matched.len(), "persons filtered");
    Ok(matched)
}
