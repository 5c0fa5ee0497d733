use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

pub const CAN_EDIT: &str = "canEdit";
pub const CAN_CREATE: &str = "canCreate";
pub const READ_ONLY: &str = "readOnly";
pub const QUESTIONNAIRES_ENABLED: &str = "questionnairesEnabled";

/// Named flags a page supplies for one evaluation pass.
///
/// The four well-known flags are always present (default `false`); pages may
/// add their own with [`Conditions::with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conditions {
    flags: BTreeMap<String, bool>,
}

impl Conditions {
    pub fn new() -> Self {
        let flags = [CAN_EDIT, CAN_CREATE, READ_ONLY, QUESTIONNAIRES_ENABLED]
            .into_iter()
            .map(|name| (name.to_string(), false))
            .collect();
        Self { flags }
    }

    /// Builder-style setter.
    pub fn with(mut self, name: &str, value: bool) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<'de> Deserialize<'de> for Conditions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flags = BTreeMap::<String, bool>::deserialize(deserializer)?;
        Ok(flags.into_iter().collect())
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Conditions {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut conditions = Self::new();
        for (name, value) in iter {
            conditions.flags.insert(name.into(), value);
        }
        conditions
    }
}
