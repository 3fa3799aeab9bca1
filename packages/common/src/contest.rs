use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Opaque contest identifier.
///
/// Equality is on the raw string. Ordering compares numerically when both ids
/// are decimal numbers so that "9" sorts before "101" in listings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContestId(String);

impl ContestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Ord for ContestId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ContestId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ContestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for ContestId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ContestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ContestId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Key a submission is grouped under.
///
/// Submissions without a contest id share the [`ContestKey::Missing`] bucket.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContestKey {
    Id(ContestId),
    Missing,
}

impl ContestKey {
    pub fn contest_id(&self) -> Option<&ContestId> {
        match self {
            Self::Id(id) => Some(id),
            Self::Missing => None,
        }
    }
}

impl From<Option<ContestId>> for ContestKey {
    fn from(id: Option<ContestId>) -> Self {
        id.map_or(Self::Missing, Self::Id)
    }
}

impl From<ContestId> for ContestKey {
    fn from(id: ContestId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ContestKey {
    fn from(id: &str) -> Self {
        Self::Id(id.into())
    }
}

impl fmt::Display for ContestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => fmt::Display::fmt(id, f),
            Self::Missing => f.write_str("none"),
        }
    }
}

impl Serialize for ContestKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.contest_id().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContestKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<ContestId>::deserialize(deserializer).map(Self::from)
    }
}
