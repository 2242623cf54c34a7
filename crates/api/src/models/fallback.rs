use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered candidate targets for one specifier.
///
/// The first entry is preferred. Duplicates are legal and are never removed.
/// Every constructor, deserialization included, keeps the list non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FallbackList(Vec<String>);

impl FallbackList {
    pub fn try_new(targets: Vec<String>) -> ApiResult<Self> {
        if targets.is_empty() {
            return Err(ApiError::EmptyFallbackList);
        }
        Ok(Self(targets))
    }

    /// The identity list: a candidate that maps to itself.
    pub fn single(target: impl Into<String>) -> Self {
        Self(vec![target.into()])
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replaces every target with the list `f` returns for it, concatenating
    /// the results in order. A non-empty list maps to a non-empty list.
    pub fn flat_map<F>(&self, mut f: F) -> FallbackList
    where
        F: FnMut(&str) -> FallbackList,
    {
        Self(self.0.iter().flat_map(|target| f(target).0).collect())
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for FallbackList {
    type Error = ApiError;

    fn try_from(targets: Vec<String>) -> ApiResult<Self> {
        Self::try_new(targets)
    }
}

impl From<FallbackList> for Vec<String> {
    fn from(list: FallbackList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a FallbackList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FallbackList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
