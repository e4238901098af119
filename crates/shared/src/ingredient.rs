use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngredientError {
    #[error("ingredient name is empty")]
    Empty,

    #[error("{0} is already in the list")]
    Duplicate(String),
}

/// Trims every entry and drops the ones left empty.
///
/// Both engines run their input through this before looking at it, so stray
/// whitespace or blank entries never reach the matching logic.
pub fn normalize<S: AsRef<str>>(ingredients: &[S]) -> Vec<String> {
    ingredients
        .iter()
        .map(|i| i.as_ref().trim())
        .filter(|i| !i.is_empty())
        .map(str::to_owned)
        .collect()
}

/// The ingredients a user currently owns, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a list from previously saved entries, skipping blanks and duplicates.
    pub fn from_saved<S: AsRef<str>>(saved: &[S]) -> Self {
        let mut list = Self::new();
        for entry in saved {
            let _ = list.add(entry.as_ref());
        }
        list
    }

    /// Adds a trimmed entry and returns it.
    pub fn add(&mut self, raw: &str) -> Result<&str, IngredientError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(IngredientError::Empty);
        }

        if self.contains(name) {
            return Err(IngredientError::Duplicate(name.to_owned()));
        }

        self.0.push(name.to_owned());

        Ok(self.0.last().map(String::as_str).unwrap_or_default())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|i| i != name);
        self.0.len() != before
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|i| i == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.to_vec()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
