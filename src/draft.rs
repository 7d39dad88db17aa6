// src/draft.rs
//
// The league draft: owner → titles, in the order the file lists them.

use std::{fs, path::Path};

use serde_json::{Map, Value};

use crate::error::StoreError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    owners: Vec<(String, Vec<String>)>,
}

impl Draft {
    pub fn new(owners: Vec<(String, Vec<String>)>) -> Self {
        Self { owners }
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = fs::read_to_string(path)
            .map_err(|source| StoreError::Io { path: path.display().to_string(), source })?;
        Self::from_json(&text)
    }

    /// `{"Owner": ["Title", ...], ...}`; key order is kept.
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        let map: Map<String, Value> = serde_json::from_str(text)?;
        let mut owners = Vec::with_capacity(map.len());
        for (owner, titles) in map {
            let titles: Vec<String> = serde_json::from_value(titles)
                .map_err(|e| StoreError::Draft(format!("titles for {owner:?}: {e}")))?;
            owners.push((owner, titles));
        }
        Ok(Self { owners })
    }

    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.owners.iter().map(|(o, _)| o.as_str())
    }

    /// (owner, title) pairs in draft order.
    pub fn picks(&self) -> impl Iterator<Item = (&str, &str)> {
        self.owners
            .iter()
            .flat_map(|(o, titles)| titles.iter().map(move |t| (o.as_str(), t.as_str())))
    }

    pub fn len(&self) -> usize {
        self.owners.iter().map(|(_, t)| t.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_file_order() {
        let d = Draft::from_json(r#"{"Seth": ["B", "A"], "David": ["C"], "Noah": []}"#).unwrap();
        assert_eq!(d.owners().collect::<Vec<_>>(), ["Seth", "David", "Noah"]);
        assert_eq!(
            d.picks().collect::<Vec<_>>(),
            [("Seth", "B"), ("Seth", "A"), ("David", "C")]
        );
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn rejects_non_string_titles() {
        let err = Draft::from_json(r#"{"Seth": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, StoreError::Draft(_)));
    }

    #[test]
    fn rejects_non_object() {
        assert!(matches!(Draft::from_json("[]").unwrap_err(), StoreError::Json(_)));
    }
}
