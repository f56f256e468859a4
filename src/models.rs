// Response shapes returned by the Gutendex `/books` endpoint.
//
// Only `results` and each book's `title` are required; everything else
// falls back to a default so partial payloads still parse.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One page of search results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookList {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Book>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Person>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub download_count: u64,
}

/// Author record. Gutendex uses negative years for BCE.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

impl BookList {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Titles in the order the API returned them.
    pub fn titles(&self) -> Vec<String> {
        self.results.iter().map(|b| b.title.clone()).collect()
    }

    /// Every author name on the page, each exactly once. Names are compared
    /// as-is, without case folding or trimming.
    pub fn author_names(&self) -> BTreeSet<String> {
        self.results
            .iter()
            .flat_map(|b| b.authors.iter())
            .map(|a| a.name.clone())
            .collect()
    }
}
