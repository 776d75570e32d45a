//! OpenAlex wire types and their mapping to domain metadata

use crate::doi::normalize_doi;
use scholia_domain::{Author, PaperMetadata};
use serde::Deserialize;
use std::collections::HashMap;

/// A page of `/works` search results
#[derive(Debug, Deserialize)]
pub struct WorksPage {
    /// Matching works
    #[serde(default)]
    pub results: Vec<Work>,
}

/// One OpenAlex work record (only the fields used here)
#[derive(Debug, Deserialize)]
pub struct Work {
    /// Work URL, e.g. `https://openalex.org/W2741809807`
    pub id: String,
    /// DOI URL
    #[serde(default)]
    pub doi: Option<String>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Display name, usually equal to the title
    #[serde(default)]
    pub display_name: Option<String>,
    /// Publication year
    #[serde(default)]
    pub publication_year: Option<i32>,
    /// Number of citing works
    #[serde(default)]
    pub cited_by_count: u64,
    /// Author list
    #[serde(default)]
    pub authorships: Vec<Authorship>,
    /// Referenced work URLs
    #[serde(default)]
    pub referenced_works: Vec<String>,
    /// Word to positions index of the abstract
    #[serde(default)]
    pub abstract_inverted_index: Option<HashMap<String, Vec<usize>>>,
}

/// Authorship entry
#[derive(Debug, Deserialize)]
pub struct Authorship {
    /// The author, absent for some legacy records
    #[serde(default)]
    pub author: Option<AuthorRef>,
}

/// Author reference inside an authorship
#[derive(Debug, Deserialize)]
pub struct AuthorRef {
    /// Author URL
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Work {
    /// Author identifiers, skipping authors without one
    pub fn author_ids(&self) -> Vec<String> {
        self.authorships
            .iter()
            .filter_map(|a| a.author.as_ref()?.id.clone())
            .collect()
    }

    /// Abstract text reconstructed from the inverted index
    pub fn abstract_text(&self) -> Option<String> {
        self.abstract_inverted_index
            .as_ref()
            .map(reconstruct_abstract)
            .filter(|text| !text.is_empty())
    }

    /// Map to domain metadata
    pub fn into_metadata(self) -> PaperMetadata {
        let authors = self
            .authorships
            .into_iter()
            .filter_map(|a| a.author)
            .filter_map(|a| {
                Some(Author {
                    id: a.id?,
                    name: a.display_name.unwrap_or_default(),
                })
            })
            .collect();

        PaperMetadata {
            id: Some(self.id),
            doi: self.doi.as_deref().and_then(normalize_doi),
            title: self.title.or(self.display_name).unwrap_or_default(),
            publication_year: self.publication_year,
            cited_by_count: self.cited_by_count,
            authors,
            referenced_work_ids: self.referenced_works,
        }
    }
}

/// Rebuild abstract text from OpenAlex's word to positions index
///
/// ```
/// use scholia_openalex::reconstruct_abstract;
/// use std::collections::HashMap;
///
/// let index = HashMap::from([
///     ("attention".to_string(), vec![0, 3]),
///     ("is".to_string(), vec![1]),
///     ("all".to_string(), vec![2]),
/// ]);
/// assert_eq!(reconstruct_abstract(&index), "attention is all attention");
/// ```
pub fn reconstruct_abstract(index: &HashMap<String, Vec<usize>>) -> String {
    let mut positioned: Vec<(usize, &str)> = index
        .iter()
        .flat_map(|(word, positions)| positions.iter().map(move |&p| (p, word.as_str())))
        .collect();
    positioned.sort();
    positioned
        .into_iter()
        .map(|(_, word)| word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip the URL prefix from a work identifier
pub fn short_work_id(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}
