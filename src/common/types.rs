use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Author of a paper, in byline order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(default, alias = "institution", skip_serializing_if = "Option::is_none")]
    pub last_known_institution: Option<String>,
}

/// A paper record as delivered by the data source.
///
/// Treated as immutable: everything the engine derives lives next to the
/// paper (see [`crate::classify::ClassifiedPaper`]), never inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<Author>,
    #[serde(default, alias = "year", skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(default, alias = "publicationDate", skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub citation_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// Citations received per calendar year
    #[serde(
        default,
        deserialize_with = "counts_by_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub counts_by_year: Option<BTreeMap<i32, u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_works_count: Option<u32>,
}

impl Paper {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            authors: Vec::new(),
            publication_year: None,
            publication_date: None,
            citation_count: 0,
            venue: None,
            doi: None,
            abstract_text: None,
            counts_by_year: None,
            referenced_works_count: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.publication_year = Some(year);
        self
    }

    pub fn with_citations(mut self, citation_count: u64) -> Self {
        self.citation_count = citation_count;
        self
    }

    pub fn with_abstract(mut self, text: &str) -> Self {
        self.abstract_text = Some(text.to_string());
        self
    }

    /// Title and abstract joined, lowercase, as scored by text heuristics
    pub fn text(&self) -> String {
        let abstract_text = self.abstract_text.as_deref().unwrap_or("");
        format!("{} {}", abstract_text, self.title).to_lowercase()
    }
}

/// Per-year citation entry in the list form used by OpenAlex
#[derive(Debug, Deserialize)]
struct YearCount {
    year: i32,
    #[serde(alias = "count", alias = "citation_count")]
    cited_by_count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountsByYear {
    // String keys: untagged buffering cannot read integer map keys
    Map(BTreeMap<String, u64>),
    List(Vec<YearCount>),
}

fn counts_by_year<'de, D>(deserializer: D) -> Result<Option<BTreeMap<i32, u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let counts = Option::<CountsByYear>::deserialize(deserializer)?;
    Ok(counts.and_then(|counts| {
        let map: BTreeMap<i32, u64> = match counts {
            CountsByYear::Map(map) => map
                .into_iter()
                .filter_map(|(year, count)| year.trim().parse::<i32>().ok().map(|y| (y, count)))
                .collect(),
            CountsByYear::List(list) => {
                let mut map = BTreeMap::new();
                for entry in list {
                    *map.entry(entry.year).or_insert(0) += entry.cited_by_count;
                }
                map
            }
        };
        if map.is_empty() {
            None
        } else {
            Some(map)
        }
    }))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Statistics from the classify command
#[derive(Debug, Clone, Default)]
pub struct ClassifyStats {
    pub papers_read: usize,
    pub papers_classified: usize,
    pub uncategorized: usize,
    pub papers_written: usize,
}

/// Statistics from the graph command
#[derive(Debug, Clone, Default)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub dropped_edges: usize,
    pub filtered_nodes: usize,
    pub filtered_edges: usize,
}
