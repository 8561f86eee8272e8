// File: ./src/model/item.rs
// Catalog and entry records backing citations.json
use serde::{Deserialize, Deserializer};

/// Root of the curated catalog. Only the three fixed categories are read;
/// any other key in the source document is ignored on purpose.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub papers: Vec<Entry>,
    #[serde(default)]
    pub benchmarks: Vec<Entry>,
    #[serde(default)]
    pub datasets: Vec<Entry>,
}

/// One curated item (paper, benchmark, or dataset). Every field is optional
/// in the source; defaults are filled in once at load time so rendering
/// never has to deal with absence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub title: String,
    pub url: String,
    pub venue: String,
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "string_or_none")]
    pub date: Option<String>,
    pub arxiv: Option<String>,
    pub github: Option<String>,
}

impl Default for Entry {
    fn default() -> Self {
        Entry {
            title: "Untitled".to_string(),
            url: "#".to_string(),
            venue: "Preprint".to_string(),
            keywords: Vec::new(),
            date: None,
            arxiv: None,
            github: None,
        }
    }
}

impl Entry {
    /// arXiv link, only when set to something non-empty.
    pub fn arxiv_url(&self) -> Option<&str> {
        self.arxiv.as_deref().filter(|s| !s.is_empty())
    }

    /// GitHub link, only when set to something non-empty.
    pub fn github_url(&self) -> Option<&str> {
        self.github.as_deref().filter(|s| !s.is_empty())
    }
}

// The catalog is hand-edited; a `date` that is not a string counts as
// undated instead of rejecting the whole document.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
