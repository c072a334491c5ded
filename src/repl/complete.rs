/// A single completion match for an in-progress bare symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Display name inserted into the line
    pub name: String,
    /// Qualifier used for grouping, typically the namespace
    pub namespace: Option<String>,
}

impl Candidate {
    /// Creates a candidate with an optional namespace qualifier
    pub fn new(name: impl Into<String>, namespace: Option<String>) -> Self {
        Candidate {
            name: name.into(),
            namespace,
        }
    }
}

/// Candidate-search boundary for name completion.
///
/// Implementations receive the text of the in-progress symbol/number
/// token and return matching qualified names. Matching is case-sensitive.
pub trait Completer {
    /// Candidates matching `word`
    fn candidates(&self, word: &str) -> Vec<Candidate>;
}

/// Completer over a fixed table of qualified names, matching apropos
/// style: any name containing the query matches.
#[derive(Debug, Default)]
pub struct StaticCompleter {
    entries: Vec<Candidate>,
}

impl StaticCompleter {
    /// Creates an empty completer
    pub fn new() -> Self {
        StaticCompleter::default()
    }

    /// Adds a qualified name to the table
    pub fn add(&mut self, name: impl Into<String>, namespace: Option<String>) {
        self.entries.push(Candidate::new(name, namespace));
    }
}

impl Completer for StaticCompleter {
    fn candidates(&self, word: &str) -> Vec<Candidate> {
        if word.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|c| c.name.contains(word))
            .cloned()
            .collect()
    }
}
