use crc32fast::Hasher;

/// Stable id seed for a document key (whatever identifier the hosting
/// application uses for the screenplay — storage id, path, slug).
pub fn document_seed(key: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential node id generator, seeded per document.
///
/// Ids take the form `"{seed}-{n}"`. The same key always yields the same
/// seed, so node ids are reproducible given the same edit history. A session
/// resuming over an already-populated document should use a key distinct
/// from the one that minted the existing ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(document_key: &str) -> Self {
        Self {
            seed: document_seed(document_key),
            count: 0,
        }
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Mint the next id.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
