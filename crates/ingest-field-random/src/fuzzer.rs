use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde_json::{Map, Value};

use crate::document::{RandomDocument, RandomDocumentOptions};
use crate::names::{can_add_field, random_existing_field_name, random_field_name};

/// Seeded source of random documents and field names.
///
/// Uses the xoshiro256** PRNG, so a failing test can be replayed from
/// [`DocumentFuzzer::seed`].
///
/// # Examples
///
/// ```
/// use ingest_field_random::DocumentFuzzer;
///
/// let mut a = DocumentFuzzer::new(Some(42));
/// let mut b = DocumentFuzzer::new(Some(42));
/// assert_eq!(a.document(), b.document());
///
/// let doc = a.document();
/// let name = a.existing_field_name(&doc).unwrap();
/// assert!(!a.can_add_field(&name, &doc));
/// ```
pub struct DocumentFuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: u64,
    pub options: RandomDocumentOptions,
    rng: Xoshiro256StarStar,
}

impl DocumentFuzzer {
    /// Create a fuzzer with an optional seed.
    ///
    /// If no seed is provided, one is drawn from `OsRng`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            options: RandomDocumentOptions::default(),
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub fn with_options(mut self, options: RandomDocumentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn document(&mut self) -> Map<String, Value> {
        RandomDocument::generate(&mut self.rng, &self.options)
    }

    pub fn leaf_value(&mut self) -> Value {
        RandomDocument::gen_leaf(&mut self.rng)
    }

    pub fn field_name(&mut self) -> String {
        random_field_name(&mut self.rng)
    }

    pub fn existing_field_name(&mut self, doc: &Map<String, Value>) -> Option<String> {
        random_existing_field_name(&mut self.rng, doc)
    }

    /// A fresh name for which [`can_add_field`] holds in `doc`.
    pub fn addable_field_name(&mut self, doc: &Map<String, Value>) -> String {
        loop {
            let name = self.field_name();
            if can_add_field(&name, doc) {
                return name;
            }
        }
    }

    pub fn can_add_field(&self, field: &str, doc: &Map<String, Value>) -> bool {
        can_add_field(field, doc)
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }
}
