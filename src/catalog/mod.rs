//! The offer catalog: the spare capacity dataset, loaded once at startup
//! and immutable afterwards. Row order is the identifier space — the first
//! row is offer 1 — so match results can be joined back by position.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One row of the spare capacity dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Offer {
    #[serde(rename = "Type")]
    pub offer_type: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Available_From")]
    pub available_from: String,
    #[serde(rename = "Available_To")]
    pub available_to: String,
}

/// The full ordered set of offers. Never mutated after construction, so it
/// is safe to share behind an `Arc` across concurrent request handlers.
#[derive(Debug)]
pub struct Catalog {
    offers: Vec<Offer>,
}

impl Catalog {
    /// Read the dataset from a CSV file with headers
    /// `Type,Location,Description,Available_From,Available_To`.
    ///
    /// A missing or malformed file is an error — there is no partial or
    /// fallback catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open offer dataset at {}", path.display()))?;

        let mut offers = Vec::new();
        for (row, record) in reader.deserialize().enumerate() {
            let offer: Offer = record
                .with_context(|| format!("malformed offer row {} in {}", row + 1, path.display()))?;
            offers.push(offer);
        }

        Ok(Self { offers })
    }

    /// Build a catalog directly from offers. Used by tests.
    pub fn from_offers(offers: Vec<Offer>) -> Self {
        Self { offers }
    }

    /// Look up an offer by its 1-based id.
    pub fn get(&self, id: usize) -> Option<&Offer> {
        id.checked_sub(1).and_then(|idx| self.offers.get(idx))
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Offers in row order.
    pub fn iter(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter()
    }
}
