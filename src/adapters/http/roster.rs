//! Spreadsheet-backed roster adapter
//!
//! Reads the authorized-identifier column of a fixed spreadsheet through
//! the Sheets values endpoint. The whole column is re-fetched on every
//! lookup so a roster edit takes effect immediately.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::core::error::DependencyError;
use crate::core::ports::RosterStore;

/// Base URL of the spreadsheet values API
const SHEETS_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Wire shape of a values response
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Roster lookup against a spreadsheet column
///
/// The range is addressed so the header row is already skipped (the
/// default reads the 2nd column from row 2 down). Matching is exact on
/// the digit string.
#[derive(Debug, Clone)]
pub struct SheetsRoster {
    client: reqwest::Client,
    document_id: String,
    range: String,
    key: String,
}

impl SheetsRoster {
    /// Create a roster reader with an already-loaded credential
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        document_id: impl Into<String>,
        range: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            document_id: document_id.into(),
            range: range.into(),
            key: key.into(),
        }
    }

    /// Create a roster reader, loading the credential from a local key
    /// file
    ///
    /// A missing or unreadable key file is a construction-time error;
    /// lookups never run with an empty credential.
    pub fn with_key_file(
        client: reqwest::Client,
        document_id: impl Into<String>,
        range: impl Into<String>,
        key_file: &Path,
    ) -> anyhow::Result<Self> {
        let key = fs::read_to_string(key_file)
            .with_context(|| format!("cannot read roster key file: {}", key_file.display()))?
            .trim()
            .to_string();
        anyhow::ensure!(!key.is_empty(), "roster key file is empty: {}", key_file.display());
        Ok(Self::new(client, document_id, range, key))
    }
}

impl RosterStore for SheetsRoster {
    async fn is_authorized(&self, identifier: &str) -> Result<bool, DependencyError> {
        let url = format!("{SHEETS_ENDPOINT}/{}/values/{}", self.document_id, self.range);
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.key.as_str())])
            .send()
            .await
            .map_err(|err| DependencyError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DependencyError::Status(status.as_u16()));
        }

        let range: ValueRange = response
            .json()
            .await
            .map_err(|err| DependencyError::InvalidResponse(err.to_string()))?;

        Ok(range
            .values
            .iter()
            .filter_map(|row| row.first())
            .any(|cell| cell == identifier))
    }
}
