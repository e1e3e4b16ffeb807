//! Project connection settings and endpoint URLs.

use serde::{Deserialize, Serialize};

const IDENTITY_TOOLKIT_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";

/// Connection settings for one Firebase project.
///
/// These identify endpoints only; they carry no secrets beyond the web
/// API key, which is not a credential in the Firebase model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Web API key for Identity Toolkit requests.
    pub api_key: String,
    /// Firebase project id (e.g. `acme-consultancy`).
    pub project_id: String,
    /// Firestore collection holding contact-form submissions.
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_collection() -> String {
    "messages".to_owned()
}

impl ProjectConfig {
    /// URL for an Identity Toolkit account endpoint
    /// (`signInWithPassword`, `sendOobCode`, ...).
    #[must_use]
    pub fn identity_url(&self, endpoint: &str) -> String {
        format!("{IDENTITY_TOOLKIT_BASE}/accounts:{endpoint}?key={}", self.api_key)
    }

    /// Resource name of the documents root for the default database.
    #[must_use]
    pub fn documents_root(&self) -> String {
        format!(
            "projects/{}/databases/(default)/documents",
            self.project_id
        )
    }

    /// URL for `documents:runQuery` on the default database.
    #[must_use]
    pub fn run_query_url(&self) -> String {
        format!("{FIRESTORE_BASE}/{}:runQuery", self.documents_root())
    }

    /// URL for patching a single document in the configured collection.
    #[must_use]
    pub fn document_url(&self, document_id: &str) -> String {
        format!(
            "{FIRESTORE_BASE}/{}/{}/{document_id}",
            self.documents_root(),
            self.collection
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> ProjectConfig {
        ProjectConfig {
            api_key: "test-key".into(),
            project_id: "acme-consultancy".into(),
            collection: "messages".into(),
        }
    }

    #[test]
    fn identity_url_carries_api_key() {
        assert_eq!(
            config().identity_url("signInWithPassword"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=test-key"
        );
    }

    #[test]
    fn document_url_targets_configured_collection() {
        assert_eq!(
            config().document_url("abc123"),
            "https://firestore.googleapis.com/v1/projects/acme-consultancy/databases/(default)/documents/messages/abc123"
        );
    }

    #[test]
    fn collection_defaults_to_messages() {
        let parsed: ProjectConfig =
            serde_json::from_str(r#"{"api_key":"k","project_id":"p"}"#).unwrap();
        assert_eq!(parsed.collection, "messages");
    }
}
