//! Cloud Firestore REST client for the contact-message collection.
//!
//! Uses the documents REST API: `documents:runQuery` for the ordered
//! snapshot and a masked `PATCH` for the read flag. Firestore's typed
//! value encoding (`stringValue`, `booleanValue`, `timestampValue`) is
//! decoded here so callers only ever see plain Rust types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::ProjectConfig;
use crate::error::{Error, Result};

/// One contact-form submission as stored in Firestore.
///
/// `read` is always concrete: a document without the field decodes as
/// unread, so downstream logic never branches on a missing flag.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDocument {
    /// Document id (final path segment of the resource name).
    pub id: String,
    /// Submitter name.
    pub name: String,
    /// Submitter phone number.
    pub phone: String,
    /// Submitter email address.
    pub email: String,
    /// Service the inquiry is about.
    pub service: String,
    /// Free-text message body.
    pub body: String,
    /// Submission instant.
    pub timestamp: DateTime<Utc>,
    /// Whether an operator has opened the message.
    pub read: bool,
}

/// A single Firestore typed value. Only the kinds the message schema
/// uses are modeled.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypedValue {
    string_value: Option<String>,
    boolean_value: Option<bool>,
    timestamp_value: Option<DateTime<Utc>>,
}

/// Raw document from the REST API.
#[derive(Debug, Deserialize)]
struct RawDocument {
    name: String,
    #[serde(default)]
    fields: std::collections::BTreeMap<String, TypedValue>,
}

/// One element of a `runQuery` response stream. Results without a
/// `document` (e.g. the bare `readTime` entry of an empty query) are
/// skipped.
#[derive(Debug, Deserialize)]
struct QueryResult {
    document: Option<RawDocument>,
}

/// Firestore error envelope.
#[derive(Debug, Deserialize)]
struct StoreErrorEnvelope {
    error: StoreErrorBody,
}

#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
}

impl RawDocument {
    /// Decodes the raw typed fields into a [`MessageDocument`].
    fn into_message(self) -> Result<MessageDocument> {
        let id = self
            .name
            .rsplit('/')
            .next()
            .unwrap_or(&self.name)
            .to_owned();

        let timestamp = self
            .fields
            .get("timestamp")
            .and_then(|v| v.timestamp_value)
            .ok_or_else(|| {
                Error::MalformedDocument(format!("{id}: missing or non-timestamp `timestamp`"))
            })?;

        let text = |field: &str| {
            self.fields
                .get(field)
                .and_then(|v| v.string_value.clone())
                .unwrap_or_default()
        };

        Ok(MessageDocument {
            name: text("name"),
            phone: text("phone"),
            email: text("email"),
            service: text("service"),
            body: text("message"),
            // Absent flag means the form wrote the document and nobody
            // has opened it yet.
            read: self
                .fields
                .get("read")
                .and_then(|v| v.boolean_value)
                .unwrap_or(false),
            timestamp,
            id,
        })
    }
}

/// Client for the message collection of one project.
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    http: reqwest::Client,
    config: ProjectConfig,
}

impl FirestoreClient {
    /// Creates a client for the given project.
    #[must_use]
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetches the full message collection ordered by `timestamp`
    /// descending (newest first), as the server returns it.
    ///
    /// Documents that fail to decode are logged and skipped rather than
    /// failing the whole snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthenticated`] when the token is rejected,
    /// [`Error::Api`] for other server-side rejections.
    pub async fn fetch_messages(&self, id_token: &str) -> Result<Vec<MessageDocument>> {
        let body = serde_json::json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.config.collection }],
                "orderBy": [{
                    "field": { "fieldPath": "timestamp" },
                    "direction": "DESCENDING",
                }],
            }
        });

        let response = self
            .http
            .post(self.config.run_query_url())
            .bearer_auth(id_token)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(decode_store_error(response).await);
        }

        let results: Vec<QueryResult> = response.json().await?;
        let mut messages = Vec::with_capacity(results.len());
        for raw in results.into_iter().filter_map(|r| r.document) {
            match raw.into_message() {
                Ok(message) => messages.push(message),
                Err(e) => tracing::warn!("skipping undecodable document: {e}"),
            }
        }

        tracing::debug!(count = messages.len(), "fetched message snapshot");
        Ok(messages)
    }

    /// Sets the `read` flag of one document to `true`.
    ///
    /// The update mask touches only `read`; re-marking an already-read
    /// document is a plain overwrite and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthenticated`] when the token is rejected,
    /// [`Error::Api`] for other server-side rejections.
    pub async fn set_read(&self, id_token: &str, document_id: &str) -> Result<()> {
        let url = format!(
            "{}?updateMask.fieldPaths=read",
            self.config.document_url(document_id)
        );
        let body = serde_json::json!({
            "fields": { "read": { "booleanValue": true } }
        });

        let response = self
            .http
            .patch(&url)
            .bearer_auth(id_token)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(decode_store_error(response).await);
        }

        tracing::debug!(document_id, "marked read");
        Ok(())
    }
}

/// Decodes a non-2xx Firestore response into an [`Error`].
async fn decode_store_error(response: reqwest::Response) -> Error {
    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Error::Unauthenticated;
    }
    match response.json::<StoreErrorEnvelope>().await {
        Ok(envelope) if envelope.error.status == "UNAUTHENTICATED" => Error::Unauthenticated,
        Ok(envelope) => Error::api(envelope.error.status, envelope.error.message),
        Err(_) => Error::api(status.as_str(), "unrecognized error response"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw(name: &str, fields_json: &str) -> RawDocument {
        let json = format!(r#"{{ "name": "{name}", "fields": {fields_json} }}"#);
        serde_json::from_str(&json).unwrap()
    }

    const FULL_FIELDS: &str = r#"{
        "name": { "stringValue": "Ada" },
        "phone": { "stringValue": "+1 555 0100" },
        "email": { "stringValue": "ada@example.com" },
        "service": { "stringValue": "Tax advisory" },
        "message": { "stringValue": "Please call me back." },
        "timestamp": { "timestampValue": "2026-08-29T10:15:00Z" },
        "read": { "booleanValue": true }
    }"#;

    #[test]
    fn document_decodes_with_id_from_resource_name() {
        let doc = raw(
            "projects/p/databases/(default)/documents/messages/m42",
            FULL_FIELDS,
        )
        .into_message()
        .unwrap();
        assert_eq!(doc.id, "m42");
        assert_eq!(doc.name, "Ada");
        assert_eq!(doc.body, "Please call me back.");
        assert!(doc.read);
        assert_eq!(doc.timestamp.to_rfc3339(), "2026-08-29T10:15:00+00:00");
    }

    #[test]
    fn absent_read_flag_normalizes_to_unread() {
        let doc = raw(
            "projects/p/databases/(default)/documents/messages/m1",
            r#"{ "timestamp": { "timestampValue": "2026-08-29T10:15:00Z" } }"#,
        )
        .into_message()
        .unwrap();
        assert!(!doc.read);
        assert_eq!(doc.name, "");
    }

    #[test]
    fn missing_timestamp_is_malformed() {
        let result = raw(
            "projects/p/databases/(default)/documents/messages/m1",
            r#"{ "name": { "stringValue": "Ada" } }"#,
        )
        .into_message();
        assert!(matches!(result, Err(Error::MalformedDocument(_))));
    }

    #[test]
    fn query_results_without_document_are_skippable() {
        // An empty collection answers with a single readTime-only entry.
        let results: Vec<QueryResult> =
            serde_json::from_str(r#"[ { "readTime": "2026-08-29T10:15:00Z" } ]"#).unwrap();
        assert!(results[0].document.is_none());
    }

    #[test]
    fn unauthenticated_status_maps_to_unauthenticated() {
        let envelope: StoreErrorEnvelope = serde_json::from_str(
            r#"{ "error": { "code": 401, "message": "bad token", "status": "UNAUTHENTICATED" } }"#,
        )
        .unwrap();
        assert_eq!(envelope.error.status, "UNAUTHENTICATED");
    }
}
