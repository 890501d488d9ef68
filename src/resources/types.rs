//! Wire models for the translation-platform entities.
//!
//! Field names follow the service's JSON exactly, including its
//! misspelled locale key. Missing fields decode to their default
//! values rather than failing the whole entity.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::pagination::Link;

// ============================================================================
// Timestamps
// ============================================================================

/// Point in time carried on the wire as whole epoch milliseconds.
///
/// Decoding truncates to whole seconds; encoding emits milliseconds
/// with a zero fractional second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(pub DateTime<Utc>);

impl Default for Timestamp {
    fn default() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        Utc.timestamp_opt(millis / 1000, 0)
            .single()
            .map(Timestamp)
            .ok_or_else(|| de::Error::custom("timestamp out of range"))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0.timestamp() * 1000)
    }
}

// ============================================================================
// Actions
// ============================================================================

/// Hypermedia action advertised on an entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub name: String,
    pub method: String,
    pub href: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub fields: Vec<Field>,
}

/// Input field an [`Action`] accepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
}

// ============================================================================
// Communities and projects
// ============================================================================

/// Community a credential belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Community {
    pub actions: Vec<Action>,
    pub properties: CommunityProperties,
    pub rel: Vec<String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityProperties {
    pub title: String,
    pub id: String,
}

/// Translation project inside a community.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub properties: ProjectProperties,
    pub rel: Vec<String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectProperties {
    pub creation_date: Timestamp,
    pub workflow_id: String,
    pub callback_url: String,
    pub due_date: Timestamp,
    pub title: String,
    pub community_id: String,
    pub id: String,
}

// ============================================================================
// Documents
// ============================================================================

/// Uploaded document with its source locale and translation status.
///
/// The wire shape nests the locale and status as the first two members
/// of the document's entity block rather than as named keys, so this
/// type carries its own decoder.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    pub properties: DocumentProperties,
    pub locale: Locale,
    pub status: Status,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentProperties {
    pub project_id: String,
    pub upload_date: Timestamp,
    pub title: String,
    pub external_url: String,
    pub name: String,
    pub id: String,
    pub extension: String,
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct Raw {
            properties: DocumentProperties,
            entities: Vec<serde_json::Value>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut entities = raw.entities.into_iter();
        match (entities.next(), entities.next()) {
            (Some(locale), Some(status)) => Ok(Self {
                properties: raw.properties,
                locale: serde_json::from_value(locale).map_err(de::Error::custom)?,
                status: serde_json::from_value(status).map_err(de::Error::custom)?,
            }),
            _ => Err(de::Error::custom(
                "document entity block must carry locale and status",
            )),
        }
    }
}

// ============================================================================
// Translations and status
// ============================================================================

/// Translation requested for a document in one target locale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub properties: TranslationProperties,
    pub rel: Vec<String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationProperties {
    pub title: String,
    pub locale_code: String,
    pub percent_complete: u64,
    pub status: String,
}

/// Processing status of a document upload or translation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub properties: StatusProperties,
    pub links: Vec<Link>,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusProperties {
    pub title: String,
    pub id: String,
    pub progress: u64,
    pub count: StatusCount,
}

/// Per-unit breakdown of processed content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCount {
    pub segment: StatusCountPart,
    pub word: StatusCountPart,
    pub format_tag: StatusCountPart,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCountPart {
    pub total: u64,
    pub unique: u64,
}

// ============================================================================
// Locales
// ============================================================================

/// Locale attached to a document or translation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub properties: LocaleProperties,
    pub rel: Vec<String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleProperties {
    pub code: String,
    // The service misspells this key; match it.
    #[serde(rename = "lanuage_code")]
    pub language_code: String,
    pub country_code: String,
    pub title: String,
    pub language: String,
    pub country: String,
}
