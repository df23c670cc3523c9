use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{FetchError, SiteError};

/// Sentinel category meaning "no filter".
pub const ALL_CATEGORY: &str = "All";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMenuItem")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Wire shape of a menu entry. Backends disagree on the id key and on how
/// prices are typed, so both are read loosely.
#[derive(Debug, Deserialize)]
struct RawMenuItem {
    #[serde(default)]
    id: serde_json::Value,
    #[serde(default, rename = "_id")]
    underscore_id: serde_json::Value,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    price: f64,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl From<RawMenuItem> for MenuItem {
    fn from(raw: RawMenuItem) -> Self {
        // `_id` wins over `id`
        let id = Some(id_string(&raw.underscore_id))
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| id_string(&raw.id));

        Self {
            id,
            name: raw.name.unwrap_or_default(),
            description: raw.description,
            price: raw.price,
            category: raw.category,
            tags: raw.tags,
        }
    }
}

fn id_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        // document-store ids: { "$oid": "..." }
        serde_json::Value::Object(map) => map
            .get("$oid")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

/// Numbers, numeric strings and null. Anything unreadable becomes 0.0.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let price = match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) if s.trim().is_empty() => Some(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
        serde_json::Value::Null => Some(0.0),
        _ => None,
    };
    Ok(price.unwrap_or_else(|| {
        tracing::warn!("Unreadable menu price {}, showing 0.00", value);
        0.0
    }))
}

impl MenuItem {
    /// Non-empty category, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// 渲染層用的 key：有 id 用 id，否則退回 name
    pub fn display_key(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }

    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

/// Body of `GET /api/menu`.
///
/// `items` is kept as raw JSON so that a missing or non-array field can be
/// read as an empty menu instead of a decode failure. A `null` document is
/// still a failure.
#[derive(Debug, Clone, Default)]
pub struct MenuResponse {
    pub items: serde_json::Value,
}

impl MenuResponse {
    /// Only an object's `items` key is read; other non-null documents have no items.
    pub fn from_json(body: serde_json::Value) -> Result<Self, FetchError> {
        let items = match body {
            serde_json::Value::Null => {
                return Err(FetchError::Decode("menu body is null".to_string()))
            }
            serde_json::Value::Object(mut map) => map.remove("items").unwrap_or_default(),
            _ => serde_json::Value::Null,
        };
        Ok(Self { items })
    }

    pub fn into_items(self) -> Vec<MenuItem> {
        let serde_json::Value::Array(raw) = self.items else {
            if !self.items.is_null() {
                tracing::warn!("Menu 'items' is not an array, treating as empty");
            }
            return Vec::new();
        };

        let mut items = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<MenuItem>(value) {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!("Skipping malformed menu item #{}: {}", index, e),
            }
        }
        items
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const REQUIRED: [ContactField; 3] =
        [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "subject" => Ok(ContactField::Subject),
            "message" => Ok(ContactField::Message),
            other => Err(SiteError::InvalidConfigValueError {
                field: "contact_field".to_string(),
                value: other.to_string(),
                reason: "Expected one of: name, email, subject, message".to_string(),
            }),
        }
    }
}

/// Wire body of `POST /api/contact`. Subject is always sent, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Required fields that are still blank.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

/// Body of a contact response. Anything other than `{ "ok": bool }` fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub const SENDING: &'static str = "Sending…";
    pub const THANKS: &'static str = "Thanks! We will get back to you soon.";

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Loading => Some(Self::SENDING),
            SubmissionStatus::Success(m) | SubmissionStatus::Error(m) => Some(m),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionStatus::Success(_) | SubmissionStatus::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

impl MenuState {
    pub const LOAD_FAILED: &'static str = "Unable to load menu right now.";
}
