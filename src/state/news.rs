use std::sync::{Arc, RwLock};

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// Wire pattern for `created_at`: local time, whole seconds, no offset.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single news entry held in memory.
///
/// `created_at` is stamped by the store when the entry is inserted and is
/// never taken from a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: String,
    pub headline: String,
    pub author: String,
    pub description: String,
    pub created_at: DateTime<Local>,
}

/// External shape of a [`News`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsView {
    pub id: String,
    #[serde(rename = "title")]
    pub headline: String,
    #[serde(rename = "autor")]
    pub author: String,
    pub description: String,
    pub time: String,
}

/// Body accepted by `POST /newsReport`.
///
/// Missing keys and `null` values become empty strings. There is no
/// timestamp field: a `time` key in the request is dropped during
/// deserialization and the store stamps the entry itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewNews {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "title", deserialize_with = "null_as_empty")]
    pub headline: String,
    #[serde(rename = "autor", deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl NewNews {
    /// Turn the payload into a stored entry stamped with `created_at`.
    pub fn stamp(self, created_at: DateTime<Local>) -> News {
        News {
            id: self.id,
            headline: self.headline,
            author: self.author,
            description: self.description,
            created_at,
        }
    }
}

/// Ordered sequence of entries, in insertion order.
pub type NewsList = Vec<News>;

/// Shared store handed to every request handler.
///
/// Appends take the write guard; listing and lookups share the read guard.
pub type NewsStore = Arc<RwLock<NewsList>>;

/// Create the store used by the server, pre-populated with the seed entries
/// stamped with the current time.
pub fn new_store() -> NewsStore {
    Arc::new(RwLock::new(seed_news(Local::now())))
}

/// Create a store with no entries.
#[cfg(test)]
pub fn empty_store() -> NewsStore {
    Arc::new(RwLock::new(Vec::new()))
}

/// The three entries present at startup, in their listing order.
pub fn seed_news(created_at: DateTime<Local>) -> NewsList {
    let seed = |id: &str, headline: &str, author: &str, description: &str| News {
        id: id.to_string(),
        headline: headline.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        created_at,
    };

    vec![
        seed(
            "1",
            "The Nigerian Economy",
            "Jude Akin",
            "The Nigerian economy is becoming worse by the day and there is very little an average man can do about it.",
        ),
        seed(
            "2",
            "2024 bull run and what to expect",
            "John Terry",
            "The 2024 bull run is fast approaching, better stack up your coin so as not to be left out.",
        ),
        seed(
            "3",
            "Crypto and the new evolution",
            "Emmanuel Mark",
            // trailing space is part of the seed text
            "Seems like the world is now beginning to accept the new evolution and the fact that crypto is here to stay ",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_ordered_and_stamped() {
        let now = Local::now();
        let seed = seed_news(now);

        let ids: Vec<&str> = seed.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(seed.iter().all(|n| n.created_at == now));
        assert_eq!(seed[1].author, "John Terry");
        assert!(seed[2].description.ends_with("stay "));
    }

    #[test]
    fn new_store_is_seeded_and_empty_store_is_not() {
        assert_eq!(new_store().read().unwrap().len(), 3);
        assert!(empty_store().read().unwrap().is_empty());
    }

    #[test]
    fn payload_defaults_missing_fields_and_drops_time() {
        let payload: NewNews =
            serde_json::from_str(r#"{"id":"9","time":"1999-01-01 00:00:00"}"#).unwrap();
        assert_eq!(payload.id, "9");
        assert_eq!(payload.headline, "");
        assert_eq!(payload.author, "");
        assert_eq!(payload.description, "");
    }

    #[test]
    fn payload_null_fields_become_empty() {
        let payload: NewNews =
            serde_json::from_str(r#"{"id":"5","title":null,"autor":null,"description":"d"}"#)
                .unwrap();
        assert_eq!(payload.id, "5");
        assert_eq!(payload.headline, "");
        assert_eq!(payload.author, "");
        assert_eq!(payload.description, "d");
    }

    #[test]
    fn payload_rejects_non_string_fields() {
        assert!(serde_json::from_str::<NewNews>(r#"{"id":4}"#).is_err());
    }

    #[test]
    fn view_uses_wire_field_names() {
        let view = NewsView {
            id: "1".into(),
            headline: "h".into(),
            author: "a".into(),
            description: "d".into(),
            time: "2024-01-01 00:00:00".into(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "title": "h",
                "autor": "a",
                "description": "d",
                "time": "2024-01-01 00:00:00",
            })
        );
    }
}
