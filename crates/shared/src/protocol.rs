use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Event identifier attached to mock ticket purchases.
pub const DEFAULT_EVENT_ID: &str = "AVANG-001";

/// List envelope returned by every content endpoint. Entries stay raw until
/// [`decode_items`](Self::decode_items) so one malformed record cannot hide the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Value>,
}

impl ItemsResponse {
    /// Decodes each entry on its own, dropping the ones that do not fit `T`.
    /// Returns the decoded items and how many were dropped.
    pub fn decode_items<T: DeserializeOwned>(self) -> (Vec<T>, usize) {
        let total = self.items.len();
        let decoded: Vec<T> = self
            .items
            .into_iter()
            .filter_map(|raw| serde_json::from_value(raw).ok())
            .collect();
        let skipped = total - decoded.len();
        (decoded, skipped)
    }
}

/// `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveChannel {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stream_url: String,
}

impl LiveChannel {
    pub fn is_embed(&self) -> bool {
        self.stream_url.contains("youtube.com") || self.stream_url.contains("embed")
    }

    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => "Live streaming now",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_url: String,
}

impl Video {
    pub fn is_embed(&self) -> bool {
        self.video_url.contains("youtube.com")
    }

    pub fn byline(&self) -> String {
        match self.genre.as_deref() {
            Some(genre) if !genre.is_empty() => format!("{} • {genre}", self.artist),
            _ => self.artist.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synopsis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub wallet_address: String,
    pub event_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub token_symbol: String,
    pub tx_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_items_field_decodes_as_empty_list() {
        let parsed: ItemsResponse = serde_json::from_str("{}").expect("decode");
        assert!(parsed.items.is_empty());
        let parsed: ItemsResponse = serde_json::from_str(r#"{"items":null}"#).expect("decode");
        let (genres, skipped) = parsed.decode_items::<Genre>();
        assert!(genres.is_empty());
        assert_eq!(skipped, 0);
    }

    #[test]
    fn decodes_records_with_backend_id_and_missing_optionals() {
        let parsed: ItemsResponse = serde_json::from_str(
            r#"{"items":[{"_id":"abc","title":"Night Set","schedule":"Fri 22:00","synopsis":"Late beats"}]}"#,
        )
        .expect("decode");
        let (shows, _) = parsed.decode_items::<Show>();
        let show = &shows[0];
        assert_eq!(show.id.as_deref(), Some("abc"));
        assert_eq!(show.title, "Night Set");
        assert_eq!(show.poster, None);
    }

    #[test]
    fn embed_detection_matches_player_choice() {
        let mut channel = LiveChannel {
            id: None,
            name: "Main".into(),
            description: None,
            stream_url: "https://cdn.example.com/live.m3u8".into(),
        };
        assert!(!channel.is_embed());
        channel.stream_url = "https://player.example.com/embed/42".into();
        assert!(channel.is_embed());
        assert_eq!(channel.description_or_default(), "Live streaming now");

        let video = Video {
            id: None,
            title: "Track".into(),
            artist: "Band".into(),
            genre: None,
            video_url: "https://www.youtube.com/embed/xyz".into(),
        };
        assert!(video.is_embed());
        assert_eq!(video.byline(), "Band");
    }

    #[test]
    fn byline_appends_genre_when_present() {
        let video = Video {
            id: None,
            title: "Track".into(),
            artist: "Band".into(),
            genre: Some("Afrobeat".into()),
            video_url: String::new(),
        };
        assert_eq!(video.byline(), "Band • Afrobeat");
    }

    #[test]
    fn malformed_entry_does_not_hide_the_rest() {
        let parsed: ItemsResponse = serde_json::from_str(
            r#"{"items":[{"title":"Good","artist":"A","video_url":"u"},{"title":5}]}"#,
        )
        .expect("decode");
        let (videos, skipped) = parsed.decode_items::<Video>();
        assert_eq!(skipped, 1);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Good");
    }

    #[test]
    fn null_text_fields_read_as_empty() {
        let parsed: ItemsResponse = serde_json::from_str(
            r#"{"items":[{"title":"Night Set","schedule":null,"synopsis":"x","poster":null}]}"#,
        )
        .expect("decode");
        let (shows, skipped) = parsed.decode_items::<Show>();
        assert_eq!(skipped, 0);
        assert_eq!(shows[0].title, "Night Set");
        assert_eq!(shows[0].schedule, "");
        assert_eq!(shows[0].poster, None);
    }
}
