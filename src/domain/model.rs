use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Liveness payload reported by `/health`. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthStatus(pub Value);

impl HealthStatus {
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    pub fn is_ok(&self) -> bool {
        self.status() == Some("ok")
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Service banner served from `/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct Player {
    pub name: String,
    pub class: String,
    pub level: i32,
    pub hp: i32,
    pub max_hp: i32,
    #[serde(rename = "currentHP")]
    pub current_hp: i32,
    pub energy: i32,
    pub max_energy: i32,
    pub adventurer_rank: String,
    pub sprite_index: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct Enemy {
    pub name: String,
    #[serde(rename = "currentHP")]
    pub current_hp: i32,
    pub max_hp: i32,
    pub is_boss: bool,
    pub just_died: bool,
    pub sprite_index: i32,
}

/// Combat scene description. Sent as-is; the client never checks the
/// contents, and unknown fields in `extra` are forwarded too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatRequest {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub enemies: Vec<Enemy>,
    #[serde(default)]
    pub combat_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default)]
    pub background: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndScreenRequest {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct LudoPiece {
    pub id: i32,
    pub position: i32,
    pub in_base: bool,
    pub in_home: bool,
    pub on_home_path: bool,
    pub home_path_index: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct LudoPlayer {
    pub jid: String,
    pub color: String,
    /// Profile picture URL or asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfp_url: Option<String>,
    pub pieces: Vec<LudoPiece>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct LudoRequest {
    pub players: Vec<LudoPlayer>,
    pub last_roll: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct TicTacToeRequest {
    /// Row-major cells, `gridSize * gridSize` long. Empty string for a free cell.
    pub board: Vec<String>,
    pub grid_size: i32,
    /// `-1` when no move has been made yet.
    pub last_move_index: i32,
    pub win_pattern: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i64,
    pub jid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardRequest {
    pub scores: Vec<LeaderboardEntry>,
}

/// Encoded image bytes (PNG) returned by the render endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct RenderedImage(Vec<u8>);

pub type CombatImage = RenderedImage;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

impl RenderedImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Informational only; bodies are returned whether or not this holds.
    pub fn has_png_signature(&self) -> bool {
        self.0.starts_with(&PNG_SIGNATURE)
    }
}

impl std::fmt::Debug for RenderedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedImage")
            .field("len", &self.0.len())
            .field("png", &self.has_png_signature())
            .finish()
    }
}

impl AsRef<[u8]> for RenderedImage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<RenderedImage> for Vec<u8> {
    fn from(image: RenderedImage) -> Self {
        image.0
    }
}

/// One Pinterest hit. The service currently answers with bare URL strings;
/// richer descriptors are kept as objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PinterestImage {
    Url(String),
    Descriptor(Map<String, Value>),
}

impl PinterestImage {
    pub fn url(&self) -> Option<&str> {
        match self {
            PinterestImage::Url(url) => Some(url),
            PinterestImage::Descriptor(fields) => fields.get("url").and_then(Value::as_str),
        }
    }
}

/// Pinterest search result.
///
/// An empty `images` list means either "nothing found" or "the service call
/// failed"; the two cannot be told apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<PinterestImage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub name: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// VS Battles search result. Same empty-list ambiguity as [`SearchResult`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterSearchResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub characters: Vec<CharacterSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CharacterSearchResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// The service reports zero hits as `null` rather than an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// VS Battles character page as scraped by the service.
///
/// The body is kept verbatim, nulls and unknown fields included; the
/// accessors read the fields the scraper normally fills in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterDetail(pub Value);

impl CharacterDetail {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|value| !value.is_null())
    }

    fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn image_url(&self) -> Option<&str> {
        self.text("imageURL")
    }

    pub fn image_width(&self) -> Option<u64> {
        self.get("imageWidth").and_then(Value::as_u64)
    }

    pub fn image_height(&self) -> Option<u64> {
        self.get("imageHeight").and_then(Value::as_u64)
    }

    pub fn summary(&self) -> Option<&str> {
        self.text("summary")
    }

    pub fn tier(&self) -> Option<&str> {
        self.text("tier")
    }

    pub fn attack_potency(&self) -> Option<&str> {
        self.text("attackPotency")
    }

    pub fn speed(&self) -> Option<&str> {
        self.text("speed")
    }

    pub fn durability(&self) -> Option<&str> {
        self.text("durability")
    }

    pub fn stamina(&self) -> Option<&str> {
        self.text("stamina")
    }

    pub fn range(&self) -> Option<&str> {
        self.text("range")
    }

    pub fn stats(&self) -> Option<&Map<String, Value>> {
        self.get("stats").and_then(Value::as_object)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_fallbacks_serialize_to_bare_lists() {
        assert_eq!(
            serde_json::to_value(SearchResult::empty()).unwrap(),
            json!({ "images": [] })
        );
        assert_eq!(
            serde_json::to_value(CharacterSearchResult::empty()).unwrap(),
            json!({ "characters": [] })
        );
    }

    #[test]
    fn pinterest_images_accept_strings_and_objects() {
        let result: SearchResult = serde_json::from_value(json!({
            "images": ["https://i.pinimg.com/a.jpg", { "url": "https://i.pinimg.com/b.jpg", "width": 236 }]
        }))
        .unwrap();
        assert_eq!(result.images.len(), 2);
        assert_eq!(result.images[0].url(), Some("https://i.pinimg.com/a.jpg"));
        assert_eq!(result.images[1].url(), Some("https://i.pinimg.com/b.jpg"));
    }

    #[test]
    fn combat_request_uses_wire_field_names() {
        let request = CombatRequest {
            players: vec![Player {
                name: "Aria".to_string(),
                class: "FIGHTER".to_string(),
                current_hp: 40,
                max_hp: 50,
                ..Default::default()
            }],
            enemies: vec![Enemy {
                name: "Slime".to_string(),
                is_boss: true,
                ..Default::default()
            }],
            combat_type: "PVE".to_string(),
            background: "forest.png".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["combatType"], "PVE");
        assert_eq!(body["background"], "forest.png");
        assert_eq!(body["players"][0]["currentHP"], 40);
        assert_eq!(body["players"][0]["maxHp"], 50);
        assert_eq!(body["enemies"][0]["isBoss"], true);
        assert!(body.get("rank").is_none());
    }

    #[test]
    fn combat_request_forwards_unknown_fields() {
        let raw = json!({
            "players": [],
            "enemies": [],
            "combatType": "PVP",
            "background": "arena.png",
            "weather": "rain"
        });
        let request: CombatRequest = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&request).unwrap(), raw);
    }

    #[test]
    fn search_results_treat_null_lists_as_empty() {
        let images: SearchResult = serde_json::from_value(json!({ "images": null })).unwrap();
        assert!(images.is_empty());

        let characters: CharacterSearchResult =
            serde_json::from_value(json!({ "characters": null })).unwrap();
        assert!(characters.is_empty());

        let missing: SearchResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing, SearchResult::empty());
    }

    #[test]
    fn character_detail_round_trips_unchanged() {
        let raw = json!({
            "name": "Goku",
            "imageURL": "https://static.wikia.nocookie.net/goku.png",
            "imageWidth": 300,
            "imageHeight": 450,
            "tier": "2-C",
            "stats": { "Lifting Strength": "Class Y" },
            "origin": "Dragon Ball"
        });
        let detail: CharacterDetail = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(detail.name(), Some("Goku"));
        assert_eq!(detail.image_width(), Some(300));
        assert_eq!(detail.stats().map(|stats| stats.len()), Some(1));
        assert_eq!(detail.get("origin"), Some(&json!("Dragon Ball")));
        assert_eq!(serde_json::to_value(&detail).unwrap(), raw);
    }

    #[test]
    fn character_detail_keeps_nulls_and_allows_missing_name() {
        let raw = json!({ "tier": null, "stats": null, "summary": "Unnamed entry" });
        let detail: CharacterDetail = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(detail.name(), None);
        assert_eq!(detail.tier(), None);
        assert_eq!(detail.stats(), None);
        assert_eq!(detail.summary(), Some("Unnamed entry"));
        assert_eq!(serde_json::to_value(&detail).unwrap(), raw);
    }

    #[test]
    fn rendered_image_detects_png_signature() {
        let png = RenderedImage::new(vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n', 0]);
        assert!(png.has_png_signature());
        assert!(!RenderedImage::new(b"GIF89a".to_vec()).has_png_signature());
        assert!(format!("{:?}", png).contains("len: 9"));
    }

    #[test]
    fn health_status_reads_status_field() {
        let health = HealthStatus(json!({ "status": "ok" }));
        assert!(health.is_ok());
        assert!(!HealthStatus(json!({ "status": "degraded" })).is_ok());
    }
}
