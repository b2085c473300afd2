//! Content blocks and their per-kind data records.
//!
//! The wire format (storage columns and API payloads) is
//! `{ "id": ..., "type": ..., "data": {...} }`. Deserialization is
//! tolerant: missing `data` keys take the kind's defaults, and a type tag
//! this build does not know becomes [`BlockBody::Unknown`] with its raw
//! payload preserved, so historical arrays round-trip losslessly.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::id::BlockId;

/// One unit of page content: a type tag plus type-specific data. The atomic
/// unit of the authoring system.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub id: BlockId,
    pub body: BlockBody,
}

impl ContentBlock {
    pub fn new(id: BlockId, body: BlockBody) -> Self {
        Self { id, body }
    }
}

/// The closed union of block payloads. A block's kind is fixed at creation;
/// changing the visual kind means deleting and re-adding.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockBody {
    Hero(HeroData),
    Text(TextData),
    ImageGallery(GalleryData),
    Cta(CtaData),
    Features(FeaturesData),
    Testimonial(TestimonialData),
    Video(VideoData),
    Faq(FaqData),
    PricingTable(PricingData),
    TeamMembers(TeamData),
    StatsCounter(StatsData),
    ContactForm(ContactFormData),
    /// Raw-HTML blocks from historical data. Recognized by the renderer,
    /// never offered by the editor.
    Html(HtmlData),
    /// Any type tag this build does not know, kept verbatim.
    Unknown { kind: String, data: Value },
}

impl BlockBody {
    /// The wire type tag for this payload.
    pub fn kind(&self) -> &str {
        match self {
            BlockBody::Hero(_) => "hero",
            BlockBody::Text(_) => "text",
            BlockBody::ImageGallery(_) => "image_gallery",
            BlockBody::Cta(_) => "cta",
            BlockBody::Features(_) => "features",
            BlockBody::Testimonial(_) => "testimonial",
            BlockBody::Video(_) => "video",
            BlockBody::Faq(_) => "faq",
            BlockBody::PricingTable(_) => "pricing_table",
            BlockBody::TeamMembers(_) => "team_members",
            BlockBody::StatsCounter(_) => "stats_counter",
            BlockBody::ContactForm(_) => "contact_form",
            BlockBody::Html(_) => "html",
            BlockBody::Unknown { kind, .. } => kind,
        }
    }

    fn from_raw(kind: &str, data: Value) -> BlockBody {
        // Historical rows sometimes carry `data: null`.
        let data = if data.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            data
        };

        fn typed<T: DeserializeOwned>(data: &Value) -> Option<T> {
            serde_json::from_value(data.clone()).ok()
        }

        let parsed = match kind {
            "hero" => typed(&data).map(BlockBody::Hero),
            "text" => typed(&data).map(BlockBody::Text),
            "image_gallery" => typed(&data).map(BlockBody::ImageGallery),
            "cta" => typed(&data).map(BlockBody::Cta),
            "features" => typed(&data).map(BlockBody::Features),
            "testimonial" => typed(&data).map(BlockBody::Testimonial),
            "video" => typed(&data).map(BlockBody::Video),
            "faq" => typed(&data).map(BlockBody::Faq),
            "pricing_table" => typed(&data).map(BlockBody::PricingTable),
            "team_members" => typed(&data).map(BlockBody::TeamMembers),
            "stats_counter" => typed(&data).map(BlockBody::StatsCounter),
            "contact_form" => typed(&data).map(BlockBody::ContactForm),
            "html" => typed(&data).map(BlockBody::Html),
            _ => None,
        };

        parsed.unwrap_or_else(|| BlockBody::Unknown {
            kind: kind.to_string(),
            data,
        })
    }

    fn data_value<E: serde::ser::Error>(&self) -> Result<Value, E> {
        let value = match self {
            BlockBody::Hero(d) => serde_json::to_value(d),
            BlockBody::Text(d) => serde_json::to_value(d),
            BlockBody::ImageGallery(d) => serde_json::to_value(d),
            BlockBody::Cta(d) => serde_json::to_value(d),
            BlockBody::Features(d) => serde_json::to_value(d),
            BlockBody::Testimonial(d) => serde_json::to_value(d),
            BlockBody::Video(d) => serde_json::to_value(d),
            BlockBody::Faq(d) => serde_json::to_value(d),
            BlockBody::PricingTable(d) => serde_json::to_value(d),
            BlockBody::TeamMembers(d) => serde_json::to_value(d),
            BlockBody::StatsCounter(d) => serde_json::to_value(d),
            BlockBody::ContactForm(d) => serde_json::to_value(d),
            BlockBody::Html(d) => serde_json::to_value(d),
            BlockBody::Unknown { data, .. } => Ok(data.clone()),
        };
        value.map_err(E::custom)
    }
}

/// The `{id, type, data}` wire shape.
#[derive(Serialize, Deserialize)]
struct RawBlock {
    id: BlockId,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

impl Serialize for ContentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawBlock {
            id: self.id.clone(),
            kind: self.body.kind().to_string(),
            data: self.body.data_value()?,
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBlock::deserialize(deserializer)?;
        let body = BlockBody::from_raw(&raw.kind, raw.data);
        Ok(ContentBlock { id: raw.id, body })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroData {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub primary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextData {
    /// Rich HTML authored by the operator. Sanitized at render time, not
    /// here.
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryLayout {
    #[default]
    Grid,
    Carousel,
    Masonry,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryData {
    /// Public image URLs produced by the media upload endpoint.
    pub images: Vec<String>,
    pub layout: GalleryLayout,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaData {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub icon: IconId,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesData {
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialData {
    pub quote: String,
    pub author_name: String,
    pub author_title: String,
    pub author_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoData {
    pub youtube_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqData {
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingData {
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamData {
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub prefix: String,
    pub value: String,
    pub suffix: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsData {
    pub stats: Vec<StatItem>,
}

/// Which inputs a contact form shows. `Name` and `Email` are always
/// rendered regardless of the configured subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Subject,
    Message,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormData {
    pub title: String,
    pub description: String,
    /// Operator-side routing hint for submission notifications. Never
    /// emitted into public markup.
    pub email_to: String,
    pub fields: Vec<ContactField>,
    pub button_text: String,
}

impl Default for ContactFormData {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            email_to: String::new(),
            fields: vec![ContactField::Name, ContactField::Email, ContactField::Message],
            button_text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlData {
    pub content: String,
}

/// Enumerated icon identifiers for feature items and editor metadata.
/// Unknown names collapse to [`IconId::Circle`] at parse time, so lookups
/// downstream are total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
    #[serde(rename = "box")]
    PackageBox,
    Truck,
    Shield,
    Star,
    Heart,
    Globe,
    Leaf,
    Layers,
    Zap,
    Award,
    Users,
    Settings,
    Check,
    Phone,
    Mail,
    Image,
    Film,
    Quote,
    HelpCircle,
    Tag,
    BarChart,
    Type,
    Megaphone,
    Code,
    #[default]
    #[serde(other)]
    Circle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn block_array_round_trips_unchanged() {
        let stored = json!([
            {"id": "a", "type": "text", "data": {"content": "<p>Hi</p>"}},
            {"id": "b", "type": "faq", "data": {"items": [
                {"question": "Q", "answer": "A"}
            ]}},
        ]);
        let blocks: Vec<ContentBlock> = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(blocks[0].id.as_str(), "a");
        assert!(matches!(blocks[0].body, BlockBody::Text(_)));

        let back = serde_json::to_value(&blocks).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn unknown_type_preserves_tag_and_data() {
        let stored = json!([
            {"id": "x", "type": "countdown", "data": {"deadline": "2026-01-01"}}
        ]);
        let blocks: Vec<ContentBlock> = serde_json::from_value(stored.clone()).unwrap();
        match &blocks[0].body {
            BlockBody::Unknown { kind, data } => {
                assert_eq!(kind, "countdown");
                assert_eq!(data["deadline"], "2026-01-01");
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&blocks).unwrap(), stored);
    }

    #[test]
    fn legacy_html_type_is_recognized() {
        let block: ContentBlock =
            serde_json::from_value(json!({"id": "h", "type": "html", "data": {"content": "<b>x</b>"}}))
                .unwrap();
        assert!(matches!(block.body, BlockBody::Html(ref d) if d.content == "<b>x</b>"));
    }

    #[test]
    fn missing_data_keys_take_defaults() {
        let block: ContentBlock =
            serde_json::from_value(json!({"id": "p", "type": "hero", "data": {"title": "Welcome"}}))
                .unwrap();
        match block.body {
            BlockBody::Hero(d) => {
                assert_eq!(d.title, "Welcome");
                assert_eq!(d.subtitle, "");
                assert_eq!(d.background_image, "");
            }
            other => panic!("expected Hero, got {other:?}"),
        }
    }

    #[test]
    fn null_or_absent_data_parses_as_empty() {
        let a: ContentBlock =
            serde_json::from_value(json!({"id": "1", "type": "text", "data": null})).unwrap();
        let b: ContentBlock =
            serde_json::from_value(json!({"id": "2", "type": "text"})).unwrap();
        assert!(matches!(a.body, BlockBody::Text(ref d) if d.content.is_empty()));
        assert!(matches!(b.body, BlockBody::Text(ref d) if d.content.is_empty()));
    }

    #[test]
    fn malformed_data_degrades_to_unknown_but_round_trips() {
        // `images` should be an array; a scalar must not be silently dropped.
        let stored = json!([
            {"id": "g", "type": "image_gallery", "data": {"images": "not-a-list"}}
        ]);
        let blocks: Vec<ContentBlock> = serde_json::from_value(stored.clone()).unwrap();
        assert!(matches!(blocks[0].body, BlockBody::Unknown { .. }));
        assert_eq!(serde_json::to_value(&blocks).unwrap(), stored);
    }

    #[test]
    fn unknown_icon_name_collapses_to_fallback() {
        let item: FeatureItem =
            serde_json::from_value(json!({"icon": "rocket-9000", "title": "t"})).unwrap();
        assert_eq!(item.icon, IconId::Circle);

        let known: FeatureItem =
            serde_json::from_value(json!({"icon": "truck", "title": "t"})).unwrap();
        assert_eq!(known.icon, IconId::Truck);
    }

    #[test]
    fn contact_form_defaults_include_required_fields() {
        let d = ContactFormData::default();
        assert!(d.fields.contains(&ContactField::Name));
        assert!(d.fields.contains(&ContactField::Email));
    }
}
