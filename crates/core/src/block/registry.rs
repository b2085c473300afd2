//! Single source of truth for the closed block-type set: wire tags,
//! bilingual editor copy, menu icons, and the data a freshly added block
//! starts with.

use crate::lang::Lang;

use super::model::{
    BlockBody, ContactFormData, CtaData, FaqData, FeaturesData, GalleryData, HeroData, HtmlData,
    IconId, PricingData, StatsData, TeamData, TestimonialData, TextData, VideoData,
};

/// The closed set of block kinds the system understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Hero,
    Text,
    ImageGallery,
    Cta,
    Features,
    Testimonial,
    Video,
    Faq,
    PricingTable,
    TeamMembers,
    StatsCounter,
    ContactForm,
    Html,
}

impl BlockKind {
    /// Every kind, including renderer-only legacy kinds.
    pub const ALL: [BlockKind; 13] = [
        BlockKind::Hero,
        BlockKind::Text,
        BlockKind::ImageGallery,
        BlockKind::Cta,
        BlockKind::Features,
        BlockKind::Testimonial,
        BlockKind::Video,
        BlockKind::Faq,
        BlockKind::PricingTable,
        BlockKind::TeamMembers,
        BlockKind::StatsCounter,
        BlockKind::ContactForm,
        BlockKind::Html,
    ];

    /// Kinds the editor's add-block menu offers. Excludes `html`, which
    /// only exists in historical data.
    pub const EDITABLE: [BlockKind; 12] = [
        BlockKind::Hero,
        BlockKind::Text,
        BlockKind::ImageGallery,
        BlockKind::Cta,
        BlockKind::Features,
        BlockKind::Testimonial,
        BlockKind::Video,
        BlockKind::Faq,
        BlockKind::PricingTable,
        BlockKind::TeamMembers,
        BlockKind::StatsCounter,
        BlockKind::ContactForm,
    ];

    /// The wire type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Text => "text",
            BlockKind::ImageGallery => "image_gallery",
            BlockKind::Cta => "cta",
            BlockKind::Features => "features",
            BlockKind::Testimonial => "testimonial",
            BlockKind::Video => "video",
            BlockKind::Faq => "faq",
            BlockKind::PricingTable => "pricing_table",
            BlockKind::TeamMembers => "team_members",
            BlockKind::StatsCounter => "stats_counter",
            BlockKind::ContactForm => "contact_form",
            BlockKind::Html => "html",
        }
    }

    /// Parse a wire tag. `None` for tags outside the closed set; callers
    /// treat those as unknown/legacy data.
    pub fn parse(tag: &str) -> Option<BlockKind> {
        BlockKind::ALL.iter().copied().find(|k| k.as_str() == tag)
    }

    /// Display label for the editor's add-block menu.
    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (BlockKind::Hero, Lang::En) => "Hero",
            (BlockKind::Hero, Lang::Id) => "Hero",
            (BlockKind::Text, Lang::En) => "Text",
            (BlockKind::Text, Lang::Id) => "Teks",
            (BlockKind::ImageGallery, Lang::En) => "Image Gallery",
            (BlockKind::ImageGallery, Lang::Id) => "Galeri Gambar",
            (BlockKind::Cta, Lang::En) => "Call to Action",
            (BlockKind::Cta, Lang::Id) => "Ajakan Bertindak",
            (BlockKind::Features, Lang::En) => "Features",
            (BlockKind::Features, Lang::Id) => "Keunggulan",
            (BlockKind::Testimonial, Lang::En) => "Testimonial",
            (BlockKind::Testimonial, Lang::Id) => "Testimoni",
            (BlockKind::Video, Lang::En) => "Video",
            (BlockKind::Video, Lang::Id) => "Video",
            (BlockKind::Faq, Lang::En) => "FAQ",
            (BlockKind::Faq, Lang::Id) => "Tanya Jawab",
            (BlockKind::PricingTable, Lang::En) => "Pricing Table",
            (BlockKind::PricingTable, Lang::Id) => "Tabel Harga",
            (BlockKind::TeamMembers, Lang::En) => "Team Members",
            (BlockKind::TeamMembers, Lang::Id) => "Anggota Tim",
            (BlockKind::StatsCounter, Lang::En) => "Statistics",
            (BlockKind::StatsCounter, Lang::Id) => "Statistik",
            (BlockKind::ContactForm, Lang::En) => "Contact Form",
            (BlockKind::ContactForm, Lang::Id) => "Formulir Kontak",
            (BlockKind::Html, Lang::En) => "Raw HTML",
            (BlockKind::Html, Lang::Id) => "HTML Mentah",
        }
    }

    /// One-line description shown under the label in the add-block menu.
    pub fn description(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (BlockKind::Hero, Lang::En) => "Full-width banner with headline and buttons",
            (BlockKind::Hero, Lang::Id) => "Banner lebar penuh dengan judul dan tombol",
            (BlockKind::Text, Lang::En) => "Free-form rich text",
            (BlockKind::Text, Lang::Id) => "Teks bebas dengan format",
            (BlockKind::ImageGallery, Lang::En) => "A set of images in a grid, carousel or masonry",
            (BlockKind::ImageGallery, Lang::Id) => "Kumpulan gambar dalam grid, carousel atau masonry",
            (BlockKind::Cta, Lang::En) => "Short pitch with a single action button",
            (BlockKind::Cta, Lang::Id) => "Ajakan singkat dengan satu tombol aksi",
            (BlockKind::Features, Lang::En) => "Icon cards highlighting what you offer",
            (BlockKind::Features, Lang::Id) => "Kartu ikon yang menonjolkan layanan Anda",
            (BlockKind::Testimonial, Lang::En) => "A customer quote with attribution",
            (BlockKind::Testimonial, Lang::Id) => "Kutipan pelanggan dengan atribusi",
            (BlockKind::Video, Lang::En) => "Embedded YouTube video",
            (BlockKind::Video, Lang::Id) => "Video YouTube tersemat",
            (BlockKind::Faq, Lang::En) => "Questions and answers in an accordion",
            (BlockKind::Faq, Lang::Id) => "Pertanyaan dan jawaban dalam akordeon",
            (BlockKind::PricingTable, Lang::En) => "Side-by-side plan comparison",
            (BlockKind::PricingTable, Lang::Id) => "Perbandingan paket berdampingan",
            (BlockKind::TeamMembers, Lang::En) => "Cards introducing your team",
            (BlockKind::TeamMembers, Lang::Id) => "Kartu perkenalan tim Anda",
            (BlockKind::StatsCounter, Lang::En) => "Key numbers at a glance",
            (BlockKind::StatsCounter, Lang::Id) => "Angka penting dalam sekilas",
            (BlockKind::ContactForm, Lang::En) => "Inquiry form wired to the contact inbox",
            (BlockKind::ContactForm, Lang::Id) => "Formulir pertanyaan ke kotak masuk kontak",
            (BlockKind::Html, Lang::En) => "Legacy raw markup",
            (BlockKind::Html, Lang::Id) => "Markup mentah lama",
        }
    }

    /// Icon identifying the kind in the editor menu.
    pub fn icon(&self) -> IconId {
        match self {
            BlockKind::Hero => IconId::Megaphone,
            BlockKind::Text => IconId::Type,
            BlockKind::ImageGallery => IconId::Image,
            BlockKind::Cta => IconId::Zap,
            BlockKind::Features => IconId::Star,
            BlockKind::Testimonial => IconId::Quote,
            BlockKind::Video => IconId::Film,
            BlockKind::Faq => IconId::HelpCircle,
            BlockKind::PricingTable => IconId::Tag,
            BlockKind::TeamMembers => IconId::Users,
            BlockKind::StatsCounter => IconId::BarChart,
            BlockKind::ContactForm => IconId::Mail,
            BlockKind::Html => IconId::Code,
        }
    }

    /// The data a freshly added block of this kind starts with. Pure and
    /// total over the closed set.
    pub fn default_body(&self) -> BlockBody {
        match self {
            BlockKind::Hero => BlockBody::Hero(HeroData::default()),
            BlockKind::Text => BlockBody::Text(TextData::default()),
            BlockKind::ImageGallery => BlockBody::ImageGallery(GalleryData::default()),
            BlockKind::Cta => BlockBody::Cta(CtaData::default()),
            BlockKind::Features => BlockBody::Features(FeaturesData::default()),
            BlockKind::Testimonial => BlockBody::Testimonial(TestimonialData::default()),
            BlockKind::Video => BlockBody::Video(VideoData::default()),
            BlockKind::Faq => BlockBody::Faq(FaqData::default()),
            BlockKind::PricingTable => BlockBody::PricingTable(PricingData::default()),
            BlockKind::TeamMembers => BlockBody::TeamMembers(TeamData::default()),
            BlockKind::StatsCounter => BlockBody::StatsCounter(StatsData::default()),
            BlockKind::ContactForm => BlockBody::ContactForm(ContactFormData::default()),
            BlockKind::Html => BlockBody::Html(HtmlData::default()),
        }
    }
}
