use serde::{Deserialize, Serialize};

/// Site languages. Every piece of operator-authored content exists once per
/// language; there is no fallback chain between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Id,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Id];

    /// Parse a `lang` query value. Anything unrecognized is English.
    pub fn parse(value: &str) -> Lang {
        match value.trim().to_ascii_lowercase().as_str() {
            "id" => Lang::Id,
            _ => Lang::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Id => "id",
        }
    }
}

/// A pair of per-language values. Maps to the `*_en` / `*_id` column pair
/// in storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub id: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, id: T) -> Self {
        Self { en, id }
    }

    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::En => &self.en,
            Lang::Id => &self.id,
        }
    }

    pub fn get_mut(&mut self, lang: Lang) -> &mut T {
        match lang {
            Lang::En => &mut self.en,
            Lang::Id => &mut self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_values() {
        assert_eq!(Lang::parse("en"), Lang::En);
        assert_eq!(Lang::parse("id"), Lang::Id);
        assert_eq!(Lang::parse("ID "), Lang::Id);
    }

    #[test]
    fn parse_unknown_falls_back_to_english() {
        assert_eq!(Lang::parse("fr"), Lang::En);
        assert_eq!(Lang::parse(""), Lang::En);
    }

    #[test]
    fn localized_selects_by_lang() {
        let greeting = Localized::new("Hello", "Halo");
        assert_eq!(*greeting.get(Lang::En), "Hello");
        assert_eq!(*greeting.get(Lang::Id), "Halo");
    }
}
