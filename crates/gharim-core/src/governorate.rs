//! # Governorates
//!
//! The fixed, ordered list of Iraqi governorates offered by the checkout
//! form. Each entry has a stable code, an English and an Arabic name, and a
//! canonical bilingual label (`"Baghdad - بغداد"`) which is what the order
//! message prints.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::Language;

/// A first-level administrative region used as the delivery locality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Governorate {
    Baghdad,
    Basra,
    Nineveh,
    Erbil,
    Sulaymaniyah,
    Duhok,
    Anbar,
    Diyala,
    Karbala,
    Najaf,
    Wasit,
    Saladin,
    Kirkuk,
    Maysan,
    DhiQar,
    Muthanna,
    Qadisiyyah,
    Babil,
}

impl Governorate {
    /// All governorates in form order.
    pub const ALL: [Governorate; 18] = [
        Governorate::Baghdad,
        Governorate::Basra,
        Governorate::Nineveh,
        Governorate::Erbil,
        Governorate::Sulaymaniyah,
        Governorate::Duhok,
        Governorate::Anbar,
        Governorate::Diyala,
        Governorate::Karbala,
        Governorate::Najaf,
        Governorate::Wasit,
        Governorate::Saladin,
        Governorate::Kirkuk,
        Governorate::Maysan,
        Governorate::DhiQar,
        Governorate::Muthanna,
        Governorate::Qadisiyyah,
        Governorate::Babil,
    ];

    /// Stable machine code (matches the serde representation).
    pub const fn code(self) -> &'static str {
        match self {
            Governorate::Baghdad => "baghdad",
            Governorate::Basra => "basra",
            Governorate::Nineveh => "nineveh",
            Governorate::Erbil => "erbil",
            Governorate::Sulaymaniyah => "sulaymaniyah",
            Governorate::Duhok => "duhok",
            Governorate::Anbar => "anbar",
            Governorate::Diyala => "diyala",
            Governorate::Karbala => "karbala",
            Governorate::Najaf => "najaf",
            Governorate::Wasit => "wasit",
            Governorate::Saladin => "saladin",
            Governorate::Kirkuk => "kirkuk",
            Governorate::Maysan => "maysan",
            Governorate::DhiQar => "dhi_qar",
            Governorate::Muthanna => "muthanna",
            Governorate::Qadisiyyah => "qadisiyyah",
            Governorate::Babil => "babil",
        }
    }

    pub const fn name_en(self) -> &'static str {
        match self {
            Governorate::Baghdad => "Baghdad",
            Governorate::Basra => "Basra",
            Governorate::Nineveh => "Nineveh",
            Governorate::Erbil => "Erbil",
            Governorate::Sulaymaniyah => "Sulaymaniyah",
            Governorate::Duhok => "Duhok",
            Governorate::Anbar => "Anbar",
            Governorate::Diyala => "Diyala",
            Governorate::Karbala => "Karbala",
            Governorate::Najaf => "Najaf",
            Governorate::Wasit => "Wasit",
            Governorate::Saladin => "Saladin",
            Governorate::Kirkuk => "Kirkuk",
            Governorate::Maysan => "Maysan",
            Governorate::DhiQar => "Dhi Qar",
            Governorate::Muthanna => "Muthanna",
            Governorate::Qadisiyyah => "Qadisiyyah",
            Governorate::Babil => "Babil",
        }
    }

    pub const fn name_ar(self) -> &'static str {
        match self {
            Governorate::Baghdad => "بغداد",
            Governorate::Basra => "البصرة",
            Governorate::Nineveh => "نينوى",
            Governorate::Erbil => "أربيل",
            Governorate::Sulaymaniyah => "السليمانية",
            Governorate::Duhok => "دهوك",
            Governorate::Anbar => "الأنبار",
            Governorate::Diyala => "ديالى",
            Governorate::Karbala => "كربلاء",
            Governorate::Najaf => "النجف",
            Governorate::Wasit => "واسط",
            Governorate::Saladin => "صلاح الدين",
            Governorate::Kirkuk => "كركوك",
            Governorate::Maysan => "ميسان",
            Governorate::DhiQar => "ذي قار",
            Governorate::Muthanna => "المثنى",
            Governorate::Qadisiyyah => "القادسية",
            Governorate::Babil => "بابل",
        }
    }

    /// Name in a single language.
    pub const fn name(self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.name_en(),
            Language::Ar => self.name_ar(),
        }
    }

    /// Canonical bilingual label, e.g. `"Baghdad - بغداد"`.
    pub fn label(self) -> String {
        format!("{} - {}", self.name_en(), self.name_ar())
    }

    /// Parses a form selection.
    ///
    /// Accepts the canonical label, the English name (any case), the Arabic
    /// name, or the code. Returns `None` for blank or unknown input.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        Governorate::ALL.into_iter().find(|g| {
            value == g.label()
                || value.eq_ignore_ascii_case(g.name_en())
                || value == g.name_ar()
                || value.eq_ignore_ascii_case(g.code())
        })
    }
}

impl fmt::Display for Governorate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_eighteen_unique_entries() {
        assert_eq!(Governorate::ALL.len(), 18);

        let labels: HashSet<String> = Governorate::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(labels.len(), 18);

        let codes: HashSet<&str> = Governorate::ALL.iter().map(|g| g.code()).collect();
        assert_eq!(codes.len(), 18);
    }

    #[test]
    fn test_order_is_fixed() {
        assert_eq!(Governorate::ALL[0], Governorate::Baghdad);
        assert_eq!(Governorate::ALL[17], Governorate::Babil);
    }

    #[test]
    fn test_label() {
        assert_eq!(Governorate::Baghdad.label(), "Baghdad - بغداد");
        assert_eq!(Governorate::DhiQar.label(), "Dhi Qar - ذي قار");
        assert_eq!(Governorate::Basra.name(Language::Ar), "البصرة");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Governorate::parse("Baghdad - بغداد"), Some(Governorate::Baghdad));
        assert_eq!(Governorate::parse("basra"), Some(Governorate::Basra));
        assert_eq!(Governorate::parse("النجف"), Some(Governorate::Najaf));
        assert_eq!(Governorate::parse("dhi_qar"), Some(Governorate::DhiQar));
        assert_eq!(Governorate::parse(""), None);
        assert_eq!(Governorate::parse("   "), None);
        assert_eq!(Governorate::parse("Atlantis"), None);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Governorate::DhiQar).unwrap();
        assert_eq!(json, "\"dhi_qar\"");
    }
}
