//! Static option catalogs for the onboarding screens.
//!
//! Both screens select from a fixed, compile-time list: 18 languages and 3
//! proficiency levels. List order is display order. Identifiers (`code` /
//! `id`) are the values persisted to the preference store.

/// Common surface of a selectable option.
///
/// The selector flow is generic over this, so the load/select/persist/guard
/// logic exists once instead of once per screen.
pub trait SelectorOption: Clone + PartialEq {
    /// Stable identifier persisted to the preference store.
    fn id(&self) -> &str;

    /// User-facing display name.
    fn label(&self) -> &str;
}

/// A language offered on the first onboarding screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub display_name: &'static str,
}

/// All selectable languages, in display order.
pub const LANGUAGES: [LanguageOption; 18] = [
    LanguageOption { code: "ru", display_name: "Русский" },
    LanguageOption { code: "en", display_name: "English" },
    LanguageOption { code: "ar", display_name: "العربية" },
    LanguageOption { code: "kk", display_name: "Қазақша" },
    LanguageOption { code: "uz", display_name: "Oʻzbekcha" },
    LanguageOption { code: "ky", display_name: "Кыргызча" },
    LanguageOption { code: "tg", display_name: "Тоҷикӣ" },
    LanguageOption { code: "zh", display_name: "中文" },
    LanguageOption { code: "ja", display_name: "日本語" },
    LanguageOption { code: "tr", display_name: "Türkçe" },
    LanguageOption { code: "fr", display_name: "Français" },
    LanguageOption { code: "de", display_name: "Deutsch" },
    LanguageOption { code: "hi", display_name: "हिन्दी" },
    LanguageOption { code: "ms", display_name: "Bahasa Melayu" },
    LanguageOption { code: "sw", display_name: "Kiswahili" },
    LanguageOption { code: "ko", display_name: "한국어" },
    LanguageOption { code: "uk", display_name: "Українська" },
    LanguageOption { code: "ga", display_name: "Gaeilge" },
];

impl LanguageOption {
    /// Find a language by its code. Returns `None` for unknown codes, which
    /// is how a stale stored preference degrades to "nothing selected".
    pub fn find(code: &str) -> Option<&'static LanguageOption> {
        LANGUAGES.iter().find(|language| language.code == code)
    }
}

impl SelectorOption for LanguageOption {
    fn id(&self) -> &str {
        self.code
    }

    fn label(&self) -> &str {
        self.display_name
    }
}

/// A proficiency level offered on the second onboarding screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All selectable levels, in display order.
pub const LEVELS: [LevelOption; 3] = [
    LevelOption {
        id: "novice",
        name: "Новичок",
        description: "Не умею читать Коран ни произносить буквы",
    },
    LevelOption {
        id: "intermediate",
        name: "Средний уровень",
        description: "Я умею читать и произносить буквы, но не владею таджвидом",
    },
    LevelOption {
        id: "teacher",
        name: "Преподаватель",
        description: "Хочу использовать приложение для занятий",
    },
];

impl LevelOption {
    /// Find a level by its id. Returns `None` for unknown ids.
    pub fn find(id: &str) -> Option<&'static LevelOption> {
        LEVELS.iter().find(|level| level.id == id)
    }
}

impl SelectorOption for LevelOption {
    fn id(&self) -> &str {
        self.id
    }

    fn label(&self) -> &str {
        self.name
    }
}
