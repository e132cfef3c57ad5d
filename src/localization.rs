//! Localization strategy for language-specific section handling.

/// Strategy for handling language-specific document conventions.
pub trait LocalizationStrategy: Send + Sync {
    /// Section titles that end the exportable part of a document.
    fn stop_sentinels(&self) -> &[&str];

    /// Returns true when `text` (already trimmed) is a stop section title.
    /// Matching is exact and case-sensitive.
    fn is_stop_heading(&self, text: &str) -> bool {
        self.stop_sentinels().contains(&text)
    }
}

/// English-only strategy.
pub struct DefaultLocalization;

impl LocalizationStrategy for DefaultLocalization {
    fn stop_sentinels(&self) -> &[&str] {
        &["References"]
    }
}

/// Chinese strategy ("参考资料", "参考文献"), also honouring the English title.
pub struct ChineseLocalization;

impl LocalizationStrategy for ChineseLocalization {
    fn stop_sentinels(&self) -> &[&str] {
        &["参考资料", "参考文献", "References"]
    }
}

/// Document language, selecting the stop-section strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub fn strategy(self) -> &'static dyn LocalizationStrategy {
        match self {
            Language::Zh => &ChineseLocalization,
            Language::En => &DefaultLocalization,
        }
    }
}
