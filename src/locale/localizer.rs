use crate::locale::catalog::{Catalog, Language, Translations, Translator};

/// Formatting strategy injected into [`SelectionAggregate::value`].
///
/// [`SelectionAggregate::value`]: crate::aggregation::aggregate::SelectionAggregate::value
pub trait Localizer {
    /// Shown when nothing is selected.
    fn placeholder(&self) -> String;

    /// Joins the per-resource-type segments.
    fn separator(&self) -> String;

    /// Exactly one instance of `type_name` is selected.
    fn single_selection(&self, type_name: &str, entry_name: &str) -> String;

    /// `count` (> 1) instances of `type_name` are selected.
    fn multi_selection(&self, count: usize, type_name: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct Locale {
    pub language: Language,
    catalog: Catalog,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            catalog: Catalog::builtin(language),
        }
    }

    pub fn with_overrides(mut self, overrides: &Translations) -> Self {
        self.catalog = self.catalog.with_overrides(overrides);
        self
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Translator for Locale {
    fn translate(&self, namespace: &str, key: &str) -> String {
        self.catalog.translate(namespace, key)
    }
}

impl Localizer for Locale {
    fn placeholder(&self) -> String {
        self.translate("verify", "请选择")
    }

    fn separator(&self) -> String {
        self.translate("common", "，")
    }

    fn single_selection(&self, type_name: &str, entry_name: &str) -> String {
        format!("{}{}{}", type_name, self.translate("common", "："), entry_name)
    }

    fn multi_selection(&self, count: usize, type_name: &str) -> String {
        match self.language {
            Language::ZhCn => format!("已选择{}个{}", count, type_name),
            Language::En => format!("selected {} {}(s)", count, type_name),
        }
    }
}
