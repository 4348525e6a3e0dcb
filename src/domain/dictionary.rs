/// Dictionary partitions searchable on gramota.ru.
///
/// Each variant maps to the query-string code the site uses to enable that
/// partition for a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dictionary {
    /// Орфографический словарь
    Orthographic,
    /// Большой толковый словарь
    BigExplanatory,
    /// Русское словесное ударение
    Stress,
    /// Словарь имён собственных
    ProperNames,
    /// Словарь синонимов
    Synonyms,
    /// Синонимы: краткий справочник
    SynonymsBrief,
    /// Словарь антонимов
    Antonyms,
    /// Словарь методических терминов
    MethodicalTerms,
    /// Словарь русских имён
    RussianNames,
}

impl Dictionary {
    pub fn code(&self) -> &'static str {
        match self {
            Dictionary::Orthographic => "lop",
            Dictionary::BigExplanatory => "bts",
            Dictionary::Stress => "zar",
            Dictionary::ProperNames => "ag",
            Dictionary::Synonyms => "ab",
            Dictionary::SynonymsBrief => "sin",
            Dictionary::Antonyms => "lv",
            Dictionary::MethodicalTerms => "az",
            Dictionary::RussianNames => "pe",
        }
    }

    /// Partitions searched when the caller does not pick a set, chosen for
    /// headword coverage of common spelling-exercise vocabulary.
    pub fn default_set() -> &'static [Dictionary] {
        &[
            Dictionary::Orthographic,
            Dictionary::Stress,
            Dictionary::ProperNames,
            Dictionary::RussianNames,
        ]
    }
}
