mod settings;

pub use settings::{
    DictionarySettings, OcrSettings, RecoverySettings, ServerSettings, Settings, UsageSettings,
};
