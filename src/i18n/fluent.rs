// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
                tracing::warn!(file = filename, ?errors, "translation file has syntax errors");
                partial
            });

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, ?errors, "duplicate translation keys");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or(DEFAULT_LOCALE);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments. Values that parse as numbers
    /// are passed as Fluent numbers so plural selectors work.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            match value.parse::<f64>() {
                Ok(number) => fluent_args.set(*name, FluentValue::from(number)),
                Err(_) => fluent_args.set(*name, FluentValue::from(*value)),
            }
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        [&self.current_locale, &DEFAULT_LOCALE]
            .into_iter()
            .filter_map(|locale| self.bundles.get(locale))
            .find_map(|bundle| {
                let pattern = bundle.get_message(key)?.value()?;
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if !errors.is_empty() {
                    tracing::debug!(key, ?errors, "translation formatting errors");
                }
                Some(value.to_string())
            })
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }
}

fn matching_locale(
    requested: &str,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let requested = requested.replace('_', "-");
    let lang = requested.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI args
    if let Some(lang) = cli_lang.and_then(|raw| matching_locale(&raw, available)) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|raw| matching_locale(raw, available))
    {
        return Some(lang);
    }

    // 3. OS locale
    sys_locale::get_locale().and_then(|raw| matching_locale(&raw, available))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "ko".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("ko".to_string()), &config, &available());
        assert_eq!(lang, Some("ko".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("ko".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("ko".parse().unwrap()));
    }

    #[test]
    fn region_falls_back_to_language() {
        let lang = matching_locale("ko_KR", &available());
        assert_eq!(lang, Some("ko".parse().unwrap()));
    }

    #[test]
    fn unknown_language_is_not_matched() {
        assert_eq!(matching_locale("xx", &available()), None);
    }

    #[test]
    fn test_resolve_locale_default() {
        let config = Config::default();
        let lang = resolve_locale(None, &config, &available());
        // System dependent: only check the result is one of the candidates
        if let Some(l) = lang {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"ko".parse().unwrap()));
        assert_eq!(i18n.current_locale(), &DEFAULT_LOCALE);
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn args_are_interpolated() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("elapsed-minutes", &[("count", "5")]),
            "5 minutes ago"
        );
        assert_eq!(
            i18n.tr_with_args("elapsed-minutes", &[("count", "1")]),
            "1 minute ago"
        );
    }

    #[test]
    fn korean_translation_is_used() {
        let i18n = I18n::new(Some("ko".into()), &Config::default());
        assert_eq!(i18n.tr("elapsed-just-now"), "방금 전");
        assert_eq!(i18n.tr_with_args("elapsed-days", &[("count", "3")]), "3일 전");
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("en-US".into()), &Config::default());
        i18n.set_locale("xx".parse().unwrap());
        assert_eq!(i18n.current_locale(), &DEFAULT_LOCALE);
        i18n.set_locale("ko".parse().unwrap());
        assert_eq!(i18n.current_locale(), &"ko".parse::<LanguageIdentifier>().unwrap());
    }
}
