//! "AI translation" button backend: a fake delay and a canned answer.

use contracts::shared::error::TranslationError;
use contracts::shared::translation::{stub_translation, StubTranslation};

use super::latency::simulate_latency;

pub async fn translate_stub(
    target_locale: &str,
    latency_ms: u32,
) -> Result<&'static StubTranslation, TranslationError> {
    simulate_latency(latency_ms).await;
    let result = stub_translation(target_locale)
        .ok_or_else(|| TranslationError::UnsupportedLocale(target_locale.to_string()));
    match &result {
        Ok(_) => log::debug!("Stub translation served for '{}'", target_locale),
        Err(e) => log::warn!("{}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_translate_stub() {
        let t = block_on(translate_stub("fr", 0)).unwrap();
        assert_eq!(t.title, "Titre traduit");

        let err = block_on(translate_stub("xx", 0)).unwrap_err();
        assert_eq!(err, TranslationError::UnsupportedLocale("xx".into()));
    }
}
