//! Horoscope resolution and response assembly.
//!
//! The resolver tries the live completion provider once; on any failure it
//! substitutes a canned per-sign text, so for a valid sign it always produces
//! a result. Which path ran is recorded in [`Source`] and surfaced to the
//! caller as metadata only - it never changes the HTTP outcome.

pub mod provider;

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::config::{LUCKY_NUMBER_MAX, LUCKY_NUMBER_MIN};
use crate::zodiac::Sign;
use self::provider::TextProvider;

/// Canned horoscope for each sign, used when the live provider path fails.
pub const FALLBACK_TEXTS: [(&str, &str); 12] = [
    (
        "aries",
        "Your fiery energy opens doors today - a bold move at work pays off, and someone close notices your confidence. Keep your momentum, but save a quiet hour for yourself.",
    ),
    (
        "taurus",
        "Steady progress beats speed today. A practical decision about money or home lands well, and a calm evening restores your energy for what's ahead.",
    ),
    (
        "gemini",
        "Conversations sparkle today - the right words arrive exactly when you need them. Share an idea you've been sitting on; curiosity leads you somewhere good.",
    ),
    (
        "cancer",
        "Trust your intuition today - it's pointing you toward the people who matter. A small act of care comes back to you, and home feels especially warm tonight.",
    ),
    (
        "leo",
        "The spotlight finds you today, and you wear it well. Generosity wins you an ally at work, and your warmth brightens someone's difficult day.",
    ),
    (
        "virgo",
        "Your eye for detail catches what everyone else missed - quietly fix it and the credit follows. A healthy routine you restart today sticks this time.",
    ),
    (
        "libra",
        "Balance comes easily today. A fair word from you settles a disagreement, and an invitation brings a welcome dose of beauty into your week.",
    ),
    (
        "scorpio",
        "Your focus is magnetic today - pour it into one goal and watch it move. Someone shares a secret that deepens your trust in them.",
    ),
    (
        "sagittarius",
        "Adventure calls, even if it's just a new route or a new idea. Say yes to the unfamiliar today; luck travels with the open-minded.",
    ),
    (
        "capricorn",
        "A steady climb gets noticed today - your patience is about to pay a dividend. Celebrate a small win instead of moving straight to the next task.",
    ),
    (
        "aquarius",
        "Your unconventional take is exactly what the room needs today. An old friend resurfaces with news that sparks a fresh plan.",
    ),
    (
        "pisces",
        "Imagination is your compass today - a daydream holds a genuinely useful idea. Be gentle with yourself tonight; rest is part of the plan.",
    ),
];

/// Generic text used if a fallback lookup ever misses.
///
/// The validator runs before the resolver, so every key it passes is in the
/// table, but the lookup defends against a miss anyway.
pub const DEFAULT_FALLBACK_TEXT: &str =
    "The stars are aligning in your favor today. Trust your instincts, stay open to small surprises, and good fortune will find its way to you.";

/// Lucky color pool, sampled uniformly per request.
pub const LUCKY_COLORS: [&str; 10] = [
    "Golden",
    "Silver",
    "Ruby Red",
    "Emerald Green",
    "Sapphire Blue",
    "Amethyst Purple",
    "Rose Gold",
    "Turquoise",
    "Coral",
    "Ivory",
];

/// Mood pool, sampled uniformly per request.
pub const MOODS: [&str; 10] = [
    "Energetic",
    "Peaceful",
    "Confident",
    "Creative",
    "Adventurous",
    "Romantic",
    "Focused",
    "Optimistic",
    "Mysterious",
    "Cheerful",
];

/// Which path produced the horoscope text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Text came from the live completion provider.
    Primary,
    /// Text came from the static fallback table.
    Fallback,
}

/// Look up the canned fallback text for a sign key.
pub fn fallback_text(key: &str) -> &'static str {
    FALLBACK_TEXTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
        .unwrap_or(DEFAULT_FALLBACK_TEXT)
}

/// Build the completion prompt for a sign's display label.
pub fn build_prompt(sign: Sign) -> String {
    format!(
        "Generate a short, positive, and fun horoscope for {} for today. \
         Make it engaging, optimistic, and about 2-3 sentences long. \
         Focus on love, career, health, or general life advice.",
        sign.label
    )
}

/// Resolves horoscope text for validated signs.
///
/// Holds the provider behind the [`TextProvider`] seam; cloning is cheap and
/// shares the underlying client.
#[derive(Clone)]
pub struct HoroscopeService {
    provider: Arc<dyn TextProvider>,
}

impl HoroscopeService {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Obtain horoscope text for a validated sign. Never fails outward:
    /// any provider error is logged and replaced by the fallback text.
    pub async fn resolve(&self, sign: Sign) -> (String, Source) {
        match self.provider.complete(&build_prompt(sign)).await {
            Ok(text) => (text, Source::Primary),
            Err(err) => {
                tracing::warn!(
                    sign = sign.key,
                    error = %err,
                    "Provider call failed, serving fallback horoscope"
                );
                (fallback_text(sign.key).to_string(), Source::Fallback)
            }
        }
    }
}

/// The assembled per-request result, serialized straight into the response body.
#[derive(Debug, Clone, Serialize)]
pub struct HoroscopeResponse {
    pub success: bool,
    pub zodiac_sign: &'static str,
    pub horoscope: String,
    pub lucky_number: u8,
    pub lucky_color: &'static str,
    pub mood: &'static str,
    pub source: Source,
}

impl HoroscopeResponse {
    /// Combine resolver output with three independently sampled cosmetic
    /// extras. The RNG is injected so tests can pin the sampling.
    pub fn assemble<R: Rng + ?Sized>(
        sign: Sign,
        horoscope: String,
        source: Source,
        rng: &mut R,
    ) -> Self {
        Self {
            success: true,
            zodiac_sign: sign.label,
            horoscope,
            lucky_number: rng.gen_range(LUCKY_NUMBER_MIN..=LUCKY_NUMBER_MAX),
            lucky_color: LUCKY_COLORS[rng.gen_range(0..LUCKY_COLORS.len())],
            mood: MOODS[rng.gen_range(0..MOODS.len())],
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::{validate, CATALOG};
    use async_trait::async_trait;
    use super::provider::ProviderError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct StaticProvider(&'static str);

    #[async_trait]
    impl TextProvider for StaticProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TextProvider for FailingProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            Err(ProviderError::Malformed("no choices".to_string()))
        }
    }

    #[tokio::test]
    async fn resolve_returns_provider_text_verbatim() {
        let service = HoroscopeService::new(Arc::new(StaticProvider("Great day ahead!")));
        let sign = validate("leo").unwrap();

        let (text, source) = service.resolve(sign).await;
        assert_eq!(text, "Great day ahead!");
        assert_eq!(source, Source::Primary);
    }

    #[tokio::test]
    async fn resolve_falls_back_for_every_sign() {
        let service = HoroscopeService::new(Arc::new(FailingProvider));

        for sign in CATALOG {
            let (text, source) = service.resolve(sign).await;
            assert_eq!(text, fallback_text(sign.key), "sign {}", sign.key);
            assert_eq!(source, Source::Fallback);
        }
    }

    #[test]
    fn fallback_table_covers_catalog() {
        for sign in CATALOG {
            let text = fallback_text(sign.key);
            assert!(!text.is_empty());
            assert_ne!(text, DEFAULT_FALLBACK_TEXT, "sign {}", sign.key);
        }
    }

    #[test]
    fn unknown_key_gets_default_fallback() {
        assert_eq!(fallback_text("ophiuchus"), DEFAULT_FALLBACK_TEXT);
    }

    #[test]
    fn prompt_mentions_label_and_length_hint() {
        let sign = validate("virgo").unwrap();
        let prompt = build_prompt(sign);
        assert!(prompt.contains("♍ Virgo"));
        assert!(prompt.contains("2-3 sentences"));
    }

    #[test]
    fn assembled_extras_stay_within_pools() {
        let mut rng = StdRng::seed_from_u64(42);
        let sign = validate("aries").unwrap();

        for _ in 0..1000 {
            let response = HoroscopeResponse::assemble(
                sign,
                "text".to_string(),
                Source::Fallback,
                &mut rng,
            );
            assert!((LUCKY_NUMBER_MIN..=LUCKY_NUMBER_MAX).contains(&response.lucky_number));
            assert!(LUCKY_COLORS.contains(&response.lucky_color));
            assert!(MOODS.contains(&response.mood));
            assert!(response.success);
            assert_eq!(response.zodiac_sign, "♈ Aries");
        }
    }

    #[test]
    fn source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Source::Primary).unwrap(), "\"primary\"");
        assert_eq!(serde_json::to_string(&Source::Fallback).unwrap(), "\"fallback\"");
    }
}
