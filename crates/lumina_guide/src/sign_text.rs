//! Sign-keyed interpretive text.
//!
//! Exhaustive matches over the closed [`Sign`] enum: a missing entry is
//! a compile error, so there is no runtime fallback path.

use lumina_astro::Sign;

/// Core identity trait for a sun sign.
pub const fn sun_sign_trait(sign: Sign) -> &'static str {
    match sign {
        Sign::Aries => "courage, initiative, and bold action",
        Sign::Taurus => "stability, sensuality, and building lasting value",
        Sign::Gemini => "curiosity, communication, and mental agility",
        Sign::Cancer => "nurturing, emotional depth, and creating safe spaces",
        Sign::Leo => "creative self-expression, generosity, and radiant confidence",
        Sign::Virgo => "precision, service, and practical improvement",
        Sign::Libra => "harmony, beauty, and balanced relationships",
        Sign::Scorpio => "intensity, transformation, and emotional truth",
        Sign::Sagittarius => "adventure, wisdom-seeking, and expansive thinking",
        Sign::Capricorn => "ambition, discipline, and long-term achievement",
        Sign::Aquarius => "innovation, independence, and humanitarian vision",
        Sign::Pisces => "compassion, imagination, and spiritual connection",
    }
}

/// Emotional need for a moon sign.
pub const fn moon_sign_need(sign: Sign) -> &'static str {
    match sign {
        Sign::Aries => "independence and excitement",
        Sign::Taurus => "comfort and stability",
        Sign::Gemini => "mental stimulation and variety",
        Sign::Cancer => "emotional security and home",
        Sign::Leo => "appreciation and creative outlets",
        Sign::Virgo => "order and purposeful activity",
        Sign::Libra => "harmony and beautiful surroundings",
        Sign::Scorpio => "depth and emotional intensity",
        Sign::Sagittarius => "freedom and adventure",
        Sign::Capricorn => "structure and achievement",
        Sign::Aquarius => "space and intellectual connection",
        Sign::Pisces => "solitude and spiritual practice",
    }
}

/// Daily affirmation sentence for a moon sign.
pub const fn moon_affirmation(sign: Sign) -> &'static str {
    match sign {
        Sign::Aries => "I honor my need for independence while staying connected to my emotions",
        Sign::Taurus => "I create comfort and security from within",
        Sign::Gemini => "I trust my emotional intelligence as much as my mental clarity",
        Sign::Cancer => "I am safe to feel deeply and express my needs",
        Sign::Leo => "I am worthy of love and recognition exactly as I am",
        Sign::Virgo => "I release perfectionism and embrace emotional authenticity",
        Sign::Libra => "I find balance between my needs and others' needs",
        Sign::Scorpio => "I trust the transformative power of my emotions",
        Sign::Sagittarius => "I am free to explore my feelings without judgment",
        Sign::Capricorn => "I allow myself to be vulnerable and receive support",
        Sign::Aquarius => "I honor my unique emotional landscape",
        Sign::Pisces => "I set healthy boundaries while staying compassionate",
    }
}
