//! The prompt rule engine.
//!
//! Nine rules evaluated in fixed order, each independently appending
//! zero or one prompt; no rule suppresses another. The resulting
//! sequence length varies with chart presence and sky conditions, and
//! the ordering is part of the engine's contract.

use lumina_astro::{
    AstroError, BirthChart, MoonPhase, RetrogradeSet, TransitSnapshot, moon_phase,
    retrograde_bodies, transit_snapshot,
};
use lumina_core::{Body, EphemerisSource};

use crate::prompt::{Prompt, PromptKind};
use crate::sign_text::{moon_affirmation, moon_sign_need, sun_sign_trait};

/// Evaluate the prompt rules against pre-computed sky state.
pub fn daily_prompts(
    chart: Option<&BirthChart>,
    transits: &TransitSnapshot,
    phase: MoonPhase,
    retrogrades: &RetrogradeSet,
) -> Vec<Prompt> {
    let mut prompts = Vec::new();

    if phase == MoonPhase::NewMoon {
        prompts.push(Prompt {
            kind: PromptKind::Ritual,
            title: "NEW MOON MANIFESTATION".to_string(),
            content: "Tonight is the New Moon—a powerful time for setting intentions. \
                      Write down 3 specific goals you want to manifest this lunar cycle. \
                      Be clear, be bold, be specific."
                .to_string(),
            icon: "🌑",
        });
    }

    if phase == MoonPhase::FullMoon {
        prompts.push(Prompt {
            kind: PromptKind::Ritual,
            title: "FULL MOON RELEASE".to_string(),
            content: "The Full Moon illuminates what needs to be released. Write a letter \
                      to yourself about what you're ready to let go of. Burn it (safely) \
                      or tear it up as a symbolic release."
                .to_string(),
            icon: "🌕",
        });
    }

    if retrogrades.contains(Body::Mercury) {
        prompts.push(Prompt {
            kind: PromptKind::Action,
            title: "MERCURY RETROGRADE ALERT".to_string(),
            content: "Mercury is retrograde. Back up your files, double-check \
                      communications, and revisit old projects. This is a time for \
                      reflection, not rushing forward."
                .to_string(),
            icon: "⚠️",
        });
    }

    if let Some(chart) = chart {
        if transits.sun.sign == chart.sun.placement.sign {
            prompts.push(Prompt {
                kind: PromptKind::Affirmation,
                title: "SOLAR RETURN ENERGY".to_string(),
                content: format!(
                    "The Sun is in your sign ({})! This is YOUR season. Affirmation: \
                     \"I am stepping into my power. I honor my authentic self. I am \
                     worthy of all my desires.\"",
                    chart.sun.placement.sign
                ),
                icon: "☀️",
            });
        }

        if transits.moon.sign == chart.moon.placement.sign {
            prompts.push(Prompt {
                kind: PromptKind::Reflection,
                title: "LUNAR RETURN CHECK-IN".to_string(),
                content: format!(
                    "The Moon is in {}, your natal Moon sign. How are you feeling \
                     emotionally today? What do you need to feel safe and nurtured?",
                    chart.moon.placement.sign
                ),
                icon: "🌙",
            });
        }

        let sun_sign = chart.sun.placement.sign;
        prompts.push(Prompt {
            kind: PromptKind::Reflection,
            title: format!("{} SUN REFLECTION", sun_sign.name().to_uppercase()),
            content: format!(
                "As a {sun_sign} Sun, your core identity thrives on {}. How did you \
                 express this part of yourself today?",
                sun_sign_trait(sun_sign)
            ),
            icon: "✨",
        });

        let moon_sign = chart.moon.placement.sign;
        prompts.push(Prompt {
            kind: PromptKind::Affirmation,
            title: format!("{} MOON AFFIRMATION", moon_sign.name().to_uppercase()),
            content: format!(
                "Your {moon_sign} Moon needs {}. Today's affirmation: \"{}\"",
                moon_sign_need(moon_sign),
                moon_affirmation(moon_sign)
            ),
            icon: "💫",
        });
    }

    prompts.push(Prompt {
        kind: PromptKind::Reflection,
        title: "DAILY COSMIC CHECK-IN".to_string(),
        content: "What cosmic energy did you feel most strongly today? Did you notice \
                  any synchronicities or meaningful coincidences?"
            .to_string(),
        icon: "🔮",
    });

    prompts.push(Prompt {
        kind: PromptKind::Action,
        title: "TRANSIT AWARENESS".to_string(),
        content: format!(
            "Current transits: Sun in {}, Moon in {}. How can you work WITH these \
             energies instead of against them?",
            transits.sun.sign, transits.moon.sign
        ),
        icon: "🌠",
    });

    prompts
}

/// One-call guidance: compute transits, phase, and retrogrades from the
/// source at `jd_tt`, then evaluate the rules. Source failures propagate
/// unmodified; no partial sequence is returned.
pub fn daily_guidance(
    source: &impl EphemerisSource,
    chart: Option<&BirthChart>,
    jd_tt: f64,
) -> Result<Vec<Prompt>, AstroError> {
    let transits = transit_snapshot(source, jd_tt)?;
    let phase = moon_phase(source, jd_tt)?;
    let retrogrades = retrograde_bodies(source, jd_tt)?;
    Ok(daily_prompts(chart, &transits, phase, &retrogrades))
}
