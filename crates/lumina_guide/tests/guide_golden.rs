//! End-to-end guidance: fixed ephemeris tables in, ordered prompts out.

use lumina_astro::{GeoLocation, Sign, birth_chart};
use lumina_core::TableSource;
use lumina_guide::{PromptKind, daily_guidance};
use lumina_time::UtcTime;

const NATAL_TABLE: &str = "\
lon sun     2448058.0  84.15
lon moon    2448058.0 334.52
lon mercury 2448058.0  95.21
lon venus   2448058.0  58.33
lon mars    2448058.0  19.84
lon jupiter 2448058.0 119.52
lon saturn  2448058.0 290.11
lon uranus  2448058.0 277.47
lon neptune 2448058.0 283.31
lon pluto   2448058.0 225.38
";

/// "Today": new moon, Mercury retrograde, Sun transiting Gemini
/// (matching the natal sun sign above).
const TODAY_TABLE: &str = "\
lon sun     2460390.0  75.40
lon moon    2460390.0 102.75
lon mercury 2460390.0  60.10
lon venus   2460390.0  48.22
lon mars    2460390.0 355.90
phase 2460390.0 12.0
helio mercury 2460390.0  1.00  0.50
helio mercury 2460391.0  1.00  0.40
helio venus   2460390.0  0.30  0.60
helio venus   2460391.0  0.28  0.62
helio mars    2460390.0 -1.20  0.80
helio mars    2460391.0 -1.22  0.81
helio jupiter 2460390.0  4.90 -1.10
helio jupiter 2460391.0  4.89 -1.08
helio saturn  2460390.0  8.10  4.20
helio saturn  2460391.0  8.09  4.21
";

#[test]
fn onboarded_user_new_moon_mercury_retrograde() {
    let natal = TableSource::parse(NATAL_TABLE).unwrap();
    let birth: UtcTime = "1990-06-15T12:00:00Z".parse().unwrap();
    let chart = birth_chart(
        &natal,
        birth.to_jd_tt(),
        &GeoLocation::new(1.3521, 103.8198),
    )
    .unwrap();
    assert_eq!(chart.sun.placement.sign, Sign::Gemini);

    let today = TableSource::parse(TODAY_TABLE).unwrap();
    let prompts = daily_guidance(&today, Some(&chart), 2_460_390.0).unwrap();

    let titles: Vec<&str> = prompts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "NEW MOON MANIFESTATION",
            "MERCURY RETROGRADE ALERT",
            "SOLAR RETURN ENERGY",
            "GEMINI SUN REFLECTION",
            "PISCES MOON AFFIRMATION",
            "DAILY COSMIC CHECK-IN",
            "TRANSIT AWARENESS",
        ]
    );
    // 75.40° → Gemini; 102.75° → Cancer.
    let last = prompts.last().unwrap();
    assert!(last.content.contains("Sun in Gemini"));
    assert!(last.content.contains("Moon in Cancer"));
}

#[test]
fn pre_onboarding_guidance_has_no_chart_prompts() {
    let today = TableSource::parse(TODAY_TABLE).unwrap();
    let prompts = daily_guidance(&today, None, 2_460_390.0).unwrap();
    assert_eq!(prompts.len(), 3);
    assert!(prompts.iter().all(|p| p.title != "GEMINI SUN REFLECTION"));
    assert_eq!(prompts[0].kind, PromptKind::Ritual);
}

#[test]
fn guidance_is_idempotent() {
    let natal = TableSource::parse(NATAL_TABLE).unwrap();
    let birth: UtcTime = "1990-06-15T12:00:00Z".parse().unwrap();
    let chart = birth_chart(
        &natal,
        birth.to_jd_tt(),
        &GeoLocation::new(1.3521, 103.8198),
    )
    .unwrap();
    let today = TableSource::parse(TODAY_TABLE).unwrap();
    let a = daily_guidance(&today, Some(&chart), 2_460_390.0).unwrap();
    let b = daily_guidance(&today, Some(&chart), 2_460_390.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_phase_data_fails_whole_call() {
    // Strip the phase record: guidance must fail, not degrade.
    let stripped: String = TODAY_TABLE
        .lines()
        .filter(|l| !l.starts_with("phase"))
        .map(|l| format!("{l}\n"))
        .collect();
    let today = TableSource::parse(&stripped).unwrap();
    assert!(daily_guidance(&today, None, 2_460_390.0).is_err());
}
