//! Daily journaling guidance.
//!
//! Combines a natal chart (optional, absent before onboarding) with the
//! current transit snapshot, lunar phase, and retrograde set to produce
//! an ordered sequence of journaling prompts. Rule order is part of the
//! contract: evaluating the same inputs twice yields the same sequence.

pub mod engine;
pub mod prompt;
pub mod sign_text;

pub use engine::{daily_guidance, daily_prompts};
pub use prompt::{Prompt, PromptKind};
pub use sign_text::{moon_affirmation, moon_sign_need, sun_sign_trait};
