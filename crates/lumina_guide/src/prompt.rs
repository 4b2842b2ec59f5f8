//! Prompt records produced by the guidance engine.

/// Kind of journaling prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    Reflection,
    Affirmation,
    Ritual,
    Action,
}

impl PromptKind {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reflection => "reflection",
            Self::Affirmation => "affirmation",
            Self::Ritual => "ritual",
            Self::Action => "action",
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One journaling prompt. Produced fresh each invocation, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub title: String,
    pub content: String,
    pub icon: &'static str,
}
