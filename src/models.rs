//! Hand-maintained candidate model names, one list per provider.
//!
//! These are guesses, not facts: each name is something a provider might
//! accept. Probing tells us which ones actually work. Lists are ordered so
//! related variants are tested next to each other.

/// OpenAI candidates.
pub const OPENAI_CANDIDATES: &[&str] = &[
    // GPT-5
    "gpt-5",
    "gpt-5-turbo",
    "gpt-5-preview",
    "gpt-5-2025-08-07",
    // GPT-4o
    "gpt-4o",
    "gpt-4o-latest",
    "gpt-4o-2024-11-20",
    "gpt-4o-2024-08-06",
    "gpt-4o-mini",
    "gpt-4o-mini-2024-07-18",
    "chatgpt-4o-latest",
    // o1 reasoning
    "o1",
    "o1-preview",
    "o1-preview-2024-09-12",
    "o1-mini",
    "o1-mini-2024-09-12",
    // o3 reasoning
    "o3",
    "o3-mini",
    "o3-preview",
    // GPT-4 Turbo
    "gpt-4-turbo",
    "gpt-4-turbo-preview",
    "gpt-4-turbo-2024-04-09",
    // GPT-3.5
    "gpt-3.5-turbo",
    "gpt-3.5-turbo-0125",
];

/// Anthropic candidates.
pub const CLAUDE_CANDIDATES: &[&str] = &[
    // Claude 4.5
    "claude-sonnet-4-5-20250514",
    "claude-4-5-sonnet-20250514",
    "claude-sonnet-4.5-20250514",
    "claude-4.5-sonnet",
    // Claude 3.5
    "claude-3-5-sonnet-20241022",
    "claude-3-5-sonnet-latest",
    "claude-3-5-haiku-20241022",
    "claude-3-5-haiku-latest",
    // Claude 3
    "claude-3-opus-20240229",
    "claude-3-opus-latest",
    "claude-3-sonnet-20240229",
    "claude-3-haiku-20240307",
    // Legacy aliases
    "claude-3-5-sonnet",
    "claude-3-opus",
];

/// Mistral candidates.
pub const MISTRAL_CANDIDATES: &[&str] = &[
    "mistral-large-latest",
    "mistral-large-2407",
    "mistral-medium-latest",
    "mistral-small-latest",
    "mistral-tiny",
    // Codestral
    "codestral-latest",
    "codestral-2405",
    // Open weights
    "open-mistral-7b",
    "open-mixtral-8x7b",
    "open-mixtral-8x22b",
];

/// DeepSeek candidates.
pub const DEEPSEEK_CANDIDATES: &[&str] = &[
    "deepseek-chat",
    "deepseek-coder",
    // R1 reasoning
    "deepseek-reasoner",
    "deepseek-r1",
    "deepseek-r1-distill-qwen-32b",
    "deepseek-r1-distill-llama-70b",
];
