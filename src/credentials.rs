//! Credential lookup.
//!
//! Probes read API keys through [`CredentialSource`] so the process
//! environment can be swapped for an in-memory map in tests.

use std::collections::HashMap;

/// Supplies credentials by variable name.
pub trait CredentialSource {
    /// Returns the credential stored under `var`, or `None` when it is unset
    /// or empty.
    fn credential(&self, var: &str) -> Option<String>;
}

/// Reads credentials from the process environment (after `.env` loading).
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn credential(&self, var: &str) -> Option<String> {
        std::env::var(var).ok().filter(|v| !v.is_empty())
    }
}

impl CredentialSource for HashMap<String, String> {
    fn credential(&self, var: &str) -> Option<String> {
        self.get(var).filter(|v| !v.is_empty()).cloned()
    }
}

/// Masks a credential for display: first 10 and last 4 characters.
///
/// Keys too short to mask without revealing most of them become `****`.
pub fn mask_credential(credential: &str) -> String {
    let chars: Vec<char> = credential.chars().collect();
    if chars.len() <= 16 {
        return "****".to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source_treats_empty_as_missing() {
        let mut creds = HashMap::new();
        creds.insert("SET".to_string(), "value".to_string());
        creds.insert("EMPTY".to_string(), String::new());
        assert_eq!(creds.credential("SET").as_deref(), Some("value"));
        assert_eq!(creds.credential("EMPTY"), None);
        assert_eq!(creds.credential("ABSENT"), None);
    }

    #[test]
    fn test_env_source_missing_var() {
        assert_eq!(
            EnvCredentials.credential("MODEL_SCOUT_SURELY_UNSET_VARIABLE"),
            None
        );
    }

    #[test]
    fn test_mask_long_key() {
        assert_eq!(
            mask_credential("sk-proj-abcdefghijklmnopWXYZ"),
            "sk-proj-ab...WXYZ"
        );
    }

    #[test]
    fn test_mask_short_key() {
        assert_eq!(mask_credential("short"), "****");
    }
}
