//! Catalog listing for `--list`.
//!
//! Shows every provider with its endpoint, credential variable, and
//! candidate names without sending any requests.

use colored::Colorize;

use crate::catalog::Catalog;
use crate::credentials::{CredentialSource, EnvCredentials};

/// Print all providers and their candidates.
pub fn print_catalog(catalog: &Catalog) {
    println!("Candidate models:\n");

    for spec in catalog.specs() {
        let key_state = if EnvCredentials.credential(&spec.api_key_env).is_some() {
            "set".green()
        } else {
            "not set".yellow()
        };
        println!("  {} ({})", spec.id().bold(), spec.display_name());
        println!("    endpoint: {}", spec.endpoint.dimmed());
        println!("    key:      {} ({key_state})", spec.api_key_env);
        if spec.alternate_params_retry {
            println!("    retry:    reasoning-model parameters on 400");
        }
        for model in &spec.models {
            println!("    - {model}");
        }
        println!();
    }
}
