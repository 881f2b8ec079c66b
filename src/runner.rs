//! Per-provider orchestration.
//!
//! Probes run strictly one at a time, in candidate-list order, with a fixed
//! pause between consecutive probes of the same provider.

use std::time::Duration;

use tracing::{debug, info};

use crate::catalog::ProviderSpec;
use crate::credentials::{mask_credential, CredentialSource};
use crate::output::Renderer;
use crate::probe::Prober;
use crate::report::ProviderRun;

/// Probes every candidate model of one provider.
///
/// Returns a skipped run, without sending anything, when the provider's
/// credential is not available.
pub async fn run_provider(
    prober: &Prober,
    spec: &ProviderSpec,
    credentials: &dyn CredentialSource,
    pacing: Duration,
    renderer: &mut dyn Renderer,
) -> ProviderRun {
    renderer.provider_started(spec);

    let Some(credential) = credentials.credential(&spec.api_key_env) else {
        info!(provider = spec.id(), var = %spec.api_key_env, "credential not set, skipping");
        renderer.provider_skipped(spec);
        return ProviderRun::skipped(spec.id());
    };
    renderer.credential_found(&mask_credential(&credential), spec.models.len());

    let total = spec.models.len();
    let mut results = Vec::with_capacity(total);
    for (index, model) in spec.models.iter().enumerate() {
        renderer.probe_started(index + 1, total, model);
        let result = prober.probe(spec, model, credentials).await;
        debug!(provider = spec.id(), model = %model, valid = result.valid, "probe done");
        renderer.probe_finished(&result);
        results.push(result);

        if index + 1 < total && !pacing.is_zero() {
            tokio::time::sleep(pacing).await;
        }
    }

    let run = ProviderRun::completed(spec.id(), results);
    renderer.provider_finished(spec, &run);
    run
}

/// Runs each provider in turn and collects the runs in the same order.
pub async fn run_all(
    prober: &Prober,
    specs: &[&ProviderSpec],
    credentials: &dyn CredentialSource,
    pacing: Duration,
    renderer: &mut dyn Renderer,
) -> Vec<ProviderRun> {
    let mut runs = Vec::with_capacity(specs.len());
    for spec in specs {
        runs.push(run_provider(prober, spec, credentials, pacing, renderer).await);
    }
    runs
}
