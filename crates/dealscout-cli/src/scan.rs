//! Scan command handlers.
//!
//! Per-provider failures are logged and summarized rather than propagated so
//! a single unreachable vendor never aborts the run; the scan only errors
//! when configuration is invalid or every provider failed.

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use dealscout_core::{AppConfig, ProviderConfig};
use dealscout_scraper::{collect_all, HttpRenderer};

use crate::report;
use crate::ExportFormat;

pub(crate) async fn run_scan(
    config: &AppConfig,
    provider_filter: Option<&str>,
    dry_run: bool,
    export: Option<&Path>,
    format: ExportFormat,
) -> anyhow::Result<()> {
    let providers_file = dealscout_core::load_providers(&config.providers_path)?;
    let criteria = dealscout_core::load_profile(&config.profile_path)?;
    let providers = select_providers(providers_file.providers, provider_filter)?;

    if dry_run {
        let names: Vec<&str> = providers.iter().map(|p| p.name.as_str()).collect();
        println!(
            "dry-run: would scan {} providers: [{}]",
            providers.len(),
            names.join(", ")
        );
        return Ok(());
    }

    let renderer = HttpRenderer::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )?;

    let outcome = collect_all(
        &renderer,
        &providers,
        &criteria,
        config.inter_provider_delay_ms,
    )
    .await?;

    let provider_count = providers.len();
    let failed = outcome.failed_providers();
    if failed == provider_count {
        anyhow::bail!("all {provider_count} providers failed; nothing was scanned");
    }

    // Stable sort: ties keep their provider configuration order.
    let mut deals = outcome.deals;
    deals.sort_by(|a, b| b.total_score().cmp(&a.total_score()));

    if deals.is_empty() {
        println!("no matching deals found.");
    } else {
        println!("Found {} matching deals:\n", deals.len());
        print!("{}", report::render_table(&deals));
    }

    if failed > 0 {
        tracing::warn!(failed, total = provider_count, "some providers failed during the scan");
        println!("\n{failed} of {provider_count} providers failed; see the log for details.");
    }

    if let Some(path) = export {
        let document = match format {
            ExportFormat::Md => report::to_markdown(&deals, Utc::now()),
            ExportFormat::Csv => report::to_csv(&deals),
        };
        std::fs::write(path, document)
            .with_context(|| format!("failed to write export to {}", path.display()))?;
        println!("exported {} deals to {}", deals.len(), path.display());
    }

    Ok(())
}

pub(crate) fn run_providers(config: &AppConfig) -> anyhow::Result<()> {
    let providers_file = dealscout_core::load_providers(&config.providers_path)?;
    println!("{} configured providers:", providers_file.providers.len());
    for provider in &providers_file.providers {
        println!("  {} — {}", provider.name, provider.url);
    }
    Ok(())
}

/// Resolve the optional `--provider` filter against the configured list.
fn select_providers(
    all: Vec<ProviderConfig>,
    filter: Option<&str>,
) -> anyhow::Result<Vec<ProviderConfig>> {
    let Some(name) = filter else {
        return Ok(all);
    };

    let selected: Vec<ProviderConfig> = all
        .into_iter()
        .filter(|p| p.name.eq_ignore_ascii_case(name))
        .collect();
    if selected.is_empty() {
        anyhow::bail!("provider '{name}' is not configured; check the providers file");
    }
    Ok(selected)
}
