use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::api::DreamhostApi;
use crate::config::Settings;
use crate::engine::{self, Reconciliation};
use crate::records::{self, AddressFamily, DnsRecord};

/// One full reconciliation pass.
///
/// The record listing is fetched once and shared by both families; IPv4 is
/// reconciled first, then IPv6 when enabled. Everything runs strictly in
/// sequence so two delete/add windows never interleave on the same zone.
/// There are no retries and no rollback: a run either completes or fails,
/// and the next scheduled run starts from the provider's then-current
/// listing.
pub async fn run(settings: &Settings, api: &dyn DreamhostApi) -> Result<()> {
    info!(domain = %settings.domain, "starting update pass");

    let listing = api
        .list_records()
        .await
        .context("failed to fetch record listing")?;
    let records = records::parse(&listing, &settings.domain);
    debug!(count = records.len(), "fetched records");

    reconcile_family(settings, api, &records, AddressFamily::V4).await?;

    if settings.check_ipv6 {
        reconcile_family(settings, api, &records, AddressFamily::V6).await?;
    }

    info!(domain = %settings.domain, "update pass complete");
    Ok(())
}

async fn reconcile_family(
    settings: &Settings,
    api: &dyn DreamhostApi,
    records: &[DnsRecord],
    family: AddressFamily,
) -> Result<()> {
    let current = records::select(records, &settings.domain, family);
    match current {
        Some(rec) => info!(%family, value = %rec.value, "found published record"),
        None => warn!(%family, "no published record yet"),
    }

    let observed = api
        .current_host_address(family)
        .await
        .with_context(|| format!("failed to discover {family} host address"))?;

    info!(
        %family,
        dns = current.map(|r| r.value.as_str()).unwrap_or("-"),
        host = %observed,
        "address check"
    );

    let outcome = engine::reconcile(
        api,
        &settings.domain,
        family,
        current.map(|r| r.value.as_str()),
        &observed,
    )
    .await
    .with_context(|| format!("failed to reconcile {family} record"))?;

    if let Reconciliation::Replaced { previous } = outcome {
        info!(
            %family,
            from = previous.as_deref().unwrap_or("-"),
            to = %observed,
            "record updated"
        );
    }

    Ok(())
}
