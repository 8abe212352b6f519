//! # Version Aggregation
//!
//! Groups the observations of one service by the detected version and turns
//! every group into a [`TableRow`].
//!
//! The result depends only on the *set* of observations: hosts inside a row
//! and the rows themselves are sorted, so the order in which scan files were
//! discovered or parsed never shows up in the report.

use std::collections::BTreeMap;

use svcmap_common::models::{HOST_SEPARATOR, Observation, TableRow};
use tracing::debug;

/// Builds the report rows for `service_name`.
///
/// * Observations on `filtered` ports are dropped, even when the service
///   matches.
/// * The service name must match exactly, case included.
/// * `host:port` entries are grouped by [`Observation::version_key`], sorted
///   within each group and joined with [`HOST_SEPARATOR`]. Repeated entries
///   are kept.
/// * Rows come out in ascending version key order.
pub fn aggregate(observations: &[Observation], service_name: &str) -> Vec<TableRow> {
    // Ordered by key, so the rows need no separate sort.
    let mut versions: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for observation in observations
        .iter()
        .filter(|obs| !obs.state.is_filtered())
        .filter(|obs| obs.service_name == service_name)
    {
        versions
            .entry(observation.version_key())
            .or_default()
            .push(observation.host_port());
    }

    debug!(
        "{} distinct versions of '{service_name}' in {} observations",
        versions.len(),
        observations.len()
    );

    versions
        .into_iter()
        .map(|(version_key, mut hosts)| {
            hosts.sort();
            TableRow {
                hosts: hosts.join(HOST_SEPARATOR),
                service_name: service_name.to_string(),
                version_key,
            }
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
