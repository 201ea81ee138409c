// SPDX-License-Identifier: Apache-2.0

use crate::errors::GatewayError;
use crate::gateway::Gateway;
use bijux_dex_model::{RecordDetail, RecordKey, RecordSummary};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::warn;

/// Fetches every summary's detail concurrently and returns them in summary
/// order. A failed detail fetch omits that card and is logged; it never fails
/// the batch.
pub async fn collect_cards<G>(gateway: Arc<G>, summaries: &[RecordSummary]) -> Vec<RecordDetail>
where
    G: Gateway + ?Sized,
{
    let mut set = JoinSet::new();
    for (idx, summary) in summaries.iter().enumerate() {
        let gateway = Arc::clone(&gateway);
        let name = summary.name.clone();
        set.spawn(async move {
            let result = match RecordKey::parse(&name) {
                Ok(key) => gateway.record(&key).await,
                Err(e) => Err(GatewayError::Decode(e.to_string())),
            };
            (idx, name, result)
        });
    }

    let mut fetched = Vec::with_capacity(summaries.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, _, Ok(detail))) => fetched.push((idx, detail)),
            Ok((_, name, Err(err))) => {
                warn!(record = %name, error = %err, "omitting card: detail fetch failed");
            }
            Err(err) => warn!(error = %err, "omitting card: detail task failed"),
        }
    }
    fetched.sort_by_key(|(idx, _)| *idx);
    fetched.into_iter().map(|(_, detail)| detail).collect()
}
