// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Query endpoint resolution

use tracing::warn;
use url::Url;

use crate::config::MultisendConfig;
use crate::errors::QueryError;

/// Pick the endpoint a balance query should go to
///
/// In order of preference:
/// 1. the endpoint the wallet session offers, if it parses as a URL
/// 2. the chain's configured `query_endpoint`
/// 3. the public directory, `{rpc_directory}{chain_name}`
pub fn resolve_query_endpoint(
    config: &MultisendConfig,
    chain_name: &str,
    session_endpoint: Option<&str>,
) -> Result<Url, QueryError> {
    if let Some(raw) = session_endpoint.map(str::trim).filter(|s| !s.is_empty()) {
        match Url::parse(raw) {
            Ok(url) => return Ok(url),
            Err(e) => warn!(
                chain_name = %chain_name,
                endpoint = raw,
                error = %e,
                "Ignoring invalid session query endpoint"
            ),
        }
    }

    if let Some(url) = config.query_endpoint(chain_name) {
        return Ok(url.clone());
    }

    config
        .directory_endpoint(chain_name)
        .map_err(|e| QueryError::endpoint(chain_name, e.to_string()))
}
