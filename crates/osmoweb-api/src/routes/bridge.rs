//! Axelar bridge configuration routes
//!
//! List endpoints are infinite queries over the registry's stable ordering.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};

use axelar::{BridgeAsset, ChainIdKind, ChainIdMap, SourceChain, SourceChainConfig};
use osmoweb_core::{paginate_query, InfiniteQuery, OwnedPage};

use super::infinite_query;
use crate::dto::{bridge_error, ApiErrorResponse, ChainIdResponse};
use crate::AppState;

/// Create bridge routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assets", get(list_assets))
        .route("/assets/:denom", get(get_asset))
        .route("/assets/:denom/source-chains", get(list_source_chains))
        .route("/axelar-chains", get(list_axelar_chains))
        .route("/axelar-chains/:chain_id", get(resolve_axelar_chain))
        .route("/evm-chains", get(list_evm_chains))
        .route("/evm-chains/:chain_name", get(resolve_evm_chain))
}

/// GET /bridge/assets - Page through bridged assets
async fn list_assets(
    State(state): State<AppState>,
    query: Result<Query<InfiniteQuery>, QueryRejection>,
) -> Result<Json<OwnedPage<BridgeAsset>>, ApiErrorResponse> {
    let query = infinite_query(&state, query)?;
    let page = paginate_query(state.registry().assets(), &query).into_owned();

    tracing::debug!(
        cursor = ?query.cursor,
        limit = ?query.limit,
        returned = page.items.len(),
        next_cursor = page.next_cursor,
        "Served bridge assets page"
    );

    Ok(Json(page))
}

/// GET /bridge/assets/:denom - Get one asset's bridge config
async fn get_asset(
    State(state): State<AppState>,
    Path(denom): Path<String>,
) -> Result<Json<BridgeAsset>, ApiErrorResponse> {
    let asset = state.registry().require(&denom).map_err(bridge_error)?;
    Ok(Json(asset.clone()))
}

/// GET /bridge/assets/:denom/source-chains - Page through an asset's source chains
async fn list_source_chains(
    State(state): State<AppState>,
    Path(denom): Path<String>,
    query: Result<Query<InfiniteQuery>, QueryRejection>,
) -> Result<Json<OwnedPage<SourceChainConfig>>, ApiErrorResponse> {
    let query = infinite_query(&state, query)?;
    let asset = state.registry().require(&denom).map_err(bridge_error)?;

    Ok(Json(
        paginate_query(&asset.config.source_chains, &query).into_owned(),
    ))
}

/// GET /bridge/axelar-chains - Page through the Axelar chain id table
async fn list_axelar_chains(
    State(state): State<AppState>,
    query: Result<Query<InfiniteQuery>, QueryRejection>,
) -> Result<Json<OwnedPage<ChainIdResponse>>, ApiErrorResponse> {
    let query = infinite_query(&state, query)?;
    Ok(Json(chain_page(state.chains().get(ChainIdKind::Axelar), &query)))
}

/// GET /bridge/axelar-chains/:chain_id - Resolve an Axelar chain id
async fn resolve_axelar_chain(
    State(state): State<AppState>,
    Path(chain_id): Path<String>,
) -> Result<Json<ChainIdResponse>, ApiErrorResponse> {
    resolve(state.chains().get(ChainIdKind::Axelar), chain_id)
}

/// GET /bridge/evm-chains - Page through the EVM client chain table
async fn list_evm_chains(
    State(state): State<AppState>,
    query: Result<Query<InfiniteQuery>, QueryRejection>,
) -> Result<Json<OwnedPage<ChainIdResponse>>, ApiErrorResponse> {
    let query = infinite_query(&state, query)?;
    Ok(Json(chain_page(
        state.chains().get(ChainIdKind::EvmClient),
        &query,
    )))
}

/// GET /bridge/evm-chains/:chain_name - Resolve an EVM client chain name
async fn resolve_evm_chain(
    State(state): State<AppState>,
    Path(chain_name): Path<String>,
) -> Result<Json<ChainIdResponse>, ApiErrorResponse> {
    resolve(state.chains().get(ChainIdKind::EvmClient), chain_name)
}

fn chain_page(map: &ChainIdMap, query: &InfiniteQuery) -> OwnedPage<ChainIdResponse> {
    let entries: Vec<(&str, SourceChain)> = map.iter().collect();
    paginate_query(&entries, query)
        .map(|(chain_id, source_chain)| chain_response(map.kind(), chain_id, *source_chain))
}

fn resolve(
    map: &ChainIdMap,
    chain_id: String,
) -> Result<Json<ChainIdResponse>, ApiErrorResponse> {
    let source_chain = map.resolve(&chain_id).map_err(bridge_error)?;
    Ok(Json(chain_response(map.kind(), &chain_id, source_chain)))
}

fn chain_response(
    kind: ChainIdKind,
    chain_id: &str,
    source_chain: SourceChain,
) -> ChainIdResponse {
    ChainIdResponse {
        chain_id: chain_id.to_string(),
        kind,
        source_chain,
        display_name: source_chain.display_name().to_string(),
    }
}
