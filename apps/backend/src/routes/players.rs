use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_with::rust::double_option;

use crate::auth::claims::CallerIdentity;
use crate::db::txn::with_txn;
use crate::domain::pagination::PlayerQuery;
use crate::domain::player::{PlayerField, PlayerPatch, PlayerStatus};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{GameId, PlayerId, ValidatedJson, ValidatedQuery};
use crate::state::app_state::AppState;

/// PATCH body. Every field is optional; an explicit `null` is refused
/// because no player field is nullable.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePlayerRequest {
    #[serde(default, with = "double_option")]
    pub symbol: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub position: Option<Option<i32>>,
    #[serde(default, with = "double_option")]
    pub cash: Option<Option<i64>>,
    #[serde(default, with = "double_option")]
    pub properties: Option<Option<Vec<i32>>>,
    #[serde(default, with = "double_option")]
    pub status: Option<Option<PlayerStatus>>,
    #[serde(default, with = "double_option")]
    pub in_jail: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub jail_turns: Option<Option<i32>>,
}

fn not_null<T>(field: PlayerField, value: Option<Option<T>>) -> Result<Option<T>, AppError> {
    match value {
        Some(None) => Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("{} must not be null", field.as_str()),
        )),
        other => Ok(other.flatten()),
    }
}

impl UpdatePlayerRequest {
    pub fn into_patch(self) -> Result<PlayerPatch, AppError> {
        Ok(PlayerPatch {
            symbol: not_null(PlayerField::Symbol, self.symbol)?,
            position: not_null(PlayerField::Position, self.position)?,
            cash: not_null(PlayerField::Cash, self.cash)?,
            properties: not_null(PlayerField::Properties, self.properties)?,
            status: not_null(PlayerField::Status, self.status)?,
            in_jail: not_null(PlayerField::InJail, self.in_jail)?,
            jail_turns: not_null(PlayerField::JailTurns, self.jail_turns)?,
        })
    }
}

async fn list_players(
    req: HttpRequest,
    game_id: GameId,
    query: ValidatedQuery<PlayerQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let GameId(game_id) = game_id;
    let query = query.into_inner();
    let service = app_state.player_service();

    let page = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            service
                .find_players_by_game(txn, game_id, &query)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(page))
}

async fn update_player(
    req: HttpRequest,
    game_id: GameId,
    player_id: PlayerId,
    caller: CallerIdentity,
    body: ValidatedJson<UpdatePlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (GameId(game_id), PlayerId(player_id)) = (game_id, player_id);
    let patch = body.into_inner().into_patch()?;
    let is_admin = caller.is_admin();
    let service = app_state.player_service();

    tracing::debug!(
        game_id,
        player_id,
        is_admin,
        "roster.update_requested"
    );

    let player = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            service
                .update(txn, game_id, player_id, &patch, is_admin)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(player))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_players)))
        .service(web::resource("/{player_id}").route(web::patch().to(update_player)));
}
