//! Player record store: the only way the service touches player rows.

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::domain::pagination::{Page, PageRequest, SortOrder};
use crate::domain::player::{normalize_properties, Player, PlayerStatus};
use crate::entities::game_players;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

impl From<game_players::PlayerStatus> for PlayerStatus {
    fn from(status: game_players::PlayerStatus) -> Self {
        match status {
            game_players::PlayerStatus::Active => PlayerStatus::Active,
            game_players::PlayerStatus::Eliminated => PlayerStatus::Eliminated,
        }
    }
}

impl From<PlayerStatus> for game_players::PlayerStatus {
    fn from(status: PlayerStatus) -> Self {
        match status {
            PlayerStatus::Active => game_players::PlayerStatus::Active,
            PlayerStatus::Eliminated => game_players::PlayerStatus::Eliminated,
        }
    }
}

impl TryFrom<game_players::Model> for Player {
    type Error = DomainError;

    fn try_from(model: game_players::Model) -> Result<Self, Self::Error> {
        let properties: Vec<i32> = serde_json::from_str(&model.properties).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!(
                    "properties of player {} in game {} are not a JSON integer array: {e}",
                    model.player_id, model.game_id
                ),
            )
        })?;

        Ok(Player {
            game_id: model.game_id,
            player_id: model.player_id,
            symbol: model.symbol,
            position: model.position,
            cash: model.cash,
            properties: normalize_properties(&properties),
            status: model.status.into(),
            in_jail: model.in_jail,
            jail_turns: model.jail_turns,
            lock_version: model.lock_version,
        })
    }
}

fn encode_properties(properties: &[i32]) -> Result<String, DomainError> {
    serde_json::to_string(&normalize_properties(properties)).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("Serialization".to_string()),
            e.to_string(),
        )
    })
}

fn player_not_found(game_id: i64, player_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Player,
        format!("Player {player_id} not found in game {game_id}"),
    )
}

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Player, DomainError> {
    players_adapter::find(conn, game_id, player_id)
        .await?
        .ok_or_else(|| player_not_found(game_id, player_id))?
        .try_into()
}

/// One page of a game's roster, ordered by player_id.
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    request: &PageRequest,
) -> Result<Page<Player>, DomainError> {
    let query = players_adapter::PlayerListQuery {
        status: request.filter.status.map(Into::into),
        in_jail: request.filter.in_jail,
        descending: request.order == SortOrder::Desc,
        offset: request.offset(),
        limit: u64::from(request.page_size),
    };

    let (rows, total) = players_adapter::list_page(conn, game_id, &query).await?;
    let items = rows
        .into_iter()
        .map(Player::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page::new(items, request, total))
}

/// Persist `player` if its `lock_version` is still the stored one.
///
/// Returns the stored record with the incremented version. A stale version
/// yields `Conflict(OptimisticLock)`.
pub async fn save<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player: &Player,
) -> Result<Player, DomainError> {
    let dto = players_adapter::PlayerUpdate {
        game_id: player.game_id,
        player_id: player.player_id,
        current_lock_version: player.lock_version,
        symbol: player.symbol.clone(),
        position: player.position,
        cash: player.cash,
        properties_json: encode_properties(&player.properties)?,
        status: player.status.into(),
        in_jail: player.in_jail,
        jail_turns: player.jail_turns,
    };

    match players_adapter::update_player(conn, dto).await {
        Ok(model) => model.try_into(),
        Err(sea_orm::DbErr::RecordNotFound(_)) => {
            Err(player_not_found(player.game_id, player.player_id))
        }
        Err(e) => Err(e.into()),
    }
}

/// Seed a player row. Game setup lives outside the roster surface; this
/// exists for bootstrapping and tests.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player: &Player,
) -> Result<Player, DomainError> {
    let dto = players_adapter::PlayerCreate {
        game_id: player.game_id,
        player_id: player.player_id,
        symbol: player.symbol.clone(),
        position: player.position,
        cash: player.cash,
        properties_json: encode_properties(&player.properties)?,
        status: player.status.into(),
        in_jail: player.in_jail,
        jail_turns: player.jail_turns,
    };

    players_adapter::create_player(conn, dto).await?.try_into()
}
