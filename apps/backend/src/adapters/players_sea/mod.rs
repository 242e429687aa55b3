//! SeaORM adapter for player repository - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use crate::entities::game_players;

pub mod dto;

pub use dto::{PlayerCreate, PlayerListQuery, PlayerUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Option<game_players::Model>, sea_orm::DbErr> {
    game_players::Entity::find_by_id((game_id, player_id))
        .one(conn)
        .await
}

fn filtered(game_id: i64, query: &PlayerListQuery) -> Select<game_players::Entity> {
    let mut select =
        game_players::Entity::find().filter(game_players::Column::GameId.eq(game_id));
    if let Some(status) = query.status {
        select = select.filter(game_players::Column::Status.eq(status));
    }
    if let Some(in_jail) = query.in_jail {
        select = select.filter(game_players::Column::InJail.eq(in_jail));
    }
    select
}

/// One window of a game's roster ordered by player_id, plus the filtered total.
pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    query: &PlayerListQuery,
) -> Result<(Vec<game_players::Model>, u64), sea_orm::DbErr> {
    let total = filtered(game_id, query).count(conn).await?;

    let order = if query.descending {
        Order::Desc
    } else {
        Order::Asc
    };
    let rows = filtered(game_id, query)
        .order_by(game_players::Column::PlayerId, order)
        .offset(query.offset)
        .limit(query.limit)
        .all(conn)
        .await?;

    Ok((rows, total))
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<game_players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let player_active = game_players::ActiveModel {
        game_id: Set(dto.game_id),
        player_id: Set(dto.player_id),
        symbol: Set(dto.symbol),
        position: Set(dto.position),
        cash: Set(dto.cash),
        properties: Set(dto.properties_json),
        status: Set(dto.status),
        in_jail: Set(dto.in_jail),
        jail_turns: Set(dto.jail_turns),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };

    player_active.insert(conn).await
}

/// Compare-and-write on `lock_version`, then refetch.
///
/// Zero affected rows means either the row is gone (`RecordNotFound`) or
/// someone saved first (`Custom("OPTIMISTIC_LOCK:{..}")`).
pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerUpdate,
) -> Result<game_players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let key = (dto.game_id, dto.player_id);

    let result = game_players::Entity::update_many()
        .col_expr(game_players::Column::Symbol, Expr::value(dto.symbol))
        .col_expr(game_players::Column::Position, Expr::value(dto.position))
        .col_expr(game_players::Column::Cash, Expr::value(dto.cash))
        .col_expr(
            game_players::Column::Properties,
            Expr::value(dto.properties_json),
        )
        .col_expr(game_players::Column::Status, Expr::value(dto.status))
        .col_expr(game_players::Column::InJail, Expr::value(dto.in_jail))
        .col_expr(game_players::Column::JailTurns, Expr::value(dto.jail_turns))
        .col_expr(game_players::Column::UpdatedAt, Expr::value(now))
        .col_expr(
            game_players::Column::LockVersion,
            Expr::col(game_players::Column::LockVersion).add(1),
        )
        .filter(game_players::Column::GameId.eq(dto.game_id))
        .filter(game_players::Column::PlayerId.eq(dto.player_id))
        .filter(game_players::Column::LockVersion.eq(dto.current_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        let existing = game_players::Entity::find_by_id(key).one(conn).await?;
        if let Some(player) = existing {
            let payload = format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                dto.current_lock_version, player.lock_version
            );
            return Err(sea_orm::DbErr::Custom(payload));
        } else {
            return Err(sea_orm::DbErr::RecordNotFound(
                "Player not found".to_string(),
            ));
        }
    }

    game_players::Entity::find_by_id(key)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Player not found".to_string()))
}
