//! Positive integer ids taken from the route path.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

fn positive_id(req: &HttpRequest, name: &str, label: &str, code: ErrorCode) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid {label} id: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            code,
            format!("{label} id must be positive, got: {id}"),
        ));
    }
    Ok(id)
}

/// `{game_id}` path segment. Existence is checked by the service, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(positive_id(req, "game_id", "Game", ErrorCode::InvalidGameId).map(GameId))
    }
}

/// `{player_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerId(pub i64);

impl FromRequest for PlayerId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(positive_id(req, "player_id", "Player", ErrorCode::InvalidPlayerId).map(PlayerId))
    }
}
