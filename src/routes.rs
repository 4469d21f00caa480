use actix_web::dev::HttpServiceFactory;
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Feed;
use crate::prelude::*;

pub fn service() -> impl HttpServiceFactory {
    web::scope("")
        .route("/", web::get().to(board))
        .route("/refresh", web::get().to(refresh))
}


#[derive(Debug, Serialize)]
struct BoardResponse<'a> {
    feeds: &'a Vec<Feed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refreshed_at: &'a Option<DateTime<Utc>>,
}

async fn board(data: web::Data<AppData>) -> HttpResponse {
    let board = data.store.board();

    HttpResponse::Ok().json(BoardResponse {
        feeds: &board.feeds,
        refreshed_at: &board.refreshed_at,
    })
}


#[derive(Debug, Serialize)]
struct RefreshResponse {
    status: u16,
    msg: String,
}

async fn refresh(data: web::Data<AppData>) -> HttpResponse {
    match data.feeds.refresh_all().await {
        Ok(()) => HttpResponse::Ok().json(RefreshResponse {
            status: 200,
            msg: "ok".to_owned(),
        }),
        Err(e) => HttpResponse::InternalServerError().json(RefreshResponse {
            status: 500,
            msg: e.to_owned(),
        }),
    }
}
