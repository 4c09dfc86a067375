//! HTTP handlers and router assembly.
//!
//! The first three routes go through [`UserService`], which manages its own
//! dispatch; the rest construct their tasks by hand around
//! [`DirectUserService`]. Upload routes consume `multipart/form-data` with
//! one or more parts named `files`.

use axum::extract::{DefaultBodyLimit, Multipart, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::error::Error;
use crate::model::User;
use crate::service::{DirectUserService, UserService};
use crate::store::UserStore;
use crate::task;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    users: UserService,
    direct: DirectUserService,
}

/// Build the demo router over `store`.
pub fn app(store: UserStore) -> Router {
    let state = AppState {
        users: UserService::new(store.clone()),
        direct: DirectUserService::new(store),
    };
    Router::new()
        .route("/loadUsersWithAsync", post(load_users_with_async))
        .route("/retrieveUsersWithAsync", get(retrieve_users_with_async))
        .route(
            "/retrieveUsersWithAsyncUsingFutureJoin",
            get(retrieve_users_with_future_join),
        )
        .route("/loadUsersWithFuture", post(load_users_with_future))
        .route("/retrieveUsersWithFuture", get(retrieve_users_with_future))
        .route(
            "/retrieveUsersFilterByName",
            get(retrieve_users_filter_by_name),
        )
        .route(
            "/retrieveUsersFilterByNameLogOutput",
            get(retrieve_users_filter_by_name_log_output),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

#[derive(Deserialize)]
struct NameFilter {
    name: String,
}

/// Drain the multipart stream, keeping the contents of every `files` part.
async fn collect_files(multipart: &mut Multipart) -> Result<Vec<Bytes>, Error> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("files") {
            files.push(field.bytes().await?);
        }
    }
    Ok(files)
}

/// Dispatch one save task per uploaded file; respond before any of them run.
async fn load_users_with_async(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<StatusCode, Error> {
    for file in collect_files(&mut multipart).await? {
        // Dropping the handle does not cancel the save.
        state.users.save_users(file);
    }
    Ok(StatusCode::CREATED)
}

/// Map the service's find-all task straight into the response.
async fn retrieve_users_with_async(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, Error> {
    state.users.find_all_users().map(Json).join().await
}

/// Run three concurrent find-alls and join them; the results are discarded.
async fn retrieve_users_with_future_join(
    State(state): State<AppState>,
) -> Result<StatusCode, Error> {
    let tasks = vec![
        state.users.find_all_users(),
        state.users.find_all_users(),
        state.users.find_all_users(),
    ];
    task::join_all(tasks).await?;
    Ok(StatusCode::OK)
}

/// Fire one detached task that saves the uploaded files sequentially. A file
/// that fails is logged and the rest still run.
async fn load_users_with_future(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<StatusCode, Error> {
    let files = collect_files(&mut multipart).await?;
    let direct = state.direct.clone();
    task::spawn_detached(async move {
        for file in files {
            if let Err(err) = direct.save_users(file).await {
                tracing::error!(error = %err, "failed to save uploaded file");
            }
        }
        Ok(())
    });
    Ok(StatusCode::CREATED)
}

/// Build a find-all task by hand and block on it.
async fn retrieve_users_with_future(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, Error> {
    let direct = state.direct.clone();
    let users = task::spawn(async move { direct.find_all_users().await })
        .join()
        .await?;
    Ok(Json(users))
}

/// Find-all mapped through a case-sensitive substring filter on `name`.
async fn retrieve_users_filter_by_name(
    State(state): State<AppState>,
    Query(NameFilter { name }): Query<NameFilter>,
) -> Result<Json<Vec<User>>, Error> {
    let direct = state.direct.clone();
    let users = task::spawn(async move { direct.find_all_users().await })
        .map(move |users| {
            users
                .into_iter()
                .filter(|u| u.name.contains(&name))
                .collect::<Vec<_>>()
        })
        .join()
        .await?;
    Ok(Json(users))
}

/// Same filter, but the chain ends in a consumer that logs each match on the
/// worker; the response goes out without waiting for it.
async fn retrieve_users_filter_by_name_log_output(
    State(state): State<AppState>,
    Query(NameFilter { name }): Query<NameFilter>,
) -> String {
    let direct = state.direct.clone();
    let filter = name.clone();
    task::spawn(async move { direct.find_all_users().await })
        .map(move |users| {
            users
                .into_iter()
                .filter(|u| u.name.contains(&filter))
                .collect::<Vec<_>>()
        })
        .consume(|users| {
            for user in &users {
                info!(name = %user.name, "matched user");
            }
        })
        .detach();
    format!("logging usernames containing {name}")
}
