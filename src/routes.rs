use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::error;

use crate::{
    AppState,
    error::AppResult,
    models::{CreateUserForm, MovieTitleForm, Notice},
    templates,
};

const NOTICE_COOKIE: &str = "notice";

pub async fn index(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let users = state.data.list_users().await?;
    let (jar, notice) = take_notice(jar);
    Ok((jar, Html(templates::users_page(&users, notice.as_ref()))))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<CreateUserForm>,
) -> (CookieJar, Redirect) {
    let name = form.name.trim();
    if name.is_empty() {
        return (flash(jar, Notice::warning("User name cannot be empty.")), Redirect::to("/"));
    }

    match state.data.create_user(name).await {
        Ok(()) => {
            (flash(jar, Notice::success(format!("Added user \"{name}\"."))), Redirect::to("/"))
        }
        Err(err) => {
            error!(error = %err, "failed to create user");
            (flash(jar, generic_error()), Redirect::to("/"))
        }
    }
}

pub async fn movies(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
    jar: CookieJar,
) -> AppResult<Response> {
    let Some(user) = state.data.get_user(user_id).await? else {
        return Ok(not_found());
    };

    let movies = state.data.list_movies(user_id).await?;
    let (jar, notice) = take_notice(jar);
    Ok((jar, Html(templates::movies_page(&user, &movies, notice.as_ref()))).into_response())
}

pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
    jar: CookieJar,
    Form(form): Form<MovieTitleForm>,
) -> Response {
    let list = movie_list_path(user_id);

    let user = match state.data.get_user(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return not_found(),
        Err(err) => {
            error!(error = %err, user_id = user_id, "failed to load user");
            return (flash(jar, generic_error()), Redirect::to(&list)).into_response();
        }
    };

    let title = form.title.trim();
    if title.is_empty() {
        let jar = flash(jar, Notice::warning("Movie title cannot be empty."));
        return (jar, Redirect::to(&list)).into_response();
    }

    match state.data.add_movie(user_id, title).await {
        Ok(movie) => {
            // The stored name can differ from the typed title when the
            // lookup corrected it; the notice shows the stored one.
            let notice = if movie.director.is_some()
                || movie.year.is_some()
                || movie.poster_url.is_some()
            {
                Notice::success(format!("Added \"{}\" to {}'s movies.", movie.name, user.name))
            } else {
                Notice::warning(format!(
                    "Added \"{}\" without details - the movie database had no match.",
                    movie.name
                ))
            };
            (flash(jar, notice), Redirect::to(&list)).into_response()
        }
        Err(err) => {
            error!(error = %err, user_id = user_id, "failed to add movie");
            (flash(jar, generic_error()), Redirect::to(&list)).into_response()
        }
    }
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path((user_id, movie_id)): Path<(i32, i32)>,
    jar: CookieJar,
    Form(form): Form<MovieTitleForm>,
) -> (CookieJar, Redirect) {
    let list = movie_list_path(user_id);

    let title = form.title.trim();
    if title.is_empty() {
        return (flash(jar, Notice::warning("Movie title cannot be empty.")), redirect(&list));
    }

    match state.data.update_movie(movie_id, title).await {
        Ok(true) => {
            (flash(jar, Notice::success(format!("Renamed movie to \"{title}\"."))), redirect(&list))
        }
        Ok(false) => (flash(jar, Notice::error("Movie not found.")), redirect(&list)),
        Err(err) => {
            error!(error = %err, movie_id = movie_id, "failed to update movie");
            (flash(jar, generic_error()), redirect(&list))
        }
    }
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path((user_id, movie_id)): Path<(i32, i32)>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let list = movie_list_path(user_id);

    match state.data.delete_movie(movie_id).await {
        Ok(true) => (flash(jar, Notice::success("Movie deleted.")), redirect(&list)),
        Ok(false) => (flash(jar, Notice::error("Movie not found.")), redirect(&list)),
        Err(err) => {
            error!(error = %err, movie_id = movie_id, "failed to delete movie");
            (flash(jar, generic_error()), redirect(&list))
        }
    }
}

fn movie_list_path(user_id: i32) -> String {
    format!("/users/{user_id}/movies")
}

fn redirect(path: &str) -> Redirect {
    Redirect::to(path)
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(templates::not_found_page())).into_response()
}

fn generic_error() -> Notice {
    Notice::error("Something went wrong. Please try again.")
}

fn flash(jar: CookieJar, notice: Notice) -> CookieJar {
    jar.add(Cookie::build((NOTICE_COOKIE, notice.encode())).path("/"))
}

/// Reads and clears the pending notice so it renders exactly once.
fn take_notice(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let notice = jar.get(NOTICE_COOKIE).and_then(|c| Notice::decode(c.value()));
    let jar = jar.remove(Cookie::build(NOTICE_COOKIE).path("/"));
    (jar, notice)
}
