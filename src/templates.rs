use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::{movie, user},
    models::{Notice, NoticeLevel},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn users_page(users: &[user::Model], notice: Option<&Notice>) -> String {
    page(
        "MoviWeb",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    @if let Some(notice) = notice {
                        (notice_banner(notice))
                    }

                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "MoviWeb" }
                        p class="mt-2 text-gray-600" { "Pick a user to see their favorite movies." }

                        @if users.is_empty() {
                            p class="mt-8 text-gray-500" { "No users yet." }
                        } @else {
                            ul class="mt-8 divide-y divide-gray-100" {
                                @for user in users {
                                    li {
                                        a class="block py-3 text-blue-600 hover:text-blue-800" href=(format!("/users/{}/movies", user.id)) {
                                            (user.name)
                                        }
                                    }
                                }
                            }
                        }

                        form class="mt-8 flex gap-3" method="post" action="/users" {
                            input class="flex-1 rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="name" placeholder="New user name";
                            button class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add user" }
                        }
                    }
                }
            }
        },
    )
}

pub fn movies_page(user: &user::Model, movies: &[movie::Model], notice: Option<&Notice>) -> String {
    let add_action = format!("/users/{}/movies", user.id);

    page(
        &format!("{} · MoviWeb", user.name),
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-10" {
                    @if let Some(notice) = notice {
                        (notice_banner(notice))
                    }

                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { (user.name) "'s movies" }
                        }
                        a class="text-sm text-blue-600 hover:text-blue-800" href="/" { "All users" }
                    }

                    form class="mt-6 flex gap-3" method="post" action=(add_action) {
                        input class="flex-1 rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" placeholder="Movie title";
                        button class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet. Add one above." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(user.id, movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found_page() -> String {
    page(
        "Not found",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Not found" }
                        p class="mt-4 text-gray-700" { "That page doesn't exist." }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

/// Generic failure page. Deliberately carries no detail about what went
/// wrong; the cause is in the server log.
pub fn error_page() -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Something went wrong" }
                        p class="mt-4 text-gray-700" { "Please try again." }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn movie_card(user_id: i32, movie: &movie::Model) -> Markup {
    let update_action = format!("/users/{}/movies/{}/update", user_id, movie.id);
    let delete_action = format!("/users/{}/movies/{}/delete", user_id, movie.id);

    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start gap-4" {
                @if let Some(poster) = &movie.poster_url {
                    img class="h-28 w-auto rounded" src=(poster) alt=(format!("{} poster", movie.name));
                }

                div class="flex-1" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        (movie.name)
                        @if let Some(year) = movie.year {
                            span class="ml-2 font-normal text-gray-500" { "(" (year) ")" }
                        }
                    }
                    @if let Some(director) = &movie.director {
                        p class="mt-1 text-sm text-gray-500" { "Directed by " (director) }
                    }

                    div class="mt-4 flex items-center gap-3" {
                        form class="flex gap-2" method="post" action=(update_action) {
                            input class="rounded-md border border-gray-300 px-2 py-1 text-sm" name="title" placeholder="New title";
                            button class="rounded-md bg-gray-100 px-3 py-1 text-sm text-gray-700 hover:bg-gray-200" type="submit" { "Rename" }
                        }
                        form method="post" action=(delete_action) {
                            button class="rounded-md bg-red-50 px-3 py-1 text-sm text-red-700 hover:bg-red-100" type="submit" { "Delete" }
                        }
                    }
                }
            }
        }
    }
}

fn notice_banner(notice: &Notice) -> Markup {
    let classes = match notice.level {
        NoticeLevel::Success => "border-green-500 bg-green-50 text-green-800",
        NoticeLevel::Warning => "border-yellow-500 bg-yellow-50 text-yellow-800",
        NoticeLevel::Error => "border-red-500 bg-red-50 text-red-800",
    };

    html! {
        div class=(format!("mb-6 rounded-md border-l-4 p-4 {}", classes)) {
            p class="text-sm font-medium" { (notice.message) }
        }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}
