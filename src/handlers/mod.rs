/// HTTP handlers for the post resource
///
/// Six operations: list, get, create, update, delete, and the
/// comments-for-post relation query. All share one pattern:
/// validate input, check existence where an id is involved, delegate
/// to the store, shape exactly one response.
pub mod posts;

pub use posts::{
    create_post, delete_post, get_post, get_post_comments, list_posts, update_post,
};

use actix_web::web;

/// Register the post resource routes under `/api/posts`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .service(
                web::resource("")
                    .route(web::get().to(list_posts))
                    .route(web::post().to(create_post)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_post))
                    .route(web::put().to(update_post))
                    .route(web::delete().to(delete_post)),
            )
            .route("/{id}/comments", web::get().to(get_post_comments)),
    );
}
