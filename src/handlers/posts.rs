/// Post handlers - HTTP endpoints for post operations
use crate::db::PostStore;
use crate::error::{AppError, Result};
use crate::models::PostFields;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

const MSG_POST_NOT_FOUND: &str = "The post with the specified ID does not exist";
const MSG_MISSING_FIELDS: &str = "Please provide title and contents for the post";
const MSG_LIST_FAILED: &str = "The posts information could not be retrieved";
const MSG_GET_FAILED: &str = "The post information could not be retrieved";
const MSG_CREATE_FAILED: &str = "There was an error while saving the post to the database";
const MSG_UPDATE_FAILED: &str = "The post information could not be modified";
const MSG_DELETE_FAILED: &str = "The post could not be removed";
const MSG_COMMENTS_FAILED: &str = "The comments information could not be retrieved";

/// Request body for create and update. Both fields are optional at
/// the serde level so that a missing field and an explicit null reach
/// validation instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct PostPayload {
    pub title: Option<String>,
    pub contents: Option<String>,
}

/// Reject missing or empty title/contents before any store call.
fn validate(payload: &PostPayload) -> Result<PostFields> {
    match (&payload.title, &payload.contents) {
        (Some(title), Some(contents)) if !title.is_empty() && !contents.is_empty() => {
            Ok(PostFields {
                title: title.clone(),
                contents: contents.clone(),
            })
        }
        _ => Err(AppError::Validation(MSG_MISSING_FIELDS.to_string())),
    }
}

/// List all posts
pub async fn list_posts(store: web::Data<dyn PostStore>) -> Result<HttpResponse> {
    let posts = store
        .find_all()
        .await
        .map_err(|e| AppError::store(MSG_LIST_FAILED, e))?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by ID
pub async fn get_post(
    store: web::Data<dyn PostStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let post = store
        .find_by_id(*id)
        .await
        .map_err(|e| AppError::store(MSG_GET_FAILED, e))?
        .ok_or_else(|| AppError::NotFound(MSG_POST_NOT_FOUND.to_string()))?;

    Ok(HttpResponse::Ok().json(post))
}

/// Create a new post
pub async fn create_post(
    store: web::Data<dyn PostStore>,
    payload: web::Json<PostPayload>,
) -> Result<HttpResponse> {
    let fields = validate(&payload)?;

    let outcome = store
        .insert(&fields)
        .await
        .map_err(|e| AppError::store(MSG_CREATE_FAILED, e))?;

    // Normalize whatever shape the store reported into the full
    // persisted record, with a follow-up lookup when only an id came
    // back. A miss on that lookup is a creation failure: the row was
    // just inserted.
    let post = match outcome.resolve() {
        Ok(post) => post,
        Err(id) => store
            .find_by_id(id)
            .await
            .map_err(|e| AppError::store(MSG_CREATE_FAILED, e))?
            .ok_or_else(|| {
                AppError::store(
                    MSG_CREATE_FAILED,
                    crate::db::StoreError::new(
                        "inserted post missing on re-read",
                        format!("post id {} not found after insert", id),
                    ),
                )
            })?,
    };

    Ok(HttpResponse::Created().json(post))
}

/// Update a post's title and contents
pub async fn update_post(
    store: web::Data<dyn PostStore>,
    id: web::Path<i64>,
    payload: web::Json<PostPayload>,
) -> Result<HttpResponse> {
    let fields = validate(&payload)?;
    let id = id.into_inner();

    store
        .find_by_id(id)
        .await
        .map_err(|e| AppError::store(MSG_UPDATE_FAILED, e))?
        .ok_or_else(|| AppError::NotFound(MSG_POST_NOT_FOUND.to_string()))?;

    let affected = store
        .update(id, &fields)
        .await
        .map_err(|e| AppError::store(MSG_UPDATE_FAILED, e))?;

    // The row can vanish between the existence check and the update;
    // the store reporting zero rows is a second not-found, not a fault.
    if affected == 0 {
        return Err(AppError::NotFound(MSG_POST_NOT_FOUND.to_string()));
    }

    // The persisted, re-read value is authoritative, never the input.
    let updated = store
        .find_by_id(id)
        .await
        .map_err(|e| AppError::store(MSG_UPDATE_FAILED, e))?
        .ok_or_else(|| AppError::NotFound(MSG_POST_NOT_FOUND.to_string()))?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a post
pub async fn delete_post(
    store: web::Data<dyn PostStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let id = id.into_inner();

    let post = store
        .find_by_id(id)
        .await
        .map_err(|e| AppError::store(MSG_DELETE_FAILED, e))?
        .ok_or_else(|| AppError::NotFound(MSG_POST_NOT_FOUND.to_string()))?;

    store
        .remove(id)
        .await
        .map_err(|e| AppError::store(MSG_DELETE_FAILED, e))?;

    // The record no longer exists; respond with the pre-delete snapshot.
    Ok(HttpResponse::Ok().json(post))
}

/// Get comments for a post
pub async fn get_post_comments(
    store: web::Data<dyn PostStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let id = id.into_inner();

    store
        .find_by_id(id)
        .await
        .map_err(|e| AppError::store(MSG_COMMENTS_FAILED, e))?
        .ok_or_else(|| AppError::NotFound(MSG_POST_NOT_FOUND.to_string()))?;

    let comments = store
        .find_comments_by_post_id(id)
        .await
        .map_err(|e| AppError::store(MSG_COMMENTS_FAILED, e))?;

    Ok(HttpResponse::Ok().json(comments))
}
