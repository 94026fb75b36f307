//! Tag pages: list, creation, rename, and deletion.
//!
//! Deleting a tag cascades to its tasks at the database layer, so the
//! handler only has to remove the tag row. Duplicate names are allowed;
//! tags are identified by id everywhere.

use super::context::PageContext;
use super::error::AppError;
use super::session::AuthUser;
use crate::db::tags::{Tag, Tags};
use crate::libs::forms::{TagForm, TagFormData};
use crate::libs::messages::Message;
use crate::libs::summary::Summary;
use axum::extract::Path;
use axum::response::Redirect;
use axum::{Form, Json};

pub async fn all_tags(user: AuthUser) -> Result<Json<PageContext>, AppError> {
    let mut tags = Tags::new()?;
    let items = tags.list(user.id)?;
    Ok(Json(PageContext::tag_list("Tags", Summary::fetch(user.id)?, items)))
}

pub async fn create_tag(user: AuthUser, Form(data): Form<TagFormData>) -> Result<Redirect, AppError> {
    let name = TagForm::validate(&data).map_err(AppError::Validation)?;

    let mut tags = Tags::new()?;
    tags.create(&Tag::new(user.id, name))?;
    Ok(Redirect::to("/all_tags"))
}

pub async fn tag_detail(user: AuthUser, Path(id): Path<i64>) -> Result<Json<PageContext>, AppError> {
    let mut tags = Tags::new()?;
    let tag = tags.get(user.id, id)?.ok_or_else(|| AppError::NotFound(Message::TagNotFound.to_string()))?;
    let title = tag.name.clone();
    Ok(Json(PageContext::tag_detail(&title, Summary::fetch(user.id)?, tag)))
}

pub async fn edit_tag(user: AuthUser, Path(id): Path<i64>, Form(data): Form<TagFormData>) -> Result<Redirect, AppError> {
    let name = TagForm::validate(&data).map_err(AppError::Validation)?;

    let mut tags = Tags::new()?;
    if tags.get(user.id, id)?.is_none() {
        return Err(AppError::NotFound(Message::TagNotFound.to_string()));
    }
    tags.update(user.id, id, &name)?;
    Ok(Redirect::to("/all_tags"))
}

pub async fn delete_tag(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    let mut tags = Tags::new()?;
    if tags.delete(user.id, id)? == 0 {
        return Err(AppError::NotFound(Message::TagNotFound.to_string()));
    }
    Ok(Redirect::to("/all_tags"))
}
