//! Owner endpoints, all mounted under `/owners`

use ntex::{util::Bytes, web};

use crate::{
    api, consts,
    front::{
        AppState, errors, forms,
        middleware::allowed_method::{AllowedMethod, Delete, Get, Post, Put},
        utils,
    },
};

/// Creates an owner from the JSON body. `POST /owners`
pub async fn create_owner(
    _: AllowedMethod<Post>,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<web::HttpResponse, web::Error> {
    let owner_info = utils::decode_json_or_default::<forms::owner::OwnerForm>(&body);

    let owner = api::owner::create_owner(owner_info, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::InternalServerError(format!(
                "function create_owner raised an error: {e}"
            ))
        })?;

    Ok(web::HttpResponse::Created().json(&owner))
}

/// Lists every owner with its pets. `GET /owners/all`
pub async fn list_owners(
    _: AllowedMethod<Get>,
    app_state: web::types::State<AppState>,
) -> Result<web::HttpResponse, web::Error> {
    let owners = api::owner::list_owners(&app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::InternalServerError(format!(
                "function list_owners raised an error: {e}"
            ))
        })?;

    Ok(web::HttpResponse::Ok().json(&owners))
}

/// Renames the owner given by `?id=`. `PUT /owners/update`
pub async fn update_owner(
    _: AllowedMethod<Put>,
    query: web::types::Query<forms::query::QueryParams>,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<web::HttpResponse, web::Error> {
    let owner_id =
        utils::parse_id_param(consts::QUERY_PARAM_ID, query.first(consts::QUERY_PARAM_ID))?;
    let rename_info = utils::decode_json_or_default::<forms::owner::RenameOwnerForm>(&body);

    let owner = api::owner::rename_owner(owner_id, rename_info, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::InternalServerError(format!(
                "function rename_owner raised an error: {e}"
            ))
        })?
        .ok_or(errors::UserError::OwnerNotFound(owner_id))?;

    Ok(web::HttpResponse::Ok().json(&owner))
}

/// Deletes the owner given by `?id=` together with its pets. `DELETE /owners/delete`
pub async fn delete_owner(
    _: AllowedMethod<Delete>,
    query: web::types::Query<forms::query::QueryParams>,
    app_state: web::types::State<AppState>,
) -> Result<web::HttpResponse, web::Error> {
    let owner_id =
        utils::parse_id_param(consts::QUERY_PARAM_ID, query.first(consts::QUERY_PARAM_ID))?;

    api::owner::delete_owner(owner_id, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::InternalServerError(format!(
                "function delete_owner raised an error: {e}"
            ))
        })?
        .ok_or(errors::UserError::OwnerNotFound(owner_id))?;

    Ok(web::HttpResponse::Ok()
        .content_type(consts::PLAIN_TEXT_CONTENT_TYPE)
        .body(format!("Deleted {owner_id}")))
}
