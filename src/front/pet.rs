//! Pet endpoints, mounted under `/owners/pets`

use ntex::{util::Bytes, web};

use crate::{
    api, consts,
    front::{
        AppState, errors, forms,
        middleware::allowed_method::{AllowedMethod, Delete, Post},
        utils,
    },
    repo,
};

/// Adds a pet to the owner given by `?ownerId=`. `POST /owners/pets`
pub async fn create_pet(
    _: AllowedMethod<Post>,
    query: web::types::Query<forms::query::QueryParams>,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<web::HttpResponse, web::Error> {
    let owner_id = utils::parse_id_param(
        consts::QUERY_PARAM_OWNER_ID,
        query.first(consts::QUERY_PARAM_OWNER_ID),
    )?;
    let pet_info = utils::decode_json_or_default::<forms::pet::PetForm>(&body);

    let pet = api::pet::add_pet_to_owner(owner_id, pet_info, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::InternalServerError(format!(
                "function add_pet_to_owner raised an error: {e}"
            ))
        })?
        .ok_or(errors::UserError::OwnerNotFound(owner_id))?;

    Ok(web::HttpResponse::Created().json(&pet))
}

/// Removes `?petId=` from the pets of `?ownerId=`. `DELETE /owners/pets/delete`
pub async fn delete_pet(
    _: AllowedMethod<Delete>,
    query: web::types::Query<forms::query::QueryParams>,
    app_state: web::types::State<AppState>,
) -> Result<web::HttpResponse, web::Error> {
    let owner_id = utils::parse_id_param(
        consts::QUERY_PARAM_OWNER_ID,
        query.first(consts::QUERY_PARAM_OWNER_ID),
    )?;
    let pet_id =
        utils::parse_id_param(consts::QUERY_PARAM_PET_ID, query.first(consts::QUERY_PARAM_PET_ID))?;

    let removal = api::pet::remove_pet_from_owner(owner_id, pet_id, &app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::InternalServerError(format!(
                "function remove_pet_from_owner raised an error: {e}"
            ))
        })?;

    match removal {
        repo::PetRemoval::Removed(_) => Ok(web::HttpResponse::Ok()
            .content_type(consts::PLAIN_TEXT_CONTENT_TYPE)
            .body(consts::PET_DELETED_MSG)),
        repo::PetRemoval::OwnerNotFound => Err(errors::UserError::OwnerNotFound(owner_id).into()),
        repo::PetRemoval::PetNotFound => {
            Err(errors::UserError::PetNotFound { owner_id, pet_id }.into())
        }
    }
}
