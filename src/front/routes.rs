//! Route table.
//!
//! Every endpoint lives at a fixed path and is registered for all methods;
//! the handler's [AllowedMethod](super::middleware::allowed_method::AllowedMethod)
//! argument answers `405` to the wrong verb. Identifiers travel in the query
//! string, never in the path.

use super::{owner, pet};
use ntex::web;

/// Configures owner routes.
///
/// # Routes
/// - `POST /owners` - Create an owner
/// - `GET /owners/all` - List owners with their pets
/// - `PUT /owners/update?id=` - Rename an owner
/// - `DELETE /owners/delete?id=` - Delete an owner and its pets
pub fn owners(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/owners").to(owner::create_owner))
        .service(web::resource("/owners/all").to(owner::list_owners))
        .service(web::resource("/owners/update").to(owner::update_owner))
        .service(web::resource("/owners/delete").to(owner::delete_owner));
}

/// Configures pet routes.
///
/// # Routes
/// - `POST /owners/pets?ownerId=` - Add a pet to an owner
/// - `DELETE /owners/pets/delete?ownerId=&petId=` - Remove a pet from an owner
pub fn pets(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/owners/pets").to(pet::create_pet))
        .service(web::resource("/owners/pets/delete").to(pet::delete_pet));
}
