pub mod errors;
pub mod forms;
pub mod middleware;
pub mod owner;
pub mod pet;
pub mod routes;
pub mod server;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

use crate::repo;

pub struct AppState {
    pub repo: repo::ImplAppRepo,
}
