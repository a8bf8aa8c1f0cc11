pub mod owner;
pub mod pet;
