//! Business parameters, validation and scenario loading

mod data;
mod validate;
pub mod loader;

pub use data::{
    BusinessModel, BusinessParameters, NamedParameters, DEFAULT_CONFIRMATION_COST_PER_CALL,
    DEFAULT_CONFIRMATION_RATE_PCT, DEFAULT_DELIVERY_SUCCESS_RATE_PCT,
    DEFAULT_SHIPPING_COST_PER_ORDER,
};
pub use loader::{load_parameters, load_parameters_from_reader, load_parameters_json};
