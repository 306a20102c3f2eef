//! Domain layer: billing models, pure calculation services, and the
//! repository contracts the stores implement.

pub mod model;
pub mod repository;
pub mod service;
