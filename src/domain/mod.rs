// Domain layer - Job specification model and its validation rules

pub mod errors;
pub mod model;
pub mod rules;
