pub mod adapters;
pub mod app;
pub mod model;
pub mod params;
pub mod presenter;
pub mod reference;
pub mod resolver;
