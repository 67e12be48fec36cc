pub mod agents;
pub mod api;
pub mod backend;
pub mod config;
pub mod corpus;
pub mod data_models;
pub mod dispatcher;
pub mod renderer;
pub mod tools;
