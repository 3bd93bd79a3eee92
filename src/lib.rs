#![doc = "The `tarefa_api` library crate."]
#![doc = ""]
#![doc = "Users and tasks behind a three-layer pipeline: HTTP handlers (`routes`)"]
#![doc = "call use-cases (`usecase`), which call repositories (`repository`)."]
#![doc = "The binary (`main.rs`) wires a PostgreSQL pool into the repositories"]
#![doc = "and serves the routes."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod usecase;
