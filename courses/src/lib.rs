pub mod application;
pub mod config;
pub mod domain;
pub mod http;
pub mod postgres;
pub mod repository;
pub mod telemetry;
