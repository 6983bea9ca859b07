/*
 * Responsibility
 * - crate のモジュール構成 (bin と integration test から使う)
 */
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
pub mod web;
