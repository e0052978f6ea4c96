// ============================================================================
// EMPLOYEE MANAGER - Cliente SPA (Yew + WASM)
// ============================================================================
// Capas:
// - services:   HTTP + interceptores + funciones de dominio
// - stores:     token persistido y sesión en memoria
// - viewmodels: lógica pura (sesión, paginación, formularios)
// - hooks:      contexto de sesión y carga de datos
// - components: vistas
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
