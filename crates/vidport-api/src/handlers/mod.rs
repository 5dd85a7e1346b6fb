//! HTTP request handlers

pub mod health;
pub mod media_create;
pub mod media_delete;
pub mod media_get;
pub mod media_list;
pub mod media_update;
