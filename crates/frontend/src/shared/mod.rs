pub mod components;
pub mod config;
pub mod date_utils;
pub mod dom_id;
pub mod icons;
