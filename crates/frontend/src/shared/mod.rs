pub mod api_utils;
pub mod config;
pub mod error;
pub mod html;
pub mod icons;
