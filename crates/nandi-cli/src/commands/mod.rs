pub mod ask;
pub mod chat;
pub mod config;
pub mod data;
pub mod farmers;
pub mod register;
pub mod trust;
