pub mod dto;
pub mod entity;
pub mod handler;
pub mod operational;
pub mod service;
