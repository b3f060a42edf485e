pub mod aggregate;
pub mod dto;
pub mod handler;
pub mod service;
