pub mod auth;
pub mod code;
pub mod cookie;
pub mod error;
pub mod jwt;
pub mod logging;
pub mod qr;
pub mod response;

pub use response::BaseResponse;
pub use response::ErrorResponse;
