pub mod claims;
pub mod jwt;
pub mod password;
pub mod session;
