//! # Luxe Security
//! 
//! Security utilities: password hashing, session tokens, bearer header parsing.

pub mod password;
pub mod token;
pub mod bearer;

pub use password::PasswordService;
pub use token::generate_session_token;
pub use bearer::bearer_token;
