/// Authentication utilities
///
/// - `password`: Argon2id hashing and verification
/// - `reset_token`: opaque password-reset token generation

pub mod password;
pub mod reset_token;
