pub mod pbkdf2;

pub use pbkdf2::PasswordHasher;
