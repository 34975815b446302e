pub mod email;
pub mod invoice;
pub mod outcome;
pub mod password;
pub mod user;
pub mod validation;
