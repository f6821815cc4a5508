pub mod movie;
pub mod role;
