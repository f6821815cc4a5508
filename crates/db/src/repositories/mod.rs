mod movie_repo;
mod role_repo;

pub use movie_repo::MovieRepo;
pub use role_repo::RoleRepo;
