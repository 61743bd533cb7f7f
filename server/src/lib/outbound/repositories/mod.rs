pub mod memory;
pub mod project;
pub mod team;
pub mod user;

pub use memory::InMemoryProjectRepository;
pub use memory::InMemoryTeamRepository;
pub use memory::InMemoryUserRepository;
pub use project::PostgresProjectRepository;
pub use team::PostgresTeamRepository;
pub use user::PostgresUserRepository;
