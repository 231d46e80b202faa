mod todo_mirror_repo;

pub use todo_mirror_repo::*;
