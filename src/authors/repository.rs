pub mod memory_author_repository;

use crate::authors::domain::model::AuthorEntity;
use crate::core::repository::Repository;

pub trait AuthorRepository: Repository<AuthorEntity> {}
