pub mod memory_publisher_repository;

use crate::core::repository::Repository;
use crate::publishers::domain::model::PublisherEntity;

pub trait PublisherRepository: Repository<PublisherEntity> {}
