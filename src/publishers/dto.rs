use serde::{Deserialize, Serialize};
use crate::publishers::domain::model::PublisherEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherDto {
    // ignored on add; the store assigns it
    #[serde(default)]
    pub publisher_id: i64,
    pub name: String,
}

impl PublisherDto {
    pub fn new(name: &str) -> Self {
        Self {
            publisher_id: 0,
            name: name.to_string(),
        }
    }
}

impl From<&PublisherEntity> for PublisherDto {
    fn from(other: &PublisherEntity) -> Self {
        Self {
            publisher_id: other.publisher_id,
            name: other.name.to_string(),
        }
    }
}

impl From<&PublisherDto> for PublisherEntity {
    fn from(other: &PublisherDto) -> Self {
        Self {
            publisher_id: other.publisher_id,
            name: other.name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::publishers::domain::model::PublisherEntity;
    use crate::publishers::dto::PublisherDto;

    #[tokio::test]
    async fn test_should_map_between_dto_and_entity() {
        let entity = PublisherEntity { publisher_id: 4, name: "publisher one".to_string() };
        let dto = PublisherDto::from(&entity);
        assert_eq!(4, dto.publisher_id);
        assert_eq!(entity, PublisherEntity::from(&dto));
    }
}
