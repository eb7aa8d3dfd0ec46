use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherEntity {
    pub publisher_id: i64,
    pub name: String,
}

impl PublisherEntity {
    pub fn new(name: &str) -> Self {
        Self {
            publisher_id: 0, // assigned by the store on create
            name: name.to_string(),
        }
    }
}

impl Identifiable for PublisherEntity {
    fn id(&self) -> i64 {
        self.publisher_id
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::publishers::domain::model::PublisherEntity;

    #[tokio::test]
    async fn test_should_build_publisher() {
        let publisher = PublisherEntity::new("publisher one");
        assert_eq!("publisher one", publisher.name.as_str());
        assert_eq!(0, publisher.id());
    }
}
