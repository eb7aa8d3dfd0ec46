use async_trait::async_trait;
use crate::authors::dto::AuthorDto;
use crate::authors::repository::AuthorRepository;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDetailsDto, SaveBookDto};
use crate::books::repository::{BookAuthorRepository, BookRepository};
use crate::catalog::domain::CatalogService;
use crate::catalog::validator::validate_save_book;
use crate::core::domain::Configuration;
use crate::core::library::{CatalogError, CatalogResult, FieldViolation};
use crate::publishers::dto::PublisherDto;
use crate::publishers::repository::PublisherRepository;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    book_author_repository: Box<dyn BookAuthorRepository>,
    author_repository: Box<dyn AuthorRepository>,
    publisher_repository: Box<dyn PublisherRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration,
               book_repository: Box<dyn BookRepository>,
               book_author_repository: Box<dyn BookAuthorRepository>,
               author_repository: Box<dyn AuthorRepository>,
               publisher_repository: Box<dyn PublisherRepository>) -> Self {
        Self {
            book_repository,
            book_author_repository,
            author_repository,
            publisher_repository,
        }
    }

    // publisher-existence needs a store lookup, so it runs here and lands in
    // the same violation collection as the pure field checks
    async fn check_save_book(&self, book: &SaveBookDto) -> CatalogResult<Vec<FieldViolation>> {
        let mut violations = Vec::new();
        match self.publisher_repository.get(book.publisher_id).await {
            Ok(_) => {}
            Err(CatalogError::NotFound { .. }) => {
                violations.push(FieldViolation::new("publisher_id", "Publisher does not exist"));
            }
            Err(err) => return Err(err),
        }
        violations.extend(validate_save_book(book));
        Ok(violations)
    }

    async fn project_book(&self, book: &BookEntity) -> CatalogResult<BookDetailsDto> {
        let publisher = self.publisher_repository.get(book.publisher_id).await?;
        let edges = self.book_author_repository.find_by_book_id(book.book_id).await?;
        let mut author_names = Vec::with_capacity(edges.len());
        for edge in &edges {
            match self.author_repository.get(edge.author_id).await {
                Ok(author) => author_names.push(author.full_name),
                // author ids are not validated on write, so an edge may
                // point at an author that was never created
                Err(CatalogError::NotFound { .. }) => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(BookDetailsDto::project(book, publisher.name.as_str(), author_names))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> CatalogResult<Vec<BookDetailsDto>> {
        let books = self.book_repository.find_all().await?;
        let mut details = Vec::with_capacity(books.len());
        for book in &books {
            details.push(self.project_book(book).await?);
        }
        Ok(details)
    }

    async fn find_book_by_id(&self, id: i64) -> CatalogResult<BookDetailsDto> {
        let book = self.book_repository.get(id).await?;
        self.project_book(&book).await
    }

    async fn add_book(&self, book: &SaveBookDto) -> CatalogResult<BookDetailsDto> {
        let violations = self.check_save_book(book).await?;
        if !violations.is_empty() {
            return Err(CatalogError::validation("invalid book payload", violations));
        }
        let created = self.book_repository.create(&book.build_book(0)).await?;
        let _ = self.book_author_repository
            .replace_for_book(created.book_id, &book.author_ids).await?;
        tracing::info!(book_id = created.book_id, "added book");
        self.project_book(&created).await
    }

    async fn update_book(&self, id: i64, book: &SaveBookDto) -> CatalogResult<SaveBookDto> {
        let violations = self.check_save_book(book).await?;
        if !violations.is_empty() {
            return Err(CatalogError::validation("invalid book payload", violations));
        }
        // NotFound before any mutation: scalars and edges change together or
        // not at all for a missing id
        let _ = self.book_repository.get(id).await?;
        let _ = self.book_repository.update(&book.build_book(id)).await?;
        let _ = self.book_author_repository.replace_for_book(id, &book.author_ids).await?;
        tracing::info!(book_id = id, "updated book");
        Ok(book.clone())
    }

    async fn remove_book(&self, id: i64) -> CatalogResult<()> {
        let removed = self.book_repository.delete(id).await?;
        if removed == 0 {
            tracing::debug!(book_id = id, "remove skipped, book already absent");
        }
        // edges would otherwise be orphaned for good
        let _ = self.book_author_repository.delete_by_book_id(id).await?;
        tracing::info!(book_id = id, "removed book");
        Ok(())
    }

    async fn add_author(&self, author: &AuthorDto) -> CatalogResult<AuthorDto> {
        let created = self.author_repository.create(&author.into()).await?;
        Ok(AuthorDto::from(&created))
    }

    async fn find_author_by_id(&self, id: i64) -> CatalogResult<AuthorDto> {
        self.author_repository.get(id).await.map(|a| AuthorDto::from(&a))
    }

    async fn list_authors(&self) -> CatalogResult<Vec<AuthorDto>> {
        let authors = self.author_repository.find_all().await?;
        Ok(authors.iter().map(AuthorDto::from).collect())
    }

    async fn add_publisher(&self, publisher: &PublisherDto) -> CatalogResult<PublisherDto> {
        let created = self.publisher_repository.create(&publisher.into()).await?;
        Ok(PublisherDto::from(&created))
    }

    async fn find_publisher_by_id(&self, id: i64) -> CatalogResult<PublisherDto> {
        self.publisher_repository.get(id).await.map(|p| PublisherDto::from(&p))
    }

    async fn list_publishers(&self) -> CatalogResult<Vec<PublisherDto>> {
        let publishers = self.publisher_repository.find_all().await?;
        Ok(publishers.iter().map(PublisherDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use crate::authors::dto::AuthorDto;
    use crate::authors::repository::memory_author_repository::MemoryAuthorRepository;
    use crate::books::dto::SaveBookDto;
    use crate::books::repository::BookAuthorRepository;
    use crate::books::repository::memory_book_repository::{MemoryBookAuthorRepository, MemoryBookRepository};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::library::CatalogError;
    use crate::core::repository::Repository;
    use crate::publishers::dto::PublisherDto;
    use crate::publishers::repository::memory_publisher_repository::MemoryPublisherRepository;

    struct Fixture {
        svc: CatalogServiceImpl,
        books: MemoryBookRepository,
        edges: MemoryBookAuthorRepository,
    }

    fn fixture() -> Fixture {
        let books = MemoryBookRepository::new();
        let edges = MemoryBookAuthorRepository::new();
        let authors = MemoryAuthorRepository::new();
        let publishers = MemoryPublisherRepository::new();
        let svc = CatalogServiceImpl::new(
            &Configuration::new("test"),
            Box::new(books.clone()),
            Box::new(edges.clone()),
            Box::new(authors.clone()),
            Box::new(publishers.clone()));
        Fixture { svc, books, edges }
    }

    fn date(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn save_book_dto(publisher_id: i64, author_ids: Vec<i64>) -> SaveBookDto {
        SaveBookDto {
            title: "title".to_string(),
            description: "description".to_string(),
            genre: "genre".to_string(),
            cover_url: "http://covers/1.png".to_string(),
            date_added: date("2024-05-01T00:00:00"),
            is_read: false,
            date_read: None,
            rate: None,
            publisher_id,
            author_ids,
        }
    }

    async fn seed_catalog(svc: &CatalogServiceImpl) -> (i64, Vec<i64>) {
        let publisher = svc.add_publisher(&PublisherDto::new("publisher one"))
            .await.expect("should add publisher");
        let mut author_ids = Vec::new();
        for name in ["author one", "author two", "author three"] {
            let author = svc.add_author(&AuthorDto::new(name)).await.expect("should add author");
            author_ids.push(author.author_id);
        }
        (publisher.publisher_id, author_ids)
    }

    #[tokio::test]
    async fn test_should_add_book_and_project_authors_in_order() {
        let fx = fixture();
        let (publisher_id, author_ids) = seed_catalog(&fx.svc).await;

        let dto = save_book_dto(publisher_id, vec![author_ids[1], author_ids[0]]);
        let details = fx.svc.add_book(&dto).await.expect("should add book");
        assert_eq!("publisher one", details.publisher_name.as_str());
        assert_eq!(vec!["author two".to_string(), "author one".to_string()], details.author_names);
    }

    #[tokio::test]
    async fn test_should_round_trip_book_through_get() {
        let fx = fixture();
        let (publisher_id, author_ids) = seed_catalog(&fx.svc).await;

        let mut dto = save_book_dto(publisher_id, vec![author_ids[0]]);
        dto.is_read = true;
        dto.date_read = Some(date("2024-06-01T00:00:00"));
        dto.rate = Some(4.0);
        let created = fx.svc.add_book(&dto).await.expect("should add book");
        let loaded = fx.svc.find_book_by_id(created.id).await.expect("should load book");
        assert_eq!(dto.title, loaded.title);
        assert_eq!(dto.description, loaded.description);
        assert_eq!(dto.genre, loaded.genre);
        assert_eq!(dto.cover_url, loaded.cover_url);
        assert_eq!(dto.date_read, loaded.date_read);
        assert_eq!(dto.rate, loaded.rate);
        assert_eq!(vec!["author one".to_string()], loaded.author_names);
    }

    #[tokio::test]
    async fn test_should_reject_unknown_publisher_without_mutation() {
        let fx = fixture();
        let (_, author_ids) = seed_catalog(&fx.svc).await;

        let dto = save_book_dto(999, vec![author_ids[0]]);
        let res = fx.svc.add_book(&dto).await;
        if let Err(CatalogError::Validation { violations, .. }) = res {
            assert_eq!(1, violations.len());
            assert_eq!("publisher_id", violations[0].field.as_str());
            assert_eq!("Publisher does not exist", violations[0].message.as_str());
        } else {
            panic!("expected validation error");
        }
        assert!(fx.books.find_all().await.expect("should list books").is_empty());
        assert!(fx.edges.find_by_book_id(1).await.expect("should list edges").is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_empty_description_without_mutation() {
        let fx = fixture();
        let (publisher_id, author_ids) = seed_catalog(&fx.svc).await;

        let mut dto = save_book_dto(publisher_id, vec![author_ids[0]]);
        dto.description = "".to_string();
        let res = fx.svc.add_book(&dto).await;
        if let Err(CatalogError::Validation { violations, .. }) = res {
            assert_eq!(1, violations.len());
            assert_eq!("description", violations[0].field.as_str());
        } else {
            panic!("expected validation error");
        }
        assert!(fx.books.find_all().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_collect_publisher_and_field_violations_together() {
        let fx = fixture();
        let _ = seed_catalog(&fx.svc).await;

        let mut dto = save_book_dto(999, vec![]);
        dto.description = "".to_string();
        dto.rate = Some(5.01);
        let res = fx.svc.add_book(&dto).await;
        if let Err(CatalogError::Validation { violations, .. }) = res {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(vec!["publisher_id", "description", "rate"], fields);
        } else {
            panic!("expected validation error");
        }
    }

    #[tokio::test]
    async fn test_should_replace_all_author_edges_on_update() {
        let fx = fixture();
        let (publisher_id, author_ids) = seed_catalog(&fx.svc).await;

        let created = fx.svc.add_book(&save_book_dto(publisher_id, vec![author_ids[0], author_ids[1]]))
            .await.expect("should add book");
        let update = save_book_dto(publisher_id, vec![author_ids[2]]);
        let echoed = fx.svc.update_book(created.id, &update).await.expect("should update book");
        assert_eq!(update, echoed);

        let edges = fx.edges.find_by_book_id(created.id).await.expect("should list edges");
        assert_eq!(vec![author_ids[2]], edges.iter().map(|e| e.author_id).collect::<Vec<_>>());
        let loaded = fx.svc.find_book_by_id(created.id).await.expect("should load book");
        assert_eq!(vec!["author three".to_string()], loaded.author_names);
    }

    #[tokio::test]
    async fn test_should_update_scalar_fields() {
        let fx = fixture();
        let (publisher_id, author_ids) = seed_catalog(&fx.svc).await;

        let created = fx.svc.add_book(&save_book_dto(publisher_id, vec![author_ids[0]]))
            .await.expect("should add book");
        let mut update = save_book_dto(publisher_id, vec![author_ids[0]]);
        update.title = "new title".to_string();
        update.genre = "new genre".to_string();
        let _ = fx.svc.update_book(created.id, &update).await.expect("should update book");

        let loaded = fx.svc.find_book_by_id(created.id).await.expect("should load book");
        assert_eq!("new title", loaded.title.as_str());
        assert_eq!("new genre", loaded.genre.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_update_for_unknown_book() {
        let fx = fixture();
        let (publisher_id, author_ids) = seed_catalog(&fx.svc).await;

        let res = fx.svc.update_book(999, &save_book_dto(publisher_id, vec![author_ids[0]])).await;
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));
        // a missing book must not grow an edge set either
        assert!(fx.edges.find_by_book_id(999).await.expect("should list edges").is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_get_for_unknown_book() {
        let fx = fixture();
        let _ = seed_catalog(&fx.svc).await;
        assert!(matches!(fx.svc.find_book_by_id(999).await, Err(CatalogError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_remove_book_and_cascade_edges() {
        let fx = fixture();
        let (publisher_id, author_ids) = seed_catalog(&fx.svc).await;

        let created = fx.svc.add_book(&save_book_dto(publisher_id, vec![author_ids[0], author_ids[1]]))
            .await.expect("should add book");
        let _ = fx.svc.remove_book(created.id).await.expect("should remove book");

        assert!(matches!(fx.svc.find_book_by_id(created.id).await, Err(CatalogError::NotFound { message: _ })));
        assert!(fx.edges.find_by_book_id(created.id).await.expect("should list edges").is_empty());
    }

    #[tokio::test]
    async fn test_should_remove_book_twice_without_fault() {
        let fx = fixture();
        let (publisher_id, author_ids) = seed_catalog(&fx.svc).await;

        let created = fx.svc.add_book(&save_book_dto(publisher_id, vec![author_ids[0]]))
            .await.expect("should add book");
        let _ = fx.svc.remove_book(created.id).await.expect("should remove book");
        let _ = fx.svc.remove_book(created.id).await.expect("should remove book again");
    }

    #[tokio::test]
    async fn test_should_list_books_in_store_order() {
        let fx = fixture();
        let (publisher_id, author_ids) = seed_catalog(&fx.svc).await;

        let mut first = save_book_dto(publisher_id, vec![author_ids[0]]);
        first.title = "first".to_string();
        let mut second = save_book_dto(publisher_id, vec![author_ids[1]]);
        second.title = "second".to_string();
        let _ = fx.svc.add_book(&first).await.expect("should add book");
        let _ = fx.svc.add_book(&second).await.expect("should add book");

        let all = fx.svc.list_books().await.expect("should list books");
        assert_eq!(vec!["first".to_string(), "second".to_string()],
                   all.iter().map(|b| b.title.to_string()).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_should_skip_unresolvable_author_edges() {
        let fx = fixture();
        let (publisher_id, author_ids) = seed_catalog(&fx.svc).await;

        // author ids are not validated, so an edge may reference a missing author
        let created = fx.svc.add_book(&save_book_dto(publisher_id, vec![author_ids[0], 999]))
            .await.expect("should add book");
        let loaded = fx.svc.find_book_by_id(created.id).await.expect("should load book");
        assert_eq!(vec!["author one".to_string()], loaded.author_names);
    }

    #[tokio::test]
    async fn test_should_manage_authors_and_publishers() {
        let fx = fixture();
        let author = fx.svc.add_author(&AuthorDto::new("author one")).await.expect("should add author");
        let publisher = fx.svc.add_publisher(&PublisherDto::new("publisher one")).await.expect("should add publisher");

        let loaded_author = fx.svc.find_author_by_id(author.author_id).await.expect("should load author");
        assert_eq!("author one", loaded_author.full_name.as_str());
        let loaded_publisher = fx.svc.find_publisher_by_id(publisher.publisher_id).await.expect("should load publisher");
        assert_eq!("publisher one", loaded_publisher.name.as_str());

        assert_eq!(1, fx.svc.list_authors().await.expect("should list authors").len());
        assert_eq!(1, fx.svc.list_publishers().await.expect("should list publishers").len());
    }
}
