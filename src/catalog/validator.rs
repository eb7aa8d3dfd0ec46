use crate::books::dto::SaveBookDto;
use crate::core::library::FieldViolation;

// Field checks on a book write request. Every check runs so the caller sees
// all problems in one response; the publisher-existence check needs a store
// lookup and is folded in by the catalog service.
pub fn validate_save_book(book: &SaveBookDto) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    if book.description.is_empty() {
        violations.push(FieldViolation::new(
            "description", "description cannot be empty"));
    }
    if let Some(rate) = book.rate {
        if !(0.0..=5.0).contains(&rate) {
            violations.push(FieldViolation::new(
                "rate", "rate cannot be less than 0 and more than 5"));
        }
    }
    violations
}
