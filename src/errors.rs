use validator::ValidationErrors;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Parse error: {}", _0)]
    Parse(String),
    #[fail(display = "Validation error: {}", _0)]
    Validate(ValidationErrors),
    #[fail(display = "Database error: {}", _0)]
    Database(String),
}
