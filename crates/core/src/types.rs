/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar years (release years, the current year).
pub type Year = i32;
