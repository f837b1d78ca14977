/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monetary amounts are fixed-point integers in centavos (1/100 of the
/// currency unit). All payroll arithmetic stays in this representation;
/// nothing in the workspace touches floating point for money.
pub type Money = i64;
