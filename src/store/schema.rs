use super::IRIS;
use crate::sample::Sample;
use tokio_postgres::types::Type;

/// Schema metadata for PostgreSQL tables.
///
/// All methods return `&'static str` built at compile time with
/// [`const_format::concatcp!`]; no I/O happens here.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns the `COPY ... FROM STDIN BINARY` command for bulk loading.
    fn copy() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
    /// Returns PostgreSQL column types for binary COPY protocol, in `copy()` order.
    fn columns() -> &'static [Type];
}

impl Schema for Sample {
    fn name() -> &'static str {
        IRIS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            IRIS,
            " (
                id           BIGSERIAL PRIMARY KEY,
                sepal_length DOUBLE PRECISION NOT NULL,
                sepal_width  DOUBLE PRECISION NOT NULL,
                petal_length DOUBLE PRECISION NOT NULL,
                petal_width  DOUBLE PRECISION NOT NULL,
                target       INTEGER          NOT NULL
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_",
            IRIS,
            "_target ON ",
            IRIS,
            " (target);"
        )
    }
    fn copy() -> &'static str {
        const_format::concatcp!(
            "COPY ",
            IRIS,
            " (sepal_length, sepal_width, petal_length, petal_width, target) FROM STDIN BINARY"
        )
    }
    fn columns() -> &'static [Type] {
        &[
            Type::FLOAT8,
            Type::FLOAT8,
            Type::FLOAT8,
            Type::FLOAT8,
            Type::INT4,
        ]
    }
}
