use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("Column {column} is out of range, columns are numbered 0 to 6")]
    ColumnOutOfRange { column: usize },
    #[error("Cannot drop a piece into column {column}, it is already full")]
    ColumnFull { column: usize },
    #[error("Cannot undo a move in column {column}, it has no pieces")]
    ColumnEmpty { column: usize },
}
