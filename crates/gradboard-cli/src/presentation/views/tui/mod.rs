mod school_table;

pub use school_table::{PageButton, column_cells, pagination_line, school_table};
