mod field;
mod parser;
