pub mod composition;
pub mod monomer_database;
pub mod sequence;
