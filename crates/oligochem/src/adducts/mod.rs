pub mod adduct;
pub mod adduct_database;
