pub mod bundle_builder;
pub mod file_writer;
