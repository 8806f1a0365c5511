pub mod payment_reader;
pub mod result_writer;
