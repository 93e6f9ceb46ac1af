pub mod payload_writer;
