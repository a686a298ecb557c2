pub mod summary_writer;
pub mod table_writer;

pub use summary_writer::SummaryWriter;
pub use table_writer::TableWriter;
