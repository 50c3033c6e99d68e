pub mod month;
pub mod sale_record;

pub use month::Month;
pub use sale_record::SaleRecord;
