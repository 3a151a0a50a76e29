pub mod batch;
pub mod cleaning_log;
pub mod options;
pub mod order;
pub mod stock_item;
