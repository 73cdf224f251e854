pub mod result_view;
pub mod scan_handler;

pub use scan_handler::ScanHandler;
