pub mod ports;
pub mod document_use_case;
pub mod summary_use_case;
pub mod transform_use_case;
