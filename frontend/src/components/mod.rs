pub mod data_form;
pub mod raw_payload;
pub mod records_table;
