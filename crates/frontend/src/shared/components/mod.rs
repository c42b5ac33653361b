pub mod filter_panel;
pub mod multi_select_filter;
pub mod page_header;
