pub mod origin_filter;
