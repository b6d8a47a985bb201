//! Integration tests for the asset browser

mod cli_contracts;
mod local_scan;
mod scan_properties;
