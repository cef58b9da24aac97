//! End-to-end tests for the `folio` binary

mod helpers;

mod catalog_test;
mod cli_test;
mod config_test;
mod exec_test;
