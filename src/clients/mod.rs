pub mod catalog_client;
