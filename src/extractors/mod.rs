pub mod catalog_extractor;
