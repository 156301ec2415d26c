pub mod saved_searches;
