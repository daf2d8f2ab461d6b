pub mod core_config;
