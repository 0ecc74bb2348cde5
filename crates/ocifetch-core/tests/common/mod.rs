pub mod fake_registry;
