pub mod service;

pub use service::ProviderCatalogService;
