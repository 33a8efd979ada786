pub mod service;

pub use service::TemplateLookupService;
