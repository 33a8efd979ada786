pub mod errors;
pub mod db;
pub mod agent_template;
pub mod model_provider;

#[cfg(test)]
mod tests;
