pub mod yaml;

pub use yaml::render_pool_manifest;
