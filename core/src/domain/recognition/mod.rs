pub mod aggregator;
pub mod calories;
pub mod entities;
pub mod fallback;
pub mod health_score;
pub mod nutrition_table;
pub mod pipeline;
pub mod portion;
pub mod ports;
pub mod services;
pub mod value_objects;
pub mod vocabulary;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
