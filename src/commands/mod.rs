pub mod interactive;
pub mod lookup;
pub mod serve;
