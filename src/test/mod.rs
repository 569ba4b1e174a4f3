mod calc;
mod config;
mod price_map;
mod scheduler;
