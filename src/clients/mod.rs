pub mod mealdb;
pub mod open_meteo;
pub mod overpass;
pub mod world_bank;
