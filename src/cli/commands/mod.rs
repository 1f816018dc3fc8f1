mod education;
mod population;
mod recipe;
mod water;
mod weather;

pub use education::cmd_education;
pub use population::cmd_population;
pub use recipe::cmd_recipe;
pub use water::cmd_water;
pub use weather::cmd_weather;
