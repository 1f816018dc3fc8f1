use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail: Option<String>,
    pub youtube: Option<String>,
    pub ingredients: Vec<Ingredient>,
}
