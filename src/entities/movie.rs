use marquee_record::Movie;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "final_dataset")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: Option<String>,
    pub year: Option<i32>,
    pub duration: Option<String>,
    #[sea_orm(column_name = "MPA")]
    pub mpa: Option<String>,
    pub rating: Option<f64>,
    pub votes: Option<String>,
    pub meta_score: Option<f64>,
    pub description: Option<String>,
    pub movie_link: Option<String>,
    pub writers: Option<String>,
    pub directors: Option<String>,
    pub stars: Option<String>,
    pub budget: Option<String>,
    pub opening_weekend_gross: Option<String>,
    pub gross_worldwide: Option<String>,
    pub gross_us_canada: Option<String>,
    pub release_date: Option<f64>,
    pub countries_origin: Option<String>,
    pub filming_locations: Option<String>,
    pub production_companies: Option<String>,
    pub awards_content: Option<String>,
    pub genres: Option<String>,
    pub languages: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Movie {
    fn from(m: Model) -> Self {
        Movie {
            id: m.id,
            title: m.title,
            year: m.year,
            duration: m.duration,
            mpa: m.mpa,
            rating: m.rating,
            votes: m.votes,
            meta_score: m.meta_score,
            description: m.description,
            movie_link: m.movie_link,
            writers: m.writers,
            directors: m.directors,
            stars: m.stars,
            budget: m.budget,
            opening_weekend_gross: m.opening_weekend_gross,
            gross_worldwide: m.gross_worldwide,
            gross_us_canada: m.gross_us_canada,
            release_date: m.release_date,
            countries_origin: m.countries_origin,
            filming_locations: m.filming_locations,
            production_companies: m.production_companies,
            awards_content: m.awards_content,
            genres: m.genres,
            languages: m.languages,
        }
    }
}
