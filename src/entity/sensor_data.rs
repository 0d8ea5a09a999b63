use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::series::Reading;

/// One row of the hosted `sensor_data` table. The schema is managed by the
/// hosting platform; numeric columns are nullable and stay that way here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sensor_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub device_id: String,
    pub timestamp: DateTimeWithTimeZone,
    pub ph: Option<f64>,
    pub turbidity: Option<f64>,
    pub tds: Option<f64>,
    pub temperature: Option<f64>,
    pub dissolved_oxygen: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Reading {
    fn from(m: Model) -> Self {
        Self {
            timestamp: m.timestamp.with_timezone(&chrono::Utc),
            ph: m.ph,
            turbidity: m.turbidity,
            tds: m.tds,
            temperature: m.temperature,
            dissolved_oxygen: m.dissolved_oxygen,
        }
    }
}
