use std::time::Duration;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Individual, Region};

#[derive(Debug, Serialize, ToSchema)]
pub struct FinalistResponse {
    pub header: Header,
    pub data: FinalistData,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Header {
    pub total_data: TotalData,
    /// Seconds spent serving the request, floored to two decimals.
    pub process_time: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TotalData {
    pub individual: usize,
    pub region: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FinalistData {
    pub individual: Vec<Individual>,
    pub region: Vec<Region>,
}

impl FinalistResponse {
    pub fn new(individual: Vec<Individual>, region: Vec<Region>, elapsed: Duration) -> Self {
        Self {
            header: Header {
                total_data: TotalData {
                    individual: individual.len(),
                    region: region.len(),
                },
                process_time: floor_to_hundredths(elapsed),
            },
            data: FinalistData { individual, region },
        }
    }
}

/// Truncates, never rounds: 0.567s becomes 0.56.
pub fn floor_to_hundredths(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).floor() / 100.0
}
