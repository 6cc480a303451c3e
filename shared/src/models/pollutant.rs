//! Pollutant reading models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Pollutants measured at a monitoring station, in model training order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    Pm25,
    Pm10,
    No,
    No2,
    Nox,
    Nh3,
    Co,
    So2,
    O3,
    Benzene,
    Toluene,
}

impl Pollutant {
    /// All pollutants, in the order the model expects them
    pub const ALL: [Pollutant; 11] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No,
        Pollutant::No2,
        Pollutant::Nox,
        Pollutant::Nh3,
        Pollutant::Co,
        Pollutant::So2,
        Pollutant::O3,
        Pollutant::Benzene,
        Pollutant::Toluene,
    ];

    /// Column name used by the trained model
    pub fn feature_name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No => "NO",
            Pollutant::No2 => "NO2",
            Pollutant::Nox => "NOx",
            Pollutant::Nh3 => "NH3",
            Pollutant::Co => "CO",
            Pollutant::So2 => "SO2",
            Pollutant::O3 => "O3",
            Pollutant::Benzene => "Benzene",
            Pollutant::Toluene => "Toluene",
        }
    }

    /// Field key in live station records
    pub fn record_key(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm2_5",
            Pollutant::Pm10 => "pm10",
            Pollutant::No => "no",
            Pollutant::No2 => "no2",
            Pollutant::Nox => "nox",
            Pollutant::Nh3 => "nh3",
            Pollutant::Co => "co",
            Pollutant::So2 => "so2",
            Pollutant::O3 => "o3",
            Pollutant::Benzene => "benzene",
            Pollutant::Toluene => "toluene",
        }
    }
}

impl std::fmt::Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.feature_name())
    }
}

/// Today's pollutant concentrations for one location
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Validate)]
pub struct PollutantReadings {
    #[serde(alias = "PM2.5")]
    #[validate(range(min = 0.0))]
    pub pm2_5: f64,
    #[serde(alias = "PM10")]
    #[validate(range(min = 0.0))]
    pub pm10: f64,
    #[serde(alias = "NO")]
    #[validate(range(min = 0.0))]
    pub no: f64,
    #[serde(alias = "NO2")]
    #[validate(range(min = 0.0))]
    pub no2: f64,
    #[serde(alias = "NOx")]
    #[validate(range(min = 0.0))]
    pub nox: f64,
    #[serde(alias = "NH3")]
    #[validate(range(min = 0.0))]
    pub nh3: f64,
    #[serde(alias = "CO")]
    #[validate(range(min = 0.0))]
    pub co: f64,
    #[serde(alias = "SO2")]
    #[validate(range(min = 0.0))]
    pub so2: f64,
    #[serde(alias = "O3")]
    #[validate(range(min = 0.0))]
    pub o3: f64,
    #[serde(alias = "Benzene")]
    #[validate(range(min = 0.0))]
    pub benzene: f64,
    #[serde(alias = "Toluene")]
    #[validate(range(min = 0.0))]
    pub toluene: f64,
}

impl PollutantReadings {
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No => self.no,
            Pollutant::No2 => self.no2,
            Pollutant::Nox => self.nox,
            Pollutant::Nh3 => self.nh3,
            Pollutant::Co => self.co,
            Pollutant::So2 => self.so2,
            Pollutant::O3 => self.o3,
            Pollutant::Benzene => self.benzene,
            Pollutant::Toluene => self.toluene,
        }
    }

    pub fn set(&mut self, pollutant: Pollutant, value: f64) {
        let slot = match pollutant {
            Pollutant::Pm25 => &mut self.pm2_5,
            Pollutant::Pm10 => &mut self.pm10,
            Pollutant::No => &mut self.no,
            Pollutant::No2 => &mut self.no2,
            Pollutant::Nox => &mut self.nox,
            Pollutant::Nh3 => &mut self.nh3,
            Pollutant::Co => &mut self.co,
            Pollutant::So2 => &mut self.so2,
            Pollutant::O3 => &mut self.o3,
            Pollutant::Benzene => &mut self.benzene,
            Pollutant::Toluene => &mut self.toluene,
        };
        *slot = value;
    }

    /// Iterate readings in model order
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.iter().map(move |p| (*p, self.get(*p)))
    }
}

/// Dashboard input defaults
impl Default for PollutantReadings {
    fn default() -> Self {
        Self {
            pm2_5: 100.0,
            pm10: 200.0,
            no: 30.0,
            no2: 40.0,
            nox: 60.0,
            nh3: 20.0,
            co: 1.0,
            so2: 15.0,
            o3: 80.0,
            benzene: 5.0,
            toluene: 10.0,
        }
    }
}
