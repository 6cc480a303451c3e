//! Forecasting core tests
//!
//! Covers the feature assembly contract, append-only history growth,
//! horizon isolation and determinism.

use proptest::prelude::*;
use shared::{
    assemble_features, AqiHistory, FeatureSchema, FeatureVector, ForecastResult, Forecaster,
    LinearModel, Pollutant, PollutantReadings, Regressor, FEATURE_NAMES,
};

/// Model shaped like a trained AQI regressor: mostly persistence with a
/// pollutant contribution
fn persistence_model() -> LinearModel {
    let mut coefficients = vec![0.0; 13];
    coefficients[0] = 0.3; // PM2.5
    coefficients[1] = 0.1; // PM10
    coefficients[11] = 0.5; // AQI_lag1
    coefficients[12] = 0.3; // AQI_roll3
    LinearModel::new(
        FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
        coefficients,
        5.0,
    )
    .unwrap()
}

fn forecaster() -> Forecaster<LinearModel> {
    let model = persistence_model();
    let schema = model.schema();
    Forecaster::new(model, schema)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_concrete_scenario_features() {
        let p = PollutantReadings {
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
        };
        let h = AqiHistory::new(vec![150.0, 150.0, 150.0]).unwrap();

        let features = assemble_features(&p, &h);

        assert_eq!(features.lag1(), Some(150.0));
        assert_eq!(features.roll3(), Some(150.0));
        for (i, pollutant) in Pollutant::ALL.iter().enumerate() {
            assert_eq!(features.names()[i], pollutant.feature_name());
            assert_eq!(features.values()[i], p.get(*pollutant));
        }
        assert!(FeatureSchema::default().validate(&features).is_ok());
    }

    #[test]
    fn test_next_day_then_five_day_flow() {
        let f = forecaster();
        let readings = PollutantReadings::default();
        let mut session = AqiHistory::seeded();

        // 5 + 0.3*100 + 0.1*200 + 0.5*150 + 0.3*150
        let tomorrow = f.predict_next(&readings, &mut session).unwrap();
        assert!((tomorrow - 175.0).abs() < 1e-9);
        assert_eq!(session.len(), 4);

        let horizon = f.forecast_horizon(&readings, &session, 5).unwrap();
        assert_eq!(horizon.len(), 5);
        assert_eq!(session.len(), 4, "horizon must not grow the session history");

        // Day one of the horizon is what predict_next would have produced
        let mut probe = session.clone();
        let next = f.predict_next(&readings, &mut probe).unwrap();
        assert_eq!(horizon[0], next);
    }

    #[test]
    fn test_steps_zero_returns_empty() {
        let f = forecaster();
        let history = AqiHistory::seeded();
        let out = f
            .forecast_horizon(&PollutantReadings::default(), &history, 0)
            .unwrap();
        assert!(out.is_empty());
        assert_eq!(history, AqiHistory::seeded());
    }

    #[test]
    fn test_boxed_model_object() {
        struct Fixed(f64);
        impl Regressor for Fixed {
            fn predict(&self, _: &FeatureVector) -> ForecastResult<Vec<f64>> {
                Ok(vec![self.0, -1.0])
            }
        }

        let model: Box<dyn Regressor> = Box::new(Fixed(88.0));
        let f = Forecaster::new(model, FeatureSchema::default());
        let out = f
            .forecast_horizon(&PollutantReadings::default(), &AqiHistory::seeded(), 3)
            .unwrap();
        assert_eq!(out, vec![88.0, 88.0, 88.0]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn aqi_strategy() -> impl Strategy<Value = f64> {
        0.0f64..600.0
    }

    fn history_strategy() -> impl Strategy<Value = AqiHistory> {
        prop::collection::vec(aqi_strategy(), 3..20).prop_map(|v| AqiHistory::new(v).unwrap())
    }

    fn readings_strategy() -> impl Strategy<Value = PollutantReadings> {
        prop::collection::vec(0.0f64..500.0, 11).prop_map(|v| {
            let mut readings = PollutantReadings::default();
            for (p, value) in Pollutant::ALL.iter().zip(v) {
                readings.set(*p, value);
            }
            readings
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Lag and rolling features come from the tail of the history
        #[test]
        fn prop_lag_and_roll_from_tail(p in readings_strategy(), h in history_strategy()) {
            let features = assemble_features(&p, &h);
            let values = h.as_slice();
            let n = values.len();

            prop_assert_eq!(features.lag1(), Some(values[n - 1]));
            let mean = (values[n - 3] + values[n - 2] + values[n - 1]) / 3.0;
            prop_assert!((features.roll3().unwrap() - mean).abs() < 1e-9);
        }

        /// predict_next grows history by exactly one and keeps the prefix
        #[test]
        fn prop_predict_next_append_only(p in readings_strategy(), h in history_strategy()) {
            let f = forecaster();
            let mut updated = h.clone();
            let prediction = f.predict_next(&p, &mut updated).unwrap();

            prop_assert_eq!(updated.len(), h.len() + 1);
            prop_assert_eq!(&updated.as_slice()[..h.len()], h.as_slice());
            prop_assert_eq!(updated.lag1(), prediction);
        }

        /// Horizon returns `steps` values and never touches the input history
        #[test]
        fn prop_horizon_isolated(
            p in readings_strategy(),
            h in history_strategy(),
            steps in 0usize..10
        ) {
            let f = forecaster();
            let before = h.clone();
            let first = f.forecast_horizon(&p, &h, steps).unwrap();
            let second = f.forecast_horizon(&p, &h, steps).unwrap();

            prop_assert_eq!(first.len(), steps);
            prop_assert_eq!(&h, &before);
            prop_assert_eq!(first, second);
        }

        /// A horizon is the same as chaining predict_next on a copy
        #[test]
        fn prop_horizon_matches_chained_predictions(
            p in readings_strategy(),
            h in history_strategy(),
            steps in 1usize..8
        ) {
            let f = forecaster();
            let horizon = f.forecast_horizon(&p, &h, steps).unwrap();

            let mut copy = h.clone();
            let chained: Vec<f64> = (0..steps)
                .map(|_| f.predict_next(&p, &mut copy).unwrap())
                .collect();

            prop_assert_eq!(horizon, chained);
        }
    }
}
