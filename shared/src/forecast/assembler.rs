//! Feature assembly for a single prediction

use crate::models::{AqiHistory, FeatureVector, PollutantReadings};

/// Build the model input row from today's readings and the AQI history.
///
/// `AQI_lag1` is the last history value and `AQI_roll3` the mean of the
/// last three; pollutant columns pass through unchanged.
pub fn assemble_features(pollutants: &PollutantReadings, history: &AqiHistory) -> FeatureVector {
    FeatureVector::from_parts(
        [
            pollutants.pm2_5,
            pollutants.pm10,
            pollutants.no,
            pollutants.no2,
            pollutants.nox,
            pollutants.nh3,
            pollutants.co,
            pollutants.so2,
            pollutants.o3,
            pollutants.benzene,
            pollutants.toluene,
        ],
        history.lag1(),
        history.roll3(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pollutant, FEATURE_NAMES};

    #[test]
    fn test_seeded_history_with_dashboard_defaults() {
        let pollutants = PollutantReadings::default();
        let features = assemble_features(&pollutants, &AqiHistory::seeded());

        assert_eq!(features.lag1(), Some(150.0));
        assert_eq!(features.roll3(), Some(150.0));
        assert_eq!(features.names(), FEATURE_NAMES.map(String::from).as_slice());
        assert_eq!(
            features.values(),
            &[100.0, 200.0, 30.0, 40.0, 60.0, 20.0, 1.0, 15.0, 80.0, 5.0, 10.0, 150.0, 150.0]
        );
    }

    #[test]
    fn test_pollutants_pass_through() {
        let mut pollutants = PollutantReadings::default();
        pollutants.benzene = 7.25;
        let features = assemble_features(&pollutants, &AqiHistory::seeded());
        for p in Pollutant::ALL {
            assert_eq!(features.pollutant(p), Some(pollutants.get(p)));
        }
    }

    #[test]
    fn test_uses_last_three_values() {
        let history = AqiHistory::new(vec![500.0, 90.0, 120.0, 150.0]).unwrap();
        let features = assemble_features(&PollutantReadings::default(), &history);
        assert_eq!(features.lag1(), Some(150.0));
        assert_eq!(features.roll3(), Some(120.0));
    }
}
