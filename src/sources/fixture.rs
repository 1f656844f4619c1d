//! Fixture source reading backend payloads from a directory tree

use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

use crate::schema::{decode_lap_numbers, decode_stints, decode_telemetry};
use crate::source::{TelemetryRequest, TelemetrySource};
use crate::types::{SessionKey, Stint, TelemetrySample};
use crate::{AnalyticsError, Result};

/// Source that serves recorded backend responses from disk.
///
/// Layout under `root`:
///
/// ```text
/// <year>/<event>/<session>/stints.json
/// <year>/<event>/<session>/laps/<DRIVER>.json
/// <year>/<event>/<session>/telemetry/<channel>/<DRIVER>_<lap>.json
/// ```
///
/// `<channel>` is the channel's route name (`speed`, `rpm`, ...) and `<lap>` is
/// either a lap number or `fastest`.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    /// Create a fixture source rooted at `root`.
    ///
    /// Fails with [`AnalyticsError::File`] when `root` is not a directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(AnalyticsError::file_error(
                root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "fixture root is not a directory"),
            ));
        }

        info!("Opened fixture source at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn session_dir(&self, session: &SessionKey) -> PathBuf {
        self.root
            .join(session.year.to_string())
            .join(&session.event)
            .join(&session.session)
    }

    /// Path of the telemetry payload for `request`
    pub fn telemetry_path(&self, request: &TelemetryRequest) -> PathBuf {
        self.session_dir(&request.session)
            .join("telemetry")
            .join(request.channel.route_name())
            .join(format!("{}_{}.json", request.driver, request.lap))
    }

    /// Path of the stint payload for `session`
    pub fn stints_path(&self, session: &SessionKey) -> PathBuf {
        self.session_dir(session).join("stints.json")
    }

    /// Path of the lap listing for `driver` in `session`
    pub fn laps_path(&self, session: &SessionKey, driver: &str) -> PathBuf {
        self.session_dir(session).join("laps").join(format!("{}.json", driver))
    }

    async fn read(&self, path: &Path, resource: impl FnOnce() -> String) -> Result<String> {
        match tokio::fs::read_to_string(path).await {
            Ok(body) => {
                trace!(path = %path.display(), bytes = body.len(), "Read fixture");
                Ok(body)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Fixture missing");
                Err(AnalyticsError::not_found(resource()))
            }
            Err(e) => Err(AnalyticsError::file_error(path.to_path_buf(), e)),
        }
    }
}

#[async_trait::async_trait]
impl TelemetrySource for FixtureSource {
    async fn telemetry(&self, request: &TelemetryRequest) -> Result<Vec<TelemetrySample>> {
        let path = self.telemetry_path(request);
        let body = self
            .read(&path, || {
                format!(
                    "{} {} lap {} in {}",
                    request.driver, request.channel, request.lap, request.session
                )
            })
            .await?;

        let samples = decode_telemetry(&body, request.channel)?;
        debug!(
            driver = %request.driver,
            channel = %request.channel,
            lap = %request.lap,
            samples = samples.len(),
            "Loaded telemetry fixture"
        );
        Ok(samples)
    }

    async fn stints(&self, session: &SessionKey) -> Result<Vec<Stint>> {
        let path = self.stints_path(session);
        let body = self.read(&path, || format!("stints in {}", session)).await?;
        let stints = decode_stints(&body)?;
        debug!(session = %session, stints = stints.len(), "Loaded stint fixture");
        Ok(stints)
    }

    async fn lap_numbers(&self, session: &SessionKey, driver: &str) -> Result<Vec<u32>> {
        if driver.trim().is_empty() {
            return Ok(Vec::new());
        }
        let path = self.laps_path(session, driver);
        let body = self.read(&path, || format!("{} laps in {}", driver, session)).await?;
        decode_lap_numbers(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Channel, LapSelector};

    struct TempTree {
        root: PathBuf,
    }

    impl TempTree {
        fn new(name: &str) -> Self {
            let root = std::env::temp_dir()
                .join(format!("slipstream-fixture-{}-{}", name, std::process::id()));
            let _ = std::fs::remove_dir_all(&root);
            std::fs::create_dir_all(&root).unwrap();
            Self { root }
        }

        fn write(&self, relative: &str, body: &str) {
            let path = self.root.join(relative);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, body).unwrap();
        }
    }

    impl Drop for TempTree {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.root);
        }
    }

    fn monza() -> SessionKey {
        SessionKey::new(2024, "Italian Grand Prix", "R")
    }

    #[test]
    fn missing_root_is_file_error() {
        let err = FixtureSource::new("/definitely/not/a/fixture/root").unwrap_err();
        assert!(matches!(err, AnalyticsError::File { .. }));
    }

    #[test]
    fn paths_follow_layout() {
        let tree = TempTree::new("paths");
        let source = FixtureSource::new(&tree.root).unwrap();
        let request = TelemetryRequest::new(monza(), "LEC", LapSelector::Number(12), Channel::Rpm);

        let path = source.telemetry_path(&request);
        assert!(path.ends_with("2024/Italian Grand Prix/R/telemetry/rpm/LEC_12.json"));
        assert!(source.laps_path(&monza(), "LEC").ends_with("R/laps/LEC.json"));
    }

    #[tokio::test]
    async fn reads_telemetry_for_fastest_lap() {
        let _ = tracing_subscriber::fmt::try_init();
        let tree = TempTree::new("telemetry");
        tree.write(
            "2024/Italian Grand Prix/R/telemetry/speed/LEC_fastest.json",
            r#"[{"Distance": 0.0, "Speed": 280.5}, {"Distance": 12.5, "Speed": null}]"#,
        );
        let source = FixtureSource::new(&tree.root).unwrap();

        let request = TelemetryRequest::new(monza(), "LEC", LapSelector::Fastest, Channel::Speed);
        let samples = source.telemetry(&request).await.unwrap();

        assert_eq!(samples, vec![TelemetrySample::new(0.0, 280.5), TelemetrySample::missing(12.5)]);
    }

    #[tokio::test]
    async fn missing_files_are_not_found() {
        let tree = TempTree::new("missing");
        let source = FixtureSource::new(&tree.root).unwrap();

        let request = TelemetryRequest::new(monza(), "SAI", LapSelector::Number(3), Channel::Gear);
        let err = source.telemetry(&request).await.unwrap_err();
        match err {
            AnalyticsError::NotFound { resource } => {
                assert!(resource.contains("SAI"));
                assert!(resource.contains("lap 3"));
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            source.stints(&monza()).await.unwrap_err(),
            AnalyticsError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn malformed_json_is_decode_error() {
        let tree = TempTree::new("malformed");
        tree.write("2024/Italian Grand Prix/R/stints.json", "{ not json");
        let source = FixtureSource::new(&tree.root).unwrap();

        let err = source.stints(&monza()).await.unwrap_err();
        assert!(matches!(err, AnalyticsError::Decode { .. }));
    }

    #[tokio::test]
    async fn checked_in_fixtures_decode() {
        let root = crate::test_utils::require_fixture_root().unwrap();
        let source = FixtureSource::new(root).unwrap();
        let session = SessionKey::new(2024, "Monaco Grand Prix", "R");

        assert_eq!(source.stints(&session).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn empty_driver_lists_no_laps() {
        let tree = TempTree::new("laps");
        tree.write("2024/Italian Grand Prix/R/laps/LEC.json", r#"{"laps": [1, 2, 3]}"#);
        let source = FixtureSource::new(&tree.root).unwrap();

        assert!(source.lap_numbers(&monza(), "").await.unwrap().is_empty());
        assert_eq!(source.lap_numbers(&monza(), "LEC").await.unwrap(), vec![1, 2, 3]);
    }
}
