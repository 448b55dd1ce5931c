//! Weather service: cache-first lookups in front of a [`WeatherProvider`].

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use weatherbot_types::error::WeatherError;
use weatherbot_types::weather::WeatherSnapshot;

use super::cache::WeatherCache;
use super::provider::WeatherProvider;

/// Serves snapshots from the cache while fresh, otherwise asks the provider
/// and caches the successful result. Failures are never cached.
pub struct WeatherService<P: WeatherProvider> {
    provider: P,
    cache: WeatherCache,
}

impl<P: WeatherProvider> WeatherService<P> {
    pub fn new(provider: P, cache: WeatherCache) -> Self {
        Self { provider, cache }
    }

    /// Access the underlying cache.
    pub fn cache(&self) -> &WeatherCache {
        &self.cache
    }

    /// Look up current weather for `city` using the wall clock.
    pub async fn lookup(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        self.lookup_at(city, Utc::now()).await
    }

    /// Look up current weather for `city` as of `now`.
    pub async fn lookup_at(
        &self,
        city: &str,
        now: DateTime<Utc>,
    ) -> Result<WeatherSnapshot, WeatherError> {
        if let Some(snapshot) = self.cache.get_fresh(city, now) {
            debug!(city, "Returning cached weather");
            return Ok(snapshot);
        }

        match self.provider.current_weather(city).await {
            Ok(snapshot) => {
                info!(city, name = %snapshot.name, "Fetched weather from provider");
                self.cache.insert(city, snapshot.clone(), now);
                Ok(snapshot)
            }
            Err(e) => {
                warn!(city, error = %e, "Weather lookup failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Provider that counts calls and reports a temperature equal to the call number.
    #[derive(Clone, Default)]
    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl WeatherProvider for CountingProvider {
        async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                return Err(WeatherError::Provider { status: 404 });
            }
            Ok(WeatherSnapshot {
                name: city.to_string(),
                temperature: n as f64,
                feels_like: n as f64,
                description: "clear".to_string(),
                humidity: 50,
                wind_speed: 1.0,
            })
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[tokio::test]
    async fn fresh_entry_skips_provider() {
        let provider = CountingProvider::default();
        let calls = provider.calls.clone();
        let service = WeatherService::new(provider, WeatherCache::new(300, 16));

        let first = service.lookup_at("Paris", at(0)).await.unwrap();
        let second = service.lookup_at("Paris", at(120)).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn stale_entry_refetches_and_overwrites() {
        let provider = CountingProvider::default();
        let calls = provider.calls.clone();
        let service = WeatherService::new(provider, WeatherCache::new(300, 16));

        let first = service.lookup_at("Paris", at(0)).await.unwrap();
        let second = service.lookup_at("Paris", at(301)).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_ne!(first, second);
        assert_eq!(service.cache().fetched_at("Paris"), Some(at(301)));
        assert_eq!(service.cache().get_fresh("Paris", at(302)), Some(second));
    }

    #[tokio::test]
    async fn differently_cased_cities_are_separate_queries() {
        let provider = CountingProvider::default();
        let calls = provider.calls.clone();
        let service = WeatherService::new(provider, WeatherCache::new(300, 16));

        service.lookup_at("Paris", at(0)).await.unwrap();
        service.lookup_at("paris", at(1)).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(service.cache().len(), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let provider = CountingProvider {
            fail: true,
            ..Default::default()
        };
        let calls = provider.calls.clone();
        let service = WeatherService::new(provider, WeatherCache::new(300, 16));

        assert!(service.lookup_at("Atlantis", at(0)).await.is_err());
        assert!(service.lookup_at("Atlantis", at(1)).await.is_err());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(service.cache().is_empty());
    }
}
