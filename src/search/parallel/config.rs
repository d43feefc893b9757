//! Configuration for parallel gap search.

/// Configuration for parallel gap search.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn (one per row partition).
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    /// Set the number of workers, never fewer than one.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the number of workers from an Option, keeping the default on `None`.
    pub fn with_workers_option(self, num_workers: Option<usize>) -> Self {
        match num_workers {
            Some(n) => self.with_workers(n),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParallelConfig::default();
        assert!(config.num_workers >= 1);
    }

    #[test]
    fn test_config_builder() {
        let config = ParallelConfig::default().with_workers(4);
        assert_eq!(config.num_workers, 4);

        let config = ParallelConfig::default()
            .with_workers(3)
            .with_workers_option(None);
        assert_eq!(config.num_workers, 3);

        let config = ParallelConfig::default().with_workers_option(Some(6));
        assert_eq!(config.num_workers, 6);
    }

    #[test]
    fn test_minimum_workers() {
        let config = ParallelConfig::default().with_workers(0);
        assert_eq!(config.num_workers, 1);
    }
}
