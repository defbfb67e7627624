use super::ConfigError;

/// Constructor validation lifecycle shared by kernel structs.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}

/// Check that a sampling interval or rate is usable as a divisor.
pub(crate) fn require_positive_finite(
    arg: &'static str,
    value: f64,
    reason: &'static str,
) -> Result<f64, ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        tracing::debug!(arg, value, "rejecting kernel config");
        return Err(ConfigError::InvalidArgument { arg, reason });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{require_positive_finite, ConfigError, KernelLifecycle};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct DummyConfig {
        interval: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct DummyKernel {
        interval: f64,
    }

    impl KernelLifecycle for DummyKernel {
        type Config = DummyConfig;

        fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
            let interval =
                require_positive_finite("interval", config.interval, "interval must be > 0")?;
            Ok(Self { interval })
        }
    }

    #[test]
    fn lifecycle_constructor_accepts_valid_config() {
        let kernel = DummyKernel::try_new(DummyConfig { interval: 0.25 }).expect("valid config");
        assert_eq!(kernel.interval, 0.25);
    }

    #[test]
    fn lifecycle_constructor_rejects_invalid_config() {
        for interval in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = DummyKernel::try_new(DummyConfig { interval }).expect_err("invalid config");
            assert_eq!(
                err,
                ConfigError::InvalidArgument {
                    arg: "interval",
                    reason: "interval must be > 0",
                }
            );
        }
    }
}
