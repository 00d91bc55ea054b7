//! Bridges CLI arguments and TOML settings into crate configurations.

use cortex_correlate::WindowConfig;
use cortex_interpolate::{InterpolationConfig, InterpolationKernel};
use cortex_smooth::SmoothingKernel;

use crate::cli::{GraphArgs, InterpolationArg, SmoothingArg};
use crate::config::CorrelationToml;

/// Builds the window configuration; CLI flags override TOML defaults.
pub fn build_window_config(toml: &CorrelationToml, args: &GraphArgs) -> WindowConfig {
    WindowConfig::new()
        .with_window_size(args.window_size.unwrap_or(toml.window_size))
        .with_step(args.step.unwrap_or(toml.step))
}

/// Builds the optional interpolation configuration from CLI flags.
pub fn build_interpolation_config(args: &GraphArgs) -> Option<InterpolationConfig> {
    let kernel = match args.interpolation? {
        InterpolationArg::Linear => InterpolationKernel::Linear,
        InterpolationArg::CubicSpline => InterpolationKernel::CubicSpline,
        InterpolationArg::BSpline => InterpolationKernel::BSpline,
        InterpolationArg::UnivariateSpline => InterpolationKernel::UnivariateSpline,
    };
    Some(InterpolationConfig::new(kernel).with_factor(args.factor))
}

/// Builds the optional smoothing kernel from CLI flags.
pub fn build_smoothing_kernel(args: &GraphArgs) -> Option<SmoothingKernel> {
    let kernel = match args.smoothing? {
        SmoothingArg::MovingAverage => SmoothingKernel::MovingAverage {
            window: args.smoothing_window,
        },
        SmoothingArg::Exponential => SmoothingKernel::Exponential { alpha: args.alpha },
        SmoothingArg::Gaussian => SmoothingKernel::Gaussian { sigma: args.sigma },
    };
    Some(kernel)
}
