//! Synthetic samples from the three candidate families.
//!
//! `distfit generate` writes one file per family so the analyzer can be checked
//! against data whose true distribution is known.

use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Exp, Normal};
use tracing::info;

use crate::domain::{Family, GenerateConfig};
use crate::error::AppError;

/// Draw `config.size` values from `family` with the configured parameters.
pub fn generate_values<R: Rng>(family: Family, config: &GenerateConfig, rng: &mut R) -> Result<Vec<f64>, AppError> {
    let n = config.size;
    let values: Vec<f64> = match family {
        Family::Normal => {
            let dist = Normal::new(config.normal_mean, config.normal_std)
                .map_err(|e| AppError::new(2, format!("Invalid normal parameters: {e}")))?;
            dist.sample_iter(rng).take(n).collect()
        }
        Family::Exponential => {
            if !(config.exponential_scale.is_finite() && config.exponential_scale > 0.0) {
                return Err(AppError::new(2, "Exponential scale must be finite and > 0."));
            }
            let dist = Exp::new(1.0 / config.exponential_scale)
                .map_err(|e| AppError::new(2, format!("Invalid exponential parameters: {e}")))?;
            dist.sample_iter(rng).take(n).collect()
        }
        Family::Uniform => {
            let low = config.uniform_low;
            let high = low + config.uniform_width;
            if !(low.is_finite() && high.is_finite() && high > low) {
                return Err(AppError::new(2, "Uniform range must be finite with width > 0."));
            }
            Uniform::new(low, high).sample_iter(rng).take(n).collect()
        }
    };
    Ok(values)
}

/// Write `normal.txt`, `uniform.txt` and `exponential.txt` into `config.out_dir`.
///
/// Returns the written paths in that order.
pub fn write_samples(config: &GenerateConfig) -> Result<Vec<PathBuf>, AppError> {
    if config.size == 0 {
        return Err(AppError::new(2, "Sample size must be > 0."));
    }
    create_dir_all(&config.out_dir).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create output dir '{}': {e}", config.out_dir.display()),
        )
    })?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut written = Vec::new();
    for family in [Family::Normal, Family::Uniform, Family::Exponential] {
        let values = generate_values(family, config, &mut rng)?;
        let path = config.out_dir.join(format!("{}.txt", family.display_name().to_lowercase()));
        write_values(&path, &values)?;
        info!(path = %path.display(), n = values.len(), "wrote sample");
        written.push(path);
    }
    Ok(written)
}

fn write_values(path: &Path, values: &[f64]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);
    for v in values {
        writeln!(out, "{v}").map_err(|e| AppError::new(2, format!("Failed to write '{}': {e}", path.display())))?;
    }
    out.flush()
        .map_err(|e| AppError::new(2, format!("Failed to write '{}': {e}", path.display())))
}
